use std::{fmt, sync::Arc, time::Duration};

use marquee_model::ContentCatalog;

use super::config::Config;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<ContentCatalog>,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: ContentCatalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn search_delay(&self) -> Duration {
        self.config.search.delay
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("sections", &self.catalog.sections.len())
            .field("items", &self.catalog.item_count())
            .field("search_delay", &self.config.search.delay)
            .finish_non_exhaustive()
    }
}
