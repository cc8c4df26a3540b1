//! Catalog loading from the content JSON file.

use std::{fs, path::Path};
use thiserror::Error;
use tracing::info;

use marquee_model::{ContentCatalog, ModelError};

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read content file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("content file {path} is invalid")]
    Invalid {
        path: String,
        #[source]
        source: ModelError,
    },
}

/// Reads and validates the catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<ContentCatalog, ContentLoadError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        path: path_display.clone(),
        source,
    })?;
    let catalog: ContentCatalog =
        serde_json::from_str(&raw).map_err(|source| {
            ContentLoadError::Parse {
                path: path_display.clone(),
                source,
            }
        })?;
    catalog
        .validate()
        .map_err(|source| ContentLoadError::Invalid {
            path: path_display.clone(),
            source,
        })?;

    info!(
        path = %path_display,
        sections = catalog.sections.len(),
        items = catalog.item_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog =
            load_catalog(&crate::infra::config::models::default_content_path())
                .expect("bundled catalog");
        assert!(catalog.sections.len() >= 3);
        let ranked: Vec<u32> = catalog.sections[0]
            .items
            .iter()
            .map(|item| item.id.get())
            .collect();
        assert_eq!(ranked, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"{{"sections":[{{"title":"A","items":[
                {{"id":1,"title":"One","image":"/1.jpg"}},
                {{"id":1,"title":"Again","image":"/1.jpg"}}]}}]}}"#
        )
        .expect("write");
        assert!(matches!(
            load_catalog(file.path()),
            Err(ContentLoadError::Invalid { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "{{ not json").expect("write");
        assert!(matches!(
            load_catalog(file.path()),
            Err(ContentLoadError::Parse { .. })
        ));
    }
}
