use axum::http::HeaderValue;
use std::time::Duration;
use thiserror::Error;

use super::models::Config;

/// Search delays above this are almost certainly a unit mistake.
const SUSPICIOUS_SEARCH_DELAY: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("CORS origin '{origin}' is not a valid header value")]
    InvalidCorsOrigin { origin: String },
    #[error("server host must not be empty")]
    EmptyHost,
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.server.host.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyHost);
    }

    for origin in &config.cors.allowed_origins {
        if origin != "*" && HeaderValue::from_str(origin).is_err() {
            return Err(ConfigGuardRailError::InvalidCorsOrigin {
                origin: origin.clone(),
            });
        }
    }

    if config.search.delay > SUSPICIOUS_SEARCH_DELAY {
        warnings.push_with_hint(
            format!(
                "search delay of {} ms is unusually long",
                config.search.delay.as_millis()
            ),
            "SEARCH_DELAY_MS and search.delay_ms are in milliseconds",
        );
    }

    if !config.content.path.exists() {
        warnings.push_with_hint(
            format!(
                "content file {} does not exist",
                config.content.path.display()
            ),
            "Set CONTENT_PATH or content.path to a catalog JSON file",
        );
    }

    Ok(warnings)
}
