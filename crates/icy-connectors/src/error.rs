use icy_core::{ConfigError, Platform};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("creator not found: {0}")]
    NotFound(String),

    #[error("{platform} connector unavailable: {reason}")]
    Unavailable { platform: Platform, reason: String },

    #[error("no connector registered for platform {0}")]
    UnsupportedPlatform(Platform),

    #[error("creator catalog error: {0}")]
    Catalog(#[from] ConfigError),
}
