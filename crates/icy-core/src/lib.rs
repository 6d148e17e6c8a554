pub mod app_config;
pub mod catalog;
pub mod config;
pub mod creator;
pub mod criteria;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, parse_catalog, CatalogFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use creator::{ContentItem, CreatorRecord};
pub use criteria::{
    BrandCriteria, BrandTone, BudgetTier, CampaignGoal, Platform, ValidationError,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read creator catalog at {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse creator catalog: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
