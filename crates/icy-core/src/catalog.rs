use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::creator::CreatorRecord;
use crate::ConfigError;

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub creators: Vec<CreatorRecord>,
}

/// Load and validate a creator catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<CatalogFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog(&content)
}

/// Parse and validate catalog YAML already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_catalog(content: &str) -> Result<CatalogFile, ConfigError> {
    let catalog: CatalogFile = serde_yaml::from_str(content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &CatalogFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for creator in &catalog.creators {
        if creator.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "creator id must be non-empty".to_string(),
            ));
        }

        if creator.display_name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "creator '{}' has an empty display_name",
                creator.id
            )));
        }

        if !creator.engagement_rate.is_finite() || !(0.0..=100.0).contains(&creator.engagement_rate)
        {
            return Err(ConfigError::Validation(format!(
                "creator '{}' has invalid engagement_rate {}; must be within 0-100",
                creator.id, creator.engagement_rate
            )));
        }

        if !seen_ids.insert(creator.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate creator id: '{}'",
                creator.id
            )));
        }
    }

    Ok(())
}
