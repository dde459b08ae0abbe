#[cfg(feature = "serde")]
use std::path::Path;

use crate::config::{ConfigMap, PrintField};
use crate::types::*;

/// Load print settings from a JSON file.
///
/// The file is a flat object of field name to number or string. Unknown
/// field names are rejected so typos do not silently fall back to defaults.
#[cfg(feature = "serde")]
pub async fn load_config_map(path: impl AsRef<Path>) -> Result<ConfigMap> {
    let bytes = tokio::fs::read(path).await?;
    let map: ConfigMap = serde_json::from_slice(&bytes)
        .map_err(|e| LabelError::Config(format!("Failed to parse settings: {}", e)))?;
    validate_keys(&map)?;
    Ok(map)
}

/// Check that every key names a print field
pub fn validate_keys(map: &ConfigMap) -> Result<()> {
    match map.keys().find(|key| PrintField::from_name(key).is_none()) {
        Some(key) => Err(LabelError::Config(format!(
            "Unknown print setting '{}'",
            key
        ))),
        None => Ok(()),
    }
}
