//! Store configuration.
//!
//! Every field has a default, so a partial JSON document is enough:
//!
//! ```ignore
//! let config = StoreConfig::from_json_str(r#"{ "csvStyle": "quoted" }"#)?.apply_env()?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::asset::{ACTIVE, UNDER_MAINTENANCE};
use crate::csv::CsvStyle;
use crate::error::ConfigError;
use crate::id::IdStrategy;
use crate::query::SearchField;

pub const ENV_DEFAULT_STATUS: &str = "ASSET_TRACKER_DEFAULT_STATUS";
pub const ENV_ID_STRATEGY: &str = "ASSET_TRACKER_ID_STRATEGY";
pub const ENV_CSV_STYLE: &str = "ASSET_TRACKER_CSV_STYLE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Status given to drafts that leave it blank.
    pub default_status: String,
    /// Status counted as active in stats and rendered with the green badge.
    pub active_status: String,
    /// Status rendered with the yellow badge.
    pub maintenance_status: String,
    /// Fields probed by the free-text search term.
    pub search_fields: Vec<SearchField>,
    pub id_strategy: IdStrategy,
    pub csv_style: CsvStyle,
    pub export_file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            default_status: ACTIVE.to_string(),
            active_status: ACTIVE.to_string(),
            maintenance_status: UNDER_MAINTENANCE.to_string(),
            search_fields: SearchField::DEFAULT.to_vec(),
            id_strategy: IdStrategy::default(),
            csv_style: CsvStyle::default(),
            export_file_name: "assets.csv".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Override fields from `ASSET_TRACKER_*` environment variables.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(status) = lookup(ENV_DEFAULT_STATUS) {
            self.default_status = status;
        }
        if let Some(strategy) = lookup(ENV_ID_STRATEGY) {
            self.id_strategy = strategy.parse().map_err(ConfigError::Invalid)?;
        }
        if let Some(style) = lookup(ENV_CSV_STYLE) {
            self.csv_style = style.parse().map_err(ConfigError::Invalid)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("defaultStatus", &self.default_status),
            ("activeStatus", &self.active_status),
            ("maintenanceStatus", &self.maintenance_status),
            ("exportFileName", &self.export_file_name),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be blank", field)));
            }
        }
        if self.search_fields.is_empty() {
            return Err(ConfigError::Invalid(
                "searchFields must name at least one field".to_string(),
            ));
        }
        Ok(())
    }
}
