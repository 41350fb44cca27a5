//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! cutoff_hour = 13
//! year_source_label = "năm"
//! term_source_label = "tiết"
//!
//! [data]
//! charts = "data/DATA_laso.csv"
//! conditions = "data/data_condition.csv"
//! calendar = "data/amlich_normalized.csv"
//! solar_terms = "data/solar_terms.csv"
//! ```
//!
//! Every key is optional. Relative data paths are resolved against the
//! directory of the config file.

use std::path::Path;

use serde::Deserialize;
use tracing::info;
use tuhoa_time::{DEFAULT_CUTOFF_HOUR, SolarTermConfig};

use crate::dataset::DataPaths;
use crate::error::EngineError;

/// Highest accepted cutoff hour; 24 means a term never moves to the next day.
const MAX_CUTOFF_HOUR: u32 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Local hour from which a month-opening term counts from the next day.
    pub cutoff_hour: u32,
    /// Source label on badges derived from the year stem.
    pub year_source_label: String,
    /// Source label on badges derived from the solar-term month stem.
    pub term_source_label: String,
    pub data: DataPaths,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cutoff_hour: DEFAULT_CUTOFF_HOUR,
            year_source_label: "năm".to_string(),
            term_source_label: "tiết".to_string(),
            data: DataPaths::default(),
        }
    }
}

impl EngineConfig {
    /// Read a TOML config file.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Io(format!("{}: {e}", path.display())))?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(dir) = path.parent() {
            config.data = config.data.relative_to(dir);
        }
        info!(path = %path.display(), cutoff_hour = config.cutoff_hour, "config loaded");
        Ok(config)
    }

    /// Parse TOML text. Data paths are kept as written.
    pub fn from_toml_str(content: &str) -> Result<Self, EngineError> {
        let config: Self =
            toml::from_str(content).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges. Run again after changing fields by hand.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.cutoff_hour > MAX_CUTOFF_HOUR {
            return Err(EngineError::Config(format!(
                "cutoff_hour must be 0..={MAX_CUTOFF_HOUR}, got {}",
                self.cutoff_hour
            )));
        }
        if self.year_source_label.trim().is_empty() || self.term_source_label.trim().is_empty() {
            return Err(EngineError::Config("source labels must not be blank".to_string()));
        }
        Ok(())
    }

    /// Settings for active-month resolution.
    pub fn solar_term_config(&self) -> SolarTermConfig {
        SolarTermConfig::new(self.cutoff_hour)
    }
}
