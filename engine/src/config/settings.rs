// Dashboard settings, loaded from the embedded default JSON or a user file
use crate::error::EngineError;
use crate::generator::validate_parameters;
use serde::{Deserialize, Serialize};
use shared::models::{IndicatorReading, Instrument, Timeframe};
use std::collections::HashSet;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

fn default_point_count() -> usize {
    48
}

fn default_show_overlay() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub version: String,
    pub instruments: Vec<Instrument>,
    #[serde(default)]
    pub default_timeframe: Timeframe,
    #[serde(default = "default_point_count")]
    pub point_count: usize,
    #[serde(default = "default_show_overlay")]
    pub show_overlay: bool,
    #[serde(default)]
    pub indicator_readings: Vec<IndicatorReading>,
}

impl DashboardSettings {
    pub fn load_default() -> Result<Self, EngineError> {
        Self::from_json_str(DEFAULT_CONFIG)
    }

    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let settings: DashboardSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "Loading dashboard settings from file");
        Self::from_json_str(&json)
    }

    /// A broken instrument table is a configuration defect, so it is
    /// reported here rather than at generation time.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.instruments.is_empty() {
            return Err(EngineError::ConfigError(
                "at least one instrument must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for instrument in &self.instruments {
            if instrument.code.trim().is_empty() {
                return Err(EngineError::ConfigError(
                    "instrument code must not be empty".to_string(),
                ));
            }
            if !seen.insert(instrument.code.as_str()) {
                return Err(EngineError::ConfigError(format!(
                    "duplicate instrument code '{}'",
                    instrument.code
                )));
            }
            validate_parameters(&instrument.code, instrument.base_price, instrument.volatility)?;
        }
        Ok(())
    }
}
