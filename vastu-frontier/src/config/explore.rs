//! Main ExploreConfig and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigLoadError;
use super::hazard::HazardConfig;
use super::search::FrontierSearchConfig;

/// Full frontier exploration configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ExploreConfig {
    /// Search weights and size filter
    #[serde(default)]
    pub search: FrontierSearchConfig,

    /// Hazard zone and hysteresis settings
    #[serde(default)]
    pub hazard: HazardConfig,
}

impl ExploreConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/frontier.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/frontier.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable by the search and scorer.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let search = &self.search;
        let hazard = &self.hazard;

        let finite = [
            ("search.potential_scale", search.potential_scale),
            ("search.gain_scale", search.gain_scale),
            ("search.min_frontier_size", search.min_frontier_size),
            ("hazard.location.x", hazard.location.x),
            ("hazard.location.y", hazard.location.y),
            ("hazard.near_threshold", hazard.near_threshold),
            ("hazard.mid_threshold", hazard.mid_threshold),
            ("hazard.baseline_weight", hazard.baseline_weight),
            ("hazard.penalty_weight", hazard.penalty_weight),
            ("hazard.noise_std_dev", hazard.noise_std_dev),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigLoadError::Invalid(format!("{} = {}", name, value)));
        }

        if search.min_frontier_size < 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "search.min_frontier_size must be >= 0, got {}",
                search.min_frontier_size
            )));
        }
        if hazard.noise_std_dev < 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "hazard.noise_std_dev must be >= 0, got {}",
                hazard.noise_std_dev
            )));
        }
        if hazard.near_threshold > hazard.mid_threshold {
            return Err(ConfigLoadError::Invalid(format!(
                "hazard.near_threshold ({}) exceeds hazard.mid_threshold ({})",
                hazard.near_threshold, hazard.mid_threshold
            )));
        }

        Ok(())
    }
}
