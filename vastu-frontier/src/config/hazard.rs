//! Hazard avoidance configuration section.

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;

use super::defaults;

/// Hazard zone used by the scorer's hysteresis term.
///
/// ```text
///            mid_threshold
///        ┌─────────────────────┐
///        │    near_threshold   │
///        │      ┌───────┐      │
///        │      │   H   │      │   weight = 0 inside near zone
///        │      └───────┘      │   weight latches to penalty in mid zone
///        └─────────────────────┘
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HazardConfig {
    /// Hazard location in world coordinates
    #[serde(default = "defaults::hazard_location")]
    pub location: WorldPoint,

    /// Agent distance below which the hazard term is switched off (meters)
    #[serde(default = "defaults::near_threshold")]
    pub near_threshold: f32,

    /// Agent distance below which the penalty weight latches on (meters)
    #[serde(default = "defaults::mid_threshold")]
    pub mid_threshold: f32,

    /// Hazard weight before the agent has approached the hazard
    #[serde(default = "defaults::baseline_weight")]
    pub baseline_weight: f32,

    /// Hazard weight once latched
    #[serde(default = "defaults::penalty_weight")]
    pub penalty_weight: f32,

    /// Standard deviation of the noise added to hazard distances (meters)
    #[serde(default = "defaults::noise_std_dev")]
    pub noise_std_dev: f32,

    /// Noise seed (0 = seed from OS entropy)
    #[serde(default)]
    pub noise_seed: u64,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            location: defaults::hazard_location(),
            near_threshold: defaults::near_threshold(),
            mid_threshold: defaults::mid_threshold(),
            baseline_weight: defaults::baseline_weight(),
            penalty_weight: defaults::penalty_weight(),
            noise_std_dev: defaults::noise_std_dev(),
            noise_seed: 0,
        }
    }
}

impl HazardConfig {
    /// A hazard term that never contributes to the cost.
    pub fn disabled() -> Self {
        Self {
            baseline_weight: 0.0,
            penalty_weight: 0.0,
            noise_std_dev: 0.0,
            ..Self::default()
        }
    }
}
