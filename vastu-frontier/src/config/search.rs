//! Frontier search configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights and filters applied to every search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrontierSearchConfig {
    /// Weight on the distance to the frontier (favors closer frontiers)
    #[serde(default = "defaults::potential_scale")]
    pub potential_scale: f32,

    /// Weight on the frontier size (favors larger frontiers)
    #[serde(default = "defaults::gain_scale")]
    pub gain_scale: f32,

    /// Minimum frontier length in meters (cells × resolution)
    #[serde(default = "defaults::min_frontier_size")]
    pub min_frontier_size: f32,
}

impl Default for FrontierSearchConfig {
    fn default() -> Self {
        Self {
            potential_scale: defaults::potential_scale(),
            gain_scale: defaults::gain_scale(),
            min_frontier_size: defaults::min_frontier_size(),
        }
    }
}
