//! Frontier cost model with hazard hysteresis.
//!
//! ```text
//! cost = potential_scale * min_distance * resolution
//!      - gain_scale * size * resolution
//!      + weight * (|hazard - middle| + noise) * resolution
//! ```
//!
//! Lower cost means higher priority: close and large frontiers win, and
//! frontiers far from the hazard are penalized while `weight > 0`.
//!
//! # Hysteresis
//!
//! `weight` depends on where the agent has been, not only where it is:
//!
//! | Agent distance to hazard | Effect on `weight` |
//! |--------------------------|--------------------|
//! | `< near_threshold` | set to 0 |
//! | `< mid_threshold`, latch not set | set to `penalty_weight`, latch set |
//! | otherwise | unchanged |
//!
//! The latch is one-way for the life of the scorer. Together with the
//! per-frontier noise this makes rankings vary between runs and depend on
//! the agent's history; callers needing repeatable rankings should inject
//! [`ZeroNoise`](crate::noise::ZeroNoise) or a seeded source and call
//! [`FrontierScorer::reset_hysteresis`] between runs.

use crate::config::{FrontierSearchConfig, HazardConfig};
use crate::core::WorldPoint;
use crate::noise::{GaussianNoise, NoiseSource};

use super::Frontier;

/// Scores frontiers; owns the hazard hysteresis state.
#[derive(Clone, Debug)]
pub struct FrontierScorer<N: NoiseSource = GaussianNoise> {
    potential_scale: f32,
    gain_scale: f32,
    hazard: HazardConfig,
    noise: N,
    /// Current hazard weight
    weight: f32,
    /// Set once the penalty has been applied
    latched: bool,
}

impl FrontierScorer<GaussianNoise> {
    /// Create a scorer with Gaussian noise seeded from `hazard.noise_seed`.
    pub fn new(search: &FrontierSearchConfig, hazard: HazardConfig) -> Self {
        let noise = GaussianNoise::new(hazard.noise_std_dev, hazard.noise_seed);
        Self::with_noise(search, hazard, noise)
    }
}

impl<N: NoiseSource> FrontierScorer<N> {
    /// Create a scorer with an explicit noise source.
    pub fn with_noise(search: &FrontierSearchConfig, hazard: HazardConfig, noise: N) -> Self {
        Self {
            potential_scale: search.potential_scale,
            gain_scale: search.gain_scale,
            weight: hazard.baseline_weight,
            latched: false,
            hazard,
            noise,
        }
    }

    /// Current hazard weight.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// True once the penalty weight has latched.
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Hazard settings in use.
    pub fn hazard(&self) -> &HazardConfig {
        &self.hazard
    }

    /// Restore the baseline weight and clear the latch.
    pub fn reset_hysteresis(&mut self) {
        self.weight = self.hazard.baseline_weight;
        self.latched = false;
    }

    /// Update the hazard weight from the agent's live position.
    ///
    /// Returns the weight after the update.
    pub fn update_hysteresis(&mut self, agent_position: WorldPoint) -> f32 {
        let agent_distance = agent_position.distance(&self.hazard.location);

        if agent_distance < self.hazard.near_threshold {
            log::debug!(
                "Agent at ({:.2},{:.2}) is {:.2}m from hazard, inside near zone",
                agent_position.x,
                agent_position.y,
                agent_distance
            );
            if self.weight != 0.0 {
                log::info!(
                    "Agent within {:.2}m of hazard at ({:.2},{:.2}), hazard weight off",
                    agent_distance,
                    self.hazard.location.x,
                    self.hazard.location.y
                );
            }
            self.weight = 0.0;
        } else if agent_distance < self.hazard.mid_threshold && !self.latched {
            log::info!(
                "Agent within {:.2}m of hazard, latching hazard weight {:.2}",
                agent_distance,
                self.hazard.penalty_weight
            );
            self.weight = self.hazard.penalty_weight;
            self.latched = true;
        }

        self.weight
    }

    /// Score a frontier for an agent at `agent_position`.
    ///
    /// Updates the hysteresis state first, then draws one noise sample for
    /// the hazard distance.
    pub fn score(
        &mut self,
        frontier: &Frontier,
        agent_position: WorldPoint,
        resolution: f32,
    ) -> f32 {
        let weight = self.update_hysteresis(agent_position);

        let hazard_distance =
            self.hazard.location.distance(&frontier.middle) + self.noise.next_gaussian();

        self.potential_scale * frontier.min_distance * resolution
            - self.gain_scale * frontier.size as f32 * resolution
            + weight * hazard_distance * resolution
    }
}
