//! Default value functions for serde deserialization.

use crate::core::WorldPoint;

pub fn potential_scale() -> f32 {
    3.0
}

pub fn gain_scale() -> f32 {
    1.0
}

pub fn min_frontier_size() -> f32 {
    0.5
}

pub fn hazard_location() -> WorldPoint {
    WorldPoint::new(-2.91756, -5.26284)
}

pub fn near_threshold() -> f32 {
    3.0
}

pub fn mid_threshold() -> f32 {
    6.0
}

pub fn baseline_weight() -> f32 {
    1.0
}

pub fn penalty_weight() -> f32 {
    3.0
}

pub fn noise_std_dev() -> f32 {
    0.2
}
