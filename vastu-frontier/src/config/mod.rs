//! Configuration loading for frontier exploration.
//!
//! Loads search and hazard settings from a single YAML file with sensible
//! defaults for every field.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_frontier::config::ExploreConfig;
//!
//! // Load from default path (configs/frontier.yaml), or built-in defaults
//! let config = ExploreConfig::load_default()?;
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! search:
//!   potential_scale: 3.0    # distance weight
//!   gain_scale: 1.0         # size weight
//!   min_frontier_size: 0.5  # meters
//!
//! hazard:
//!   location: { x: -2.91756, y: -5.26284 }
//!   near_threshold: 3.0
//!   mid_threshold: 6.0
//!   baseline_weight: 1.0
//!   penalty_weight: 3.0
//!   noise_std_dev: 0.2
//!   noise_seed: 0           # 0 = entropy
//! ```

mod defaults;
mod error;
mod explore;
mod hazard;
mod search;

pub use error::ConfigLoadError;
pub use explore::ExploreConfig;
pub use hazard::HazardConfig;
pub use search::FrontierSearchConfig;
