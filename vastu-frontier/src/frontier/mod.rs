//! Frontier detection and scoring.
//!
//! A frontier is a connected region of unknown cells bordering known free
//! space. Search runs in three stages:
//!
//! ```text
//! search (4-connected scan) ──▶ builder (8-connected region) ──▶ scorer
//! ```
//!
//! - [`FrontierSearch`]: reachability scan from the agent, size filter, sort
//! - [`build_frontier`]: grows one region and computes its geometry
//! - [`FrontierScorer`]: cost model with hazard hysteresis and noise

mod builder;
mod scorer;
mod search;
mod types;

pub use builder::{build_frontier, is_new_frontier_cell};
pub use scorer::FrontierScorer;
pub use search::FrontierSearch;
pub use types::{Frontier, SearchStats};
