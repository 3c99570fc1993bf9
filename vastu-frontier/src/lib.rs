//! # VastuFrontier
//!
//! Frontier detection and scoring on 2D cost grids for autonomous exploration.
//!
//! ## Overview
//!
//! A frontier is a connected region of unknown cells that borders known free
//! space. Driving to frontiers is how an exploring robot grows its map. Given
//! a cost grid and the robot's position, this crate:
//!
//! - **Finds** every frontier reachable from the robot
//! - **Summarizes** each one (cells, centroid, closest cell, distance)
//! - **Scores** them by distance, size and proximity to a hazard zone
//! - **Sorts** them so the preferred goal comes first
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use parking_lot::RwLock;
//! use vastu_frontier::{Costmap, ExploreConfig, FrontierSearch, WorldPoint};
//!
//! let config = ExploreConfig::load_default()?;
//! let grid = Arc::new(RwLock::new(Costmap::new(400, 400, 0.05, WorldPoint::new(-10.0, -10.0))));
//! let mut search = FrontierSearch::new(Arc::clone(&grid), &config);
//!
//! // Mapping thread writes through `grid.write()` while searches read
//! let frontiers = search.search_from(WorldPoint::new(0.0, 0.0))?;
//! if let Some(goal) = frontiers.first() {
//!     println!("Next goal: ({:.2}, {:.2})", goal.middle.x, goal.middle.y);
//! }
//! ```
//!
//! ## Cost Convention
//!
//! Cell costs follow the ROS costmap byte convention (see [`grid::costs`]):
//! 0 is free, 253 inscribed-inflated, 254 lethal and 255 unknown.

#![warn(missing_docs)]

// Points and grid coordinates
pub mod core;

// Cost grid trait, costmap and neighborhoods
pub mod grid;

// YAML configuration
pub mod config;

// Noise sources for scoring
pub mod noise;

// Search, cluster builder and scorer
pub mod frontier;

pub mod error;

// Re-export commonly used types
pub use crate::core::{GridCoord, WorldPoint};

pub use grid::{CostGrid, Costmap, SharedGrid, costs};

pub use config::{ConfigLoadError, ExploreConfig, FrontierSearchConfig, HazardConfig};

pub use noise::{GaussianNoise, NoiseSource, ZeroNoise};

pub use frontier::{Frontier, FrontierScorer, FrontierSearch, SearchStats};

pub use error::{FrontierError, Result};
