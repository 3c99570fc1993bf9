//! Core types shared by the grid and frontier modules.
//!
//! - [`GridCoord`]: Integer cell indices for grid access
//! - [`WorldPoint`]: Floating-point world coordinates in meters

mod point;

pub use point::{GridCoord, WorldPoint};
