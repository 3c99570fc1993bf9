//! Cost grid collaborators used by frontier search.
//!
//! Frontier search never touches grid storage directly. It reads cells
//! through the [`CostGrid`] trait and walks the grid with the index-based
//! neighborhood helpers in [`neighborhood`].
//!
//! ## Index Space
//!
//! Cells are addressed either by [`GridCoord`] or by a flat row-major index:
//!
//! ```text
//! index = y * size_x + x          0 <= index < size_x * size_y
//!
//!   y
//!   ▲  10 11 12 13 14
//!   │   5  6  7  8  9
//!   │   0  1  2  3  4
//!   └──────────────────► x
//! ```
//!
//! ## Cost Values
//!
//! Each cell stores a traversal cost byte (see [`costs`]). Frontier search
//! only distinguishes [`costs::FREE_SPACE`] and [`costs::NO_INFORMATION`];
//! everything in between is an ordinary cost used by the descending scan.

mod costmap;
pub mod neighborhood;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::{GridCoord, WorldPoint};

pub use costmap::Costmap;
pub use neighborhood::{nearest_cell, nhood4, nhood8};

/// Cost values for grid cells.
pub mod costs {
    /// Known free space
    pub const FREE_SPACE: u8 = 0;
    /// Within the robot's inscribed radius of an obstacle
    pub const INSCRIBED_INFLATED_OBSTACLE: u8 = 253;
    /// Obstacle
    pub const LETHAL_OBSTACLE: u8 = 254;
    /// Never observed
    pub const NO_INFORMATION: u8 = 255;
}

/// A grid shared between a map-maintenance writer and frontier queries.
pub type SharedGrid<G> = Arc<RwLock<G>>;

/// Read access to a 2D cost grid.
///
/// Implementors provide dimensions, resolution, cell costs and the
/// world/grid transforms. The index helpers have default implementations
/// over the row-major layout.
pub trait CostGrid {
    /// Grid width in cells.
    fn size_x(&self) -> usize;

    /// Grid height in cells.
    fn size_y(&self) -> usize;

    /// Resolution in meters per cell.
    fn resolution(&self) -> f32;

    /// Cost of the cell at a flat index.
    ///
    /// Callers only pass indices below [`CostGrid::cell_count`].
    fn cost(&self, index: usize) -> u8;

    /// Convert a world point to grid coordinates.
    ///
    /// Returns `None` when the point lies outside the grid.
    fn world_to_grid(&self, point: WorldPoint) -> Option<GridCoord>;

    /// Convert grid coordinates to world coordinates (cell center).
    fn grid_to_world(&self, coord: GridCoord) -> WorldPoint;

    /// Total number of cells.
    #[inline]
    fn cell_count(&self) -> usize {
        self.size_x() * self.size_y()
    }

    /// Flat index of an in-bounds coordinate.
    #[inline]
    fn index(&self, coord: GridCoord) -> usize {
        coord.y as usize * self.size_x() + coord.x as usize
    }

    /// Grid coordinates of a flat index.
    #[inline]
    fn index_to_cells(&self, index: usize) -> GridCoord {
        let size_x = self.size_x();
        GridCoord::new((index % size_x) as i32, (index / size_x) as i32)
    }

    /// World coordinates (cell center) of a flat index.
    #[inline]
    fn index_to_world(&self, index: usize) -> WorldPoint {
        self.grid_to_world(self.index_to_cells(index))
    }
}
