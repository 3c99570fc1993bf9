//! In-memory cost grid.

use crate::core::{GridCoord, WorldPoint};

use super::{CostGrid, costs};

/// Row-major grid of traversal costs.
///
/// The grid uses a coordinate system where:
/// - (0, 0) is at `origin` in world coordinates
/// - Cell (x, y) covers the area from (origin + x*resolution) to (origin + (x+1)*resolution)
/// - World coordinates returned for a cell are its center
#[derive(Clone, Debug)]
pub struct Costmap {
    /// Grid dimensions
    size_x: usize,
    size_y: usize,
    /// Resolution in meters per cell
    resolution: f32,
    /// World coordinates of the (0, 0) corner
    origin: WorldPoint,
    /// Cost values, index = y * size_x + x
    costs: Vec<u8>,
}

impl Costmap {
    /// Create a grid with every cell set to [`costs::NO_INFORMATION`].
    pub fn new(size_x: usize, size_y: usize, resolution: f32, origin: WorldPoint) -> Self {
        Self::filled(size_x, size_y, resolution, origin, costs::NO_INFORMATION)
    }

    /// Create a grid with every cell set to `value`.
    pub fn filled(
        size_x: usize,
        size_y: usize,
        resolution: f32,
        origin: WorldPoint,
        value: u8,
    ) -> Self {
        Self {
            size_x,
            size_y,
            resolution,
            origin,
            costs: vec![value; size_x * size_y],
        }
    }

    /// Create a grid from an existing row-major cost buffer.
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn from_costs(
        size_x: usize,
        size_y: usize,
        resolution: f32,
        origin: WorldPoint,
        costs: Vec<u8>,
    ) -> Option<Self> {
        if costs.len() != size_x * size_y {
            return None;
        }
        Some(Self {
            size_x,
            size_y,
            resolution,
            origin,
            costs,
        })
    }

    /// World coordinates of cell (0, 0) corner.
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Raw cost buffer.
    #[inline]
    pub fn costs(&self) -> &[u8] {
        &self.costs
    }

    /// Check if grid coordinates are inside the grid.
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.size_x
            && (coord.y as usize) < self.size_y
    }

    /// Get cost at grid coordinate.
    ///
    /// Out-of-bounds coordinates read as [`costs::NO_INFORMATION`].
    #[inline]
    pub fn cost_at(&self, coord: GridCoord) -> u8 {
        if !self.is_valid_coord(coord) {
            return costs::NO_INFORMATION;
        }
        self.costs[self.index(coord)]
    }

    /// Set cost at grid coordinate. Returns false if out of bounds.
    pub fn set_cost(&mut self, coord: GridCoord, value: u8) -> bool {
        if !self.is_valid_coord(coord) {
            return false;
        }
        let index = self.index(coord);
        self.costs[index] = value;
        true
    }

    /// Set every cell in the inclusive rectangle `min..=max` to `value`.
    ///
    /// Parts of the rectangle outside the grid are ignored.
    pub fn fill_rect(&mut self, min: GridCoord, max: GridCoord, value: u8) {
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                self.set_cost(GridCoord::new(x, y), value);
            }
        }
    }

    /// Count cells holding `value`.
    pub fn count(&self, value: u8) -> usize {
        self.costs.iter().filter(|&&c| c == value).count()
    }
}

impl CostGrid for Costmap {
    #[inline]
    fn size_x(&self) -> usize {
        self.size_x
    }

    #[inline]
    fn size_y(&self) -> usize {
        self.size_y
    }

    #[inline]
    fn resolution(&self) -> f32 {
        self.resolution
    }

    #[inline]
    fn cost(&self, index: usize) -> u8 {
        self.costs[index]
    }

    #[inline]
    fn world_to_grid(&self, point: WorldPoint) -> Option<GridCoord> {
        let x = ((point.x - self.origin.x) / self.resolution).floor();
        let y = ((point.y - self.origin.y) / self.resolution).floor();

        // NaN fails both comparisons
        if !(x >= 0.0 && y >= 0.0) || x >= self.size_x as f32 || y >= self.size_y as f32 {
            return None;
        }
        Some(GridCoord::new(x as i32, y as i32))
    }

    #[inline]
    fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (coord.x as f32 + 0.5) * self.resolution,
            self.origin.y + (coord.y as f32 + 0.5) * self.resolution,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_grid() -> Costmap {
        let mut grid = Costmap::new(20, 10, 0.25, WorldPoint::new(-2.5, -1.25));
        grid.fill_rect(GridCoord::new(0, 0), GridCoord::new(9, 9), costs::FREE_SPACE);
        grid
    }

    #[test]
    fn test_costmap_creation() {
        let grid = create_test_grid();
        assert_eq!(grid.size_x(), 20);
        assert_eq!(grid.size_y(), 10);
        assert_eq!(grid.cell_count(), 200);
        assert_eq!(grid.count(costs::FREE_SPACE), 100);
        assert_eq!(grid.count(costs::NO_INFORMATION), 100);
    }

    #[test]
    fn test_coordinate_conversion() {
        let grid = create_test_grid();

        let coord = grid.world_to_grid(WorldPoint::ZERO).unwrap();
        assert_eq!(coord, GridCoord::new(10, 5));

        // Round trip lands on the cell center
        let center = grid.grid_to_world(coord);
        assert!((center.x - 0.125).abs() < 1e-5);
        assert!((center.y - 0.125).abs() < 1e-5);
        assert_eq!(grid.world_to_grid(center), Some(coord));
    }

    #[test]
    fn test_world_to_grid_out_of_bounds() {
        let grid = create_test_grid();
        assert!(grid.world_to_grid(WorldPoint::new(-2.51, 0.0)).is_none());
        assert!(grid.world_to_grid(WorldPoint::new(0.0, 1.25)).is_none());
        assert!(grid.world_to_grid(WorldPoint::new(2.5, 0.0)).is_none());
        assert!(grid.world_to_grid(WorldPoint::new(f32::NAN, 0.0)).is_none());
        assert!(grid.world_to_grid(WorldPoint::new(2.49, 1.24)).is_some());
    }

    #[test]
    fn test_index_conversion() {
        let grid = create_test_grid();
        let coord = GridCoord::new(7, 3);
        let index = grid.index(coord);
        assert_eq!(index, 67);
        assert_eq!(grid.index_to_cells(index), coord);
        assert_eq!(grid.index_to_world(index), grid.grid_to_world(coord));
    }

    #[test]
    fn test_set_cost_bounds() {
        let mut grid = create_test_grid();
        assert!(grid.set_cost(GridCoord::new(15, 2), costs::LETHAL_OBSTACLE));
        assert_eq!(grid.cost_at(GridCoord::new(15, 2)), costs::LETHAL_OBSTACLE);
        assert!(!grid.set_cost(GridCoord::new(20, 0), costs::FREE_SPACE));
        assert_eq!(grid.cost_at(GridCoord::new(-1, 0)), costs::NO_INFORMATION);
    }

    #[test]
    fn test_from_costs_length_mismatch() {
        assert!(Costmap::from_costs(3, 3, 0.1, WorldPoint::ZERO, vec![0; 8]).is_none());
        let grid = Costmap::from_costs(3, 3, 0.1, WorldPoint::ZERO, vec![0; 9]).unwrap();
        assert_eq!(grid.costs().len(), 9);
    }
}
