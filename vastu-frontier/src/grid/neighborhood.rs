//! Index-based neighborhood enumeration and nearest-cell search.
//!
//! All helpers work on flat row-major indices and clip to the grid bounds,
//! so cells on the border yield fewer neighbors. Indices outside the grid
//! yield none.

use std::collections::VecDeque;

use super::CostGrid;

/// 4-connected neighbors of `index`: left, right, down, up.
pub fn nhood4<G: CostGrid + ?Sized>(index: usize, grid: &G) -> impl Iterator<Item = usize> {
    let size_x = grid.size_x();
    let size_y = grid.size_y();
    let (x, y, in_grid) = split_index(index, size_x, size_y);

    [
        (in_grid && x > 0).then(|| index - 1),
        (in_grid && x + 1 < size_x).then(|| index + 1),
        (in_grid && y > 0).then(|| index - size_x),
        (in_grid && y + 1 < size_y).then(|| index + size_x),
    ]
    .into_iter()
    .flatten()
}

/// 8-connected neighbors of `index`: the 4-connected cells, then diagonals.
pub fn nhood8<G: CostGrid + ?Sized>(index: usize, grid: &G) -> impl Iterator<Item = usize> {
    let size_x = grid.size_x();
    let size_y = grid.size_y();
    let (x, y, in_grid) = split_index(index, size_x, size_y);

    let left = in_grid && x > 0;
    let right = in_grid && x + 1 < size_x;
    let down = in_grid && y > 0;
    let up = in_grid && y + 1 < size_y;

    let diagonals = [
        (left && down).then(|| index - 1 - size_x),
        (left && up).then(|| index - 1 + size_x),
        (right && down).then(|| index + 1 - size_x),
        (right && up).then(|| index + 1 + size_x),
    ];

    nhood4(index, grid).chain(diagonals.into_iter().flatten())
}

/// Find the cell closest to `start` whose cost equals `value`.
///
/// Breadth-first over the 8-connected neighborhood, so "closest" is in
/// BFS rings around `start`. Returns `start` itself when it already holds
/// `value`, and `None` when no cell holds `value` or `start` is outside
/// the grid.
pub fn nearest_cell<G: CostGrid + ?Sized>(grid: &G, start: usize, value: u8) -> Option<usize> {
    let cell_count = grid.cell_count();
    if start >= cell_count {
        return None;
    }

    let mut visited = vec![false; cell_count];
    let mut queue = VecDeque::new();
    queue.push_back(start);
    visited[start] = true;

    while let Some(index) = queue.pop_front() {
        if grid.cost(index) == value {
            return Some(index);
        }

        for neighbor in nhood8(index, grid) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    None
}

/// Split a flat index into (x, y, in_grid).
#[inline]
fn split_index(index: usize, size_x: usize, size_y: usize) -> (usize, usize, bool) {
    if size_x == 0 || index >= size_x * size_y {
        return (0, 0, false);
    }
    (index % size_x, index / size_x, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridCoord, WorldPoint};
    use crate::grid::{Costmap, costs};

    fn sorted(iter: impl Iterator<Item = usize>) -> Vec<usize> {
        let mut v: Vec<usize> = iter.collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_nhood4_interior_and_corners() {
        let grid = Costmap::new(4, 3, 1.0, WorldPoint::ZERO);

        // Interior cell (1, 1) = 5
        assert_eq!(sorted(nhood4(5, &grid)), vec![1, 4, 6, 9]);
        // Corner (0, 0)
        assert_eq!(sorted(nhood4(0, &grid)), vec![1, 4]);
        // Corner (3, 2) = 11
        assert_eq!(sorted(nhood4(11, &grid)), vec![7, 10]);
        // Right edge does not wrap onto the next row
        assert_eq!(sorted(nhood4(3, &grid)), vec![2, 7]);
    }

    #[test]
    fn test_nhood8_interior_and_edges() {
        let grid = Costmap::new(4, 3, 1.0, WorldPoint::ZERO);

        assert_eq!(sorted(nhood8(5, &grid)), vec![0, 1, 2, 4, 6, 8, 9, 10]);
        assert_eq!(sorted(nhood8(0, &grid)), vec![1, 4, 5]);
        assert_eq!(sorted(nhood8(7, &grid)), vec![2, 3, 6, 10, 11]);
    }

    #[test]
    fn test_out_of_grid_index_has_no_neighbors() {
        let grid = Costmap::new(4, 3, 1.0, WorldPoint::ZERO);
        assert_eq!(nhood4(12, &grid).count(), 0);
        assert_eq!(nhood8(100, &grid).count(), 0);

        let empty = Costmap::new(0, 0, 1.0, WorldPoint::ZERO);
        assert_eq!(nhood8(0, &empty).count(), 0);
    }

    #[test]
    fn test_nearest_cell() {
        let mut grid = Costmap::new(10, 10, 1.0, WorldPoint::ZERO);
        grid.set_cost(GridCoord::new(7, 7), costs::FREE_SPACE);
        grid.set_cost(GridCoord::new(2, 3), costs::FREE_SPACE);

        let start = grid.index(GridCoord::new(1, 1));
        let found = nearest_cell(&grid, start, costs::FREE_SPACE).unwrap();
        assert_eq!(grid.index_to_cells(found), GridCoord::new(2, 3));
    }

    #[test]
    fn test_nearest_cell_start_matches() {
        let grid = Costmap::filled(5, 5, 1.0, WorldPoint::ZERO, costs::FREE_SPACE);
        assert_eq!(nearest_cell(&grid, 12, costs::FREE_SPACE), Some(12));
    }

    #[test]
    fn test_nearest_cell_not_found() {
        let grid = Costmap::new(5, 5, 1.0, WorldPoint::ZERO);
        assert_eq!(nearest_cell(&grid, 12, costs::FREE_SPACE), None);
        assert_eq!(nearest_cell(&grid, 25, costs::NO_INFORMATION), None);
    }
}
