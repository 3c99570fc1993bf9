//! Frontier cluster builder.
//!
//! Grows a frontier region from a seed cell with an 8-connected flood fill
//! and summarizes its geometry. Cells are claimed as they are found so no
//! cell ever belongs to two regions.

use std::collections::VecDeque;

use crate::grid::{CostGrid, costs, nhood4, nhood8};

use super::Frontier;

/// Check if `index` is an unclaimed unknown cell with a free 4-connected neighbor.
pub fn is_new_frontier_cell<G: CostGrid + ?Sized>(
    grid: &G,
    index: usize,
    claimed: &[bool],
) -> bool {
    if grid.cost(index) != costs::NO_INFORMATION || claimed[index] {
        return false;
    }

    nhood4(index, grid).any(|neighbor| grid.cost(neighbor) == costs::FREE_SPACE)
}

/// Build the frontier region containing `seed`.
///
/// Distances are measured from the world coordinate of `reference`. The seed
/// counts as a region cell; `claimed` is updated for the seed and every cell
/// added to the region.
pub fn build_frontier<G: CostGrid + ?Sized>(
    grid: &G,
    seed: usize,
    reference: usize,
    claimed: &mut [bool],
) -> Frontier {
    let reference_point = grid.index_to_world(reference);
    let seed_point = grid.index_to_world(seed);

    let mut frontier = Frontier::from_seed(seed_point, reference_point);
    claimed[seed] = true;

    // Accumulate in f64 so large regions keep an accurate mean
    let mut sum_x = seed_point.x as f64;
    let mut sum_y = seed_point.y as f64;

    let mut queue = VecDeque::new();
    queue.push_back(seed);

    while let Some(index) = queue.pop_front() {
        for neighbor in nhood8(index, grid) {
            if !is_new_frontier_cell(grid, neighbor, claimed) {
                continue;
            }
            claimed[neighbor] = true;

            let point = grid.index_to_world(neighbor);
            frontier.points.push(point);
            frontier.size += 1;
            sum_x += point.x as f64;
            sum_y += point.y as f64;

            let distance = reference_point.distance(&point);
            if distance < frontier.min_distance {
                frontier.min_distance = distance;
                frontier.middle = point;
            }

            queue.push_back(neighbor);
        }
    }

    let n = frontier.size as f64;
    frontier.centroid.x = (sum_x / n) as f32;
    frontier.centroid.y = (sum_y / n) as f32;

    log::trace!(
        "Built frontier: {} cells, centroid ({:.2},{:.2}), min_distance {:.2}",
        frontier.size,
        frontier.centroid.x,
        frontier.centroid.y,
        frontier.min_distance
    );

    frontier
}
