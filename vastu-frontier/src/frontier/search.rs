//! Frontier search over a shared cost grid.
//!
//! # Algorithm
//!
//! 1. Map the agent position to its grid cell (fail if outside the grid)
//! 2. Seed at the nearest free cell, or the agent cell if none exists
//! 3. Breadth-first scan over 4-connected neighbors whose cost does not
//!    exceed the current cell's cost
//! 4. Every unclaimed unknown cell bordering free space met by the scan
//!    seeds an 8-connected region via [`build_frontier`]
//! 5. Drop regions shorter than `min_frontier_size`, score the rest and
//!    sort ascending by cost
//!
//! The non-increasing cost rule lets a scan that starts on an inflated or
//! unknown cell still descend into free space.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use crate::config::{ExploreConfig, FrontierSearchConfig};
use crate::core::WorldPoint;
use crate::error::{FrontierError, Result};
use crate::grid::{CostGrid, SharedGrid, costs, nearest_cell, nhood4};
use crate::noise::{GaussianNoise, NoiseSource};

use super::builder::{build_frontier, is_new_frontier_cell};
use super::{Frontier, FrontierScorer, SearchStats};

/// Frontier search bound to a shared grid.
///
/// The scorer's hysteresis state persists across searches on the same
/// instance; everything else is rebuilt on every call.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use parking_lot::RwLock;
/// use vastu_frontier::{Costmap, ExploreConfig, FrontierSearch, WorldPoint};
///
/// let grid = Arc::new(RwLock::new(Costmap::new(400, 400, 0.05, WorldPoint::new(-10.0, -10.0))));
/// let mut search = FrontierSearch::new(Arc::clone(&grid), &ExploreConfig::default());
///
/// for frontier in search.search_from(WorldPoint::ZERO)? {
///     println!("({:.2}, {:.2}) cost {:.3}", frontier.middle.x, frontier.middle.y, frontier.cost);
/// }
/// ```
pub struct FrontierSearch<G: CostGrid, N: NoiseSource = GaussianNoise> {
    grid: SharedGrid<G>,
    config: FrontierSearchConfig,
    scorer: FrontierScorer<N>,
    last_stats: SearchStats,
}

impl<G: CostGrid> FrontierSearch<G, GaussianNoise> {
    /// Create a search with a Gaussian-noise scorer built from `config`.
    pub fn new(grid: SharedGrid<G>, config: &ExploreConfig) -> Self {
        let scorer = FrontierScorer::new(&config.search, config.hazard.clone());
        Self::with_scorer(grid, config.search.clone(), scorer)
    }
}

impl<G: CostGrid, N: NoiseSource> FrontierSearch<G, N> {
    /// Create a search with an explicit scorer.
    pub fn with_scorer(
        grid: SharedGrid<G>,
        config: FrontierSearchConfig,
        scorer: FrontierScorer<N>,
    ) -> Self {
        Self {
            grid,
            config,
            scorer,
            last_stats: SearchStats::default(),
        }
    }

    /// Shared grid handle.
    pub fn grid(&self) -> &SharedGrid<G> {
        &self.grid
    }

    /// Scorer, including its hysteresis state.
    pub fn scorer(&self) -> &FrontierScorer<N> {
        &self.scorer
    }

    /// Mutable scorer access (e.g. to reset hysteresis).
    pub fn scorer_mut(&mut self) -> &mut FrontierScorer<N> {
        &mut self.scorer
    }

    /// Counters from the most recent search.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    /// Find frontiers reachable from `position`, sorted ascending by cost.
    ///
    /// Holds the grid's read lock for the whole call so map updates cannot
    /// interleave with the scan.
    ///
    /// # Errors
    ///
    /// [`FrontierError::OutOfBounds`] if `position` is outside the grid.
    pub fn search_from(&mut self, position: WorldPoint) -> Result<Vec<Frontier>> {
        let start_time = Instant::now();
        self.last_stats = SearchStats::default();

        let shared = Arc::clone(&self.grid);
        let grid = shared.read();

        let Some(start_coord) = grid.world_to_grid(position) else {
            log::error!(
                "Agent at ({:.2},{:.2}) is outside the grid, cannot search for frontiers",
                position.x,
                position.y
            );
            return Err(FrontierError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        };
        let start = grid.index(start_coord);

        let mut frontiers = scan_for_frontiers(
            &*grid,
            start,
            self.config.min_frontier_size,
            &mut self.last_stats,
        );

        let resolution = grid.resolution();
        for frontier in frontiers.iter_mut() {
            frontier.cost = self.scorer.score(frontier, position, resolution);
        }
        sort_by_cost(&mut frontiers);

        self.last_stats.elapsed_us = start_time.elapsed().as_micros() as u64;
        log::debug!(
            "Frontier search from ({:.2},{:.2}): {} frontiers ({} rejected), {} cells visited, {}µs",
            position.x,
            position.y,
            frontiers.len(),
            self.last_stats.regions_rejected,
            self.last_stats.cells_visited,
            self.last_stats.elapsed_us
        );

        Ok(frontiers)
    }

    /// Like [`search_from`](Self::search_from), but an out-of-bounds
    /// position yields an empty list.
    pub fn search_or_empty(&mut self, position: WorldPoint) -> Vec<Frontier> {
        self.search_from(position).unwrap_or_default()
    }
}

/// Outer reachability scan.
///
/// Walks 4-connected cells of non-increasing cost from the seed near
/// `start` and builds a frontier for every new frontier cell it touches.
/// `start` doubles as the distance reference for every region.
fn scan_for_frontiers<G: CostGrid + ?Sized>(
    grid: &G,
    start: usize,
    min_frontier_size: f32,
    stats: &mut SearchStats,
) -> Vec<Frontier> {
    let cell_count = grid.cell_count();
    let resolution = grid.resolution();

    let mut visited = vec![false; cell_count];
    let mut claimed = vec![false; cell_count];
    let mut frontiers = Vec::new();

    let seed = match nearest_cell(grid, start, costs::FREE_SPACE) {
        Some(free) => free,
        None => {
            log::warn!("Could not find a free cell near the agent, scanning from the agent cell");
            stats.degraded_start = true;
            start
        }
    };

    let mut queue = VecDeque::new();
    queue.push_back(seed);
    visited[seed] = true;

    while let Some(index) = queue.pop_front() {
        stats.cells_visited += 1;
        let cost = grid.cost(index);

        for neighbor in nhood4(index, grid) {
            if grid.cost(neighbor) <= cost && !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            } else if is_new_frontier_cell(grid, neighbor, &claimed) {
                claimed[neighbor] = true;
                let frontier = build_frontier(grid, neighbor, start, &mut claimed);
                stats.regions_built += 1;

                if frontier.size as f32 * resolution >= min_frontier_size {
                    frontiers.push(frontier);
                } else {
                    stats.regions_rejected += 1;
                }
            }
        }
    }

    frontiers
}

/// Stable ascending sort; equal costs keep discovery order.
fn sort_by_cost(frontiers: &mut [Frontier]) {
    frontiers.sort_by(|a, b| a.cost.total_cmp(&b.cost));
}
