//! Test utilities for frontier search scenarios.
//!
//! Grid builders and search constructors shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::RwLock;
use vastu_frontier::{
    Costmap, FrontierScorer, FrontierSearch, FrontierSearchConfig, GridCoord, HazardConfig,
    SharedGrid, WorldPoint, ZeroNoise, costs,
};

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fully explored free room with its origin at (0, 0).
pub fn open_room(size_x: usize, size_y: usize, resolution: f32) -> Costmap {
    Costmap::filled(size_x, size_y, resolution, WorldPoint::ZERO, costs::FREE_SPACE)
}

/// Mark an inclusive rectangle of cells as never observed.
pub fn mark_unknown(grid: &mut Costmap, min: (i32, i32), max: (i32, i32)) {
    grid.fill_rect(
        GridCoord::new(min.0, min.1),
        GridCoord::new(max.0, max.1),
        costs::NO_INFORMATION,
    );
}

/// Wrap a grid for sharing with a search.
pub fn shared(grid: Costmap) -> SharedGrid<Costmap> {
    Arc::new(RwLock::new(grid))
}

/// Search config with the default weights and a custom size filter.
pub fn search_config(min_frontier_size: f32) -> FrontierSearchConfig {
    FrontierSearchConfig {
        min_frontier_size,
        ..FrontierSearchConfig::default()
    }
}

/// Deterministic search with the given hazard settings.
pub fn search_with_hazard(
    grid: SharedGrid<Costmap>,
    min_frontier_size: f32,
    hazard: HazardConfig,
) -> FrontierSearch<Costmap, ZeroNoise> {
    let config = search_config(min_frontier_size);
    let scorer = FrontierScorer::with_noise(&config, hazard, ZeroNoise);
    FrontierSearch::with_scorer(grid, config, scorer)
}

/// Deterministic search that ranks by distance and size only.
pub fn quiet_search(
    grid: SharedGrid<Costmap>,
    min_frontier_size: f32,
) -> FrontierSearch<Costmap, ZeroNoise> {
    search_with_hazard(grid, min_frontier_size, HazardConfig::disabled())
}
