//! Frontier data types.

use crate::core::WorldPoint;

/// A contiguous region of unknown cells bordering known free space.
///
/// Built by the cluster builder in one pass; only `cost` changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Frontier {
    /// World coordinates of every cell in the region, in discovery order
    pub points: Vec<WorldPoint>,
    /// Number of cells in the region
    pub size: usize,
    /// Mean world coordinate of all region cells
    pub centroid: WorldPoint,
    /// World coordinate of the seed cell that triggered discovery
    pub initial: WorldPoint,
    /// Region cell closest to the reference point
    pub middle: WorldPoint,
    /// Distance from the reference point to `middle` (meters)
    pub min_distance: f32,
    /// Exploration priority, lower is preferred (0.0 until scored)
    pub cost: f32,
}

impl Frontier {
    /// Start a region from its seed cell.
    pub(crate) fn from_seed(seed: WorldPoint, reference: WorldPoint) -> Self {
        Self {
            points: vec![seed],
            size: 1,
            centroid: seed,
            initial: seed,
            middle: seed,
            min_distance: reference.distance(&seed),
            cost: 0.0,
        }
    }
}

/// Counters from the most recent search.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    /// Cells dequeued by the outer reachability scan
    pub cells_visited: usize,
    /// Frontier regions built (before the size filter)
    pub regions_built: usize,
    /// Regions dropped by the minimum size filter
    pub regions_rejected: usize,
    /// No free cell was found, so the scan started from the raw agent cell
    pub degraded_start: bool,
    /// Wall time of the whole search including scoring (µs)
    pub elapsed_us: u64,
}

impl SearchStats {
    /// Regions kept after filtering.
    pub fn regions_kept(&self) -> usize {
        self.regions_built - self.regions_rejected
    }
}
