//! # astar_pathfinding
//!
//! Caller-driven [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! search over an arbitrary 2D coordinate space. The caller describes the
//! world through [PathWorld] (edge costs and neighbour enumeration) and the
//! [Pathfinder] engine owns the rest: open/closed bookkeeping, goal-biased
//! tie-breaking, path reconstruction and post-run diagnostics.
//!
//! Heuristics are pluggable (see [heuristic]); the default is [Octile],
//! matching 8-directional movement where diagonal steps cost `sqrt(2)` times
//! a straight step.
pub mod heuristic;
pub mod pathfinder;
mod search;

pub use heuristic::{Chebyshev, Euclidean, Heuristic, Manhattan, Octile};
pub use pathfinder::Pathfinder;

use core::fmt;
use std::hash::Hash;

/// A 2D coordinate the engine can search over.
///
/// Identity (equality and hashing) is what makes a coordinate unique in the
/// open and closed sets; the two orthogonal components feed the heuristics
/// and the tie-breaker. Implemented out of the box for [grid_util::Point]
/// and `(i32, i32)`.
pub trait PathPoint: Clone + Eq + Hash + fmt::Debug + 'static {
    fn x(&self) -> i32;
    fn y(&self) -> i32;
}

impl PathPoint for grid_util::Point {
    fn x(&self) -> i32 {
        self.x
    }
    fn y(&self) -> i32 {
        self.y
    }
}

impl PathPoint for (i32, i32) {
    fn x(&self) -> i32 {
        self.0
    }
    fn y(&self) -> i32 {
        self.1
    }
}

/// The caller-supplied world: movement costs plus neighbour enumeration.
///
/// Both functions are assumed pure; [PathWorld::cost] is only invoked for
/// pairs that [PathWorld::neighbours] declared adjacent. The neighbour list
/// may contain the queried point itself (the engine drops it) as well as
/// duplicates (tolerated, they only cost time).
pub trait PathWorld {
    type Point: PathPoint;
    type Neighbours: IntoIterator<Item = Self::Point>;

    /// Cost of moving from `from` to the adjacent `to`. Must be nonnegative.
    fn cost(&self, from: &Self::Point, to: &Self::Point) -> f64;

    /// Points that can be travelled to from `point`.
    fn neighbours(&self, point: &Self::Point) -> Self::Neighbours;
}
