//! The [Pathfinder] engine: seeds the open set, drives the pop/expand loop
//! and keeps the last run's bookkeeping around for diagnostic queries.
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::heuristic::{Heuristic, Octile};
use crate::search::SearchContext;
use crate::{PathPoint, PathWorld};

/// A* search engine over a caller-supplied [PathWorld].
///
/// One instance runs one search at a time; a call to
/// [find_path](Pathfinder::find_path) runs to completion and leaves the
/// closed set, step count, elapsed time and tie-breaker readable until the
/// next call overwrites them.
pub struct Pathfinder<P: PathPoint> {
    heuristic: Box<dyn Heuristic<P>>,
    scale: f64,
    tie_breaker: f64,
    steps: usize,
    elapsed: Duration,
    context: SearchContext<P>,
}

/// The heuristic multiplier favouring nodes closer to the goal among
/// otherwise equally promising candidates: `1 + 1/max_moves`, where
/// `max_moves` is four times the Manhattan distance to the nearest goal.
/// Only evaluated when the start is not itself a goal, so `max_moves >= 4`.
fn tie_breaker_for<P: PathPoint>(start: &P, goals: &[P]) -> f64 {
    let closest = goals
        .iter()
        .map(|goal| (start.x() - goal.x()).abs() + (start.y() - goal.y()).abs())
        .fold(i32::MAX, i32::min);
    1.0 + 1.0 / f64::from(4 * closest)
}

impl<P: PathPoint> Pathfinder<P> {
    pub fn new() -> Pathfinder<P> {
        Pathfinder {
            heuristic: Box::new(Octile),
            scale: 1.0,
            tie_breaker: 1.0,
            steps: 0,
            elapsed: Duration::ZERO,
            context: SearchContext::new(),
        }
    }

    /// Replaces the heuristic strategy. The default is [Octile].
    pub fn set_heuristic(&mut self, heuristic: impl Heuristic<P> + 'static) {
        self.heuristic = Box::new(heuristic);
    }

    /// Sets the factor applied to every heuristic estimate, for worlds where
    /// the typical cost of a move between adjacent points is not 1. The
    /// default is 1.0.
    pub fn set_scale(&mut self, scale: f64) {
        debug_assert!(scale.is_finite() && scale > 0.0);
        self.scale = scale;
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Finds an optimal path from `start` to `goal`.
    ///
    /// Returns the points to walk through in order, excluding `start` and
    /// ending with `goal`. When `start` already equals `goal` the path is
    /// empty; when the goal cannot be reached the result is [None], which is
    /// distinct from the empty path.
    pub fn find_path<W>(&mut self, world: &W, start: P, goal: P) -> Option<Vec<P>>
    where
        W: PathWorld<Point = P>,
    {
        let timer = Instant::now();
        self.context.clear();
        self.steps = 0;
        let result = if start == goal {
            self.tie_breaker = 1.0;
            Some(Vec::new())
        } else {
            self.tie_breaker = tie_breaker_for(&start, std::slice::from_ref(&goal));
            self.run(world, start, std::slice::from_ref(&goal))
        };
        self.elapsed = timer.elapsed();
        result
    }

    /// Finds a path from `start` to whichever of `goals` the search reaches
    /// first, returning the selected goal alongside the path.
    ///
    /// The heuristic estimate of a node is taken against its nearest goal.
    /// Returns [None] when `goals` is empty or none of them is reachable;
    /// when `start` is itself a goal the path is empty.
    pub fn find_path_to_any<W>(&mut self, world: &W, start: P, goals: &[P]) -> Option<(P, Vec<P>)>
    where
        W: PathWorld<Point = P>,
    {
        let timer = Instant::now();
        self.context.clear();
        self.steps = 0;
        let result = if goals.is_empty() {
            self.tie_breaker = 1.0;
            None
        } else if goals.contains(&start) {
            self.tie_breaker = 1.0;
            Some((start, Vec::new()))
        } else {
            self.tie_breaker = tie_breaker_for(&start, goals);
            self.run(world, start, goals)
                .and_then(|path| path.last().cloned().map(|reached| (reached, path)))
        };
        self.elapsed = timer.elapsed();
        result
    }

    fn run<W>(&mut self, world: &W, start: P, goals: &[P]) -> Option<Vec<P>>
    where
        W: PathWorld<Point = P>,
    {
        let h = self.scaled_estimate(&start, goals);
        self.context.seed(start, h);
        while let Some((index, current, g)) = self.context.pop_best() {
            self.steps += 1;
            if goals.contains(&current) {
                debug!("reached {:?} in {} steps", current, self.steps);
                return Some(self.context.reconstruct(index));
            }
            for neighbour in world.neighbours(&current) {
                // Worlds may report a point as its own neighbour.
                if neighbour == current {
                    continue;
                }
                let step_cost = world.cost(&current, &neighbour);
                debug_assert!(step_cost >= 0.0);
                let h = self.scaled_estimate(&neighbour, goals);
                self.context.offer(neighbour, index, g + step_cost, h);
            }
        }
        info!("open set exhausted after {} steps: no path", self.steps);
        None
    }

    fn scaled_estimate(&self, point: &P, goals: &[P]) -> f64 {
        let raw = goals
            .iter()
            .map(|goal| self.heuristic.estimate(point, goal))
            .fold(f64::INFINITY, f64::min);
        self.scale * self.tie_breaker * raw
    }

    /// The coordinates closed by the last run.
    pub fn visited_points(&self) -> Vec<P> {
        self.context.closed_points().cloned().collect()
    }

    /// Accumulated cost from the start recorded for `point`, if the last run
    /// closed it.
    pub fn g_value(&self, point: &P) -> Option<f64> {
        self.context.closed_node(point).map(|node| node.g)
    }

    /// Heuristic estimate (scale and tie-breaker included) recorded for
    /// `point`, if the last run closed it. Exactly 0 for the reached goal.
    pub fn h_value(&self, point: &P) -> Option<f64> {
        self.context.closed_node(point).map(|node| node.h)
    }

    /// Number of nodes the last run extracted and closed.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Wall-clock duration of the last call.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The tie-breaker multiplier used by the last run, 1.0 for a run that
    /// started on its goal.
    pub fn tie_breaker(&self) -> f64 {
        self.tie_breaker
    }
}

impl<P: PathPoint> Default for Pathfinder<P> {
    fn default() -> Pathfinder<P> {
        Pathfinder::new()
    }
}
