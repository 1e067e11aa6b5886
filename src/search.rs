//! Search-state internals: the node arena shared by the open and closed
//! sets, the cost-ordered open heap and path reconstruction.
//!
//! Nodes live in an [IndexMap] keyed by coordinate, so membership checks are
//! by coordinate while the heap orders by combined cost. The map index is
//! the node handle; predecessor links are handles, which keeps the
//! reconstruction tree free of ownership cycles.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Combined-cost values closer than this count as equal, so float jitter
/// cannot flip the ordering of two effectively tied nodes.
const EPSILON: f64 = 1e-6;

/// Handle marking the start node, which has no predecessor.
const NO_PARENT: usize = usize::MAX;

/// Per-coordinate record: accumulated cost, heuristic estimate and the
/// predecessor handle used for path reconstruction. `closed` flips exactly
/// once, when the node is extracted as the current minimum.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode {
    pub parent: usize,
    pub g: f64,
    pub h: f64,
    pub closed: bool,
}

struct OpenEntry {
    f: f64,
    g: f64,
    index: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f.eq(&other.f) && self.g.eq(&other.g)
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops its greatest element, so a smaller f must compare
        // greater. Within the tolerance the deeper node (larger g) wins,
        // keeping the search moving toward the goal among equals.
        let difference = self.f - other.f;
        if difference.abs() < EPSILON {
            self.g.total_cmp(&other.g)
        } else if difference < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

/// Open/closed bookkeeping for one search run. The containers are cleared by
/// [seed](SearchContext::seed) and then kept around after the run so closed
/// nodes can answer diagnostic queries.
pub(crate) struct SearchContext<P> {
    nodes: FxIndexMap<P, SearchNode>,
    open: BinaryHeap<OpenEntry>,
}

impl<P: Clone + Eq + Hash> SearchContext<P> {
    pub fn new() -> SearchContext<P> {
        SearchContext {
            nodes: FxIndexMap::default(),
            open: BinaryHeap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.open.clear();
    }

    /// Clears any previous run and installs `start` as the sole open node.
    pub fn seed(&mut self, start: P, h: f64) {
        self.clear();
        self.nodes.insert(
            start,
            SearchNode {
                parent: NO_PARENT,
                g: 0.0,
                h,
                closed: false,
            },
        );
        self.open.push(OpenEntry { f: h, g: 0.0, index: 0 });
    }

    /// Extracts the open node with the smallest combined cost, closes it and
    /// returns its handle, coordinate and accumulated cost.
    ///
    /// A node rediscovered with a better cost leaves its superseded heap
    /// entry behind; such entries (and entries for already closed nodes) are
    /// recognized here and skipped.
    pub fn pop_best(&mut self) -> Option<(usize, P, f64)> {
        while let Some(entry) = self.open.pop() {
            let Some((point, node)) = self.nodes.get_index_mut(entry.index) else {
                continue;
            };
            if node.closed || entry.g > node.g {
                continue;
            }
            node.closed = true;
            return Some((entry.index, point.clone(), node.g));
        }
        None
    }

    /// Inserts a newly discovered node, or replaces an open node for the
    /// same coordinate if `g` is a strict improvement. Closed coordinates
    /// are never reopened. Returns whether the candidate was kept.
    pub fn offer(&mut self, point: P, parent: usize, g: f64, h: f64) -> bool {
        let index;
        match self.nodes.entry(point) {
            Occupied(mut e) => {
                let known = e.get();
                if known.closed || known.g <= g {
                    return false;
                }
                index = e.index();
                e.insert(SearchNode {
                    parent,
                    g,
                    h,
                    closed: false,
                });
            }
            Vacant(e) => {
                index = e.index();
                e.insert(SearchNode {
                    parent,
                    g,
                    h,
                    closed: false,
                });
            }
        }
        self.open.push(OpenEntry { f: g + h, g, index });
        true
    }

    /// Walks the predecessor chain from the node at `index` back to the
    /// start and returns the traversed points in start-to-goal order. The
    /// start point itself is not part of the result.
    pub fn reconstruct(&self, index: usize) -> Vec<P> {
        let mut path: Vec<P> = itertools::unfold(index, |i| {
            self.nodes.get_index(*i).map(|(point, node)| {
                *i = node.parent;
                point.clone()
            })
        })
        .collect();
        path.pop();
        path.reverse();
        path
    }

    pub fn closed_node(&self, point: &P) -> Option<&SearchNode> {
        self.nodes.get(point).filter(|node| node.closed)
    }

    pub fn closed_points(&self) -> impl Iterator<Item = &P> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.closed)
            .map(|(point, _)| point)
    }
}
