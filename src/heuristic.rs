//! Heuristic strategies estimating the remaining cost between two points.
//!
//! All estimates assume unit cost between adjacent points; the engine scales
//! them (see [Pathfinder::set_scale](crate::Pathfinder::set_scale)) and
//! applies the tie-breaker before use. Every variant returns exactly 0 when
//! both points coincide.
use crate::PathPoint;

/// Estimate of the minimal cost to reach `to` from `from`, assuming that the
/// cost of a move between adjacent points is 1.
pub trait Heuristic<P: PathPoint> {
    fn estimate(&self, from: &P, to: &P) -> f64;
}

fn deltas<P: PathPoint>(from: &P, to: &P) -> (f64, f64) {
    (
        f64::from((from.x() - to.x()).abs()),
        f64::from((from.y() - to.y()).abs()),
    )
}

/// Distance for maps that only support horizontal and vertical movement:
/// the sum of the two axis deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl<P: PathPoint> Heuristic<P> for Manhattan {
    fn estimate(&self, from: &P, to: &P) -> f64 {
        let (dx, dy) = deltas(from, to);
        dx + dy
    }
}

/// Straight-line distance, for maps without square tiles where movement in
/// any direction is possible.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl<P: PathPoint> Heuristic<P> for Euclidean {
    fn estimate(&self, from: &P, to: &P) -> f64 {
        let (dx, dy) = deltas(from, to);
        (dx * dx + dy * dy).sqrt()
    }
}

/// [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance),
/// for square-tiled maps where diagonal moves cost the same as straight ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chebyshev;

impl<P: PathPoint> Heuristic<P> for Chebyshev {
    fn estimate(&self, from: &P, to: &P) -> f64 {
        let (dx, dy) = deltas(from, to);
        dx.max(dy)
    }
}

/// Octile distance, for square-tiled maps where a diagonal move costs
/// `sqrt(2)` times a straight one. This is the engine default.
#[derive(Clone, Copy, Debug, Default)]
pub struct Octile;

impl<P: PathPoint> Heuristic<P> for Octile {
    fn estimate(&self, from: &P, to: &P) -> f64 {
        let (dx, dy) = deltas(from, to);
        let diagonal = dx.min(dy);
        std::f64::consts::SQRT_2 * diagonal + (dx + dy) - 2.0 * diagonal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: (i32, i32) = (0, 0);
    const B: (i32, i32) = (2, 3);

    #[test]
    fn zero_when_points_coincide() {
        assert_eq!(Manhattan.estimate(&B, &B), 0.0);
        assert_eq!(Euclidean.estimate(&B, &B), 0.0);
        assert_eq!(Chebyshev.estimate(&B, &B), 0.0);
        assert_eq!(Octile.estimate(&B, &B), 0.0);
    }

    #[test]
    fn known_distances() {
        assert_eq!(Manhattan.estimate(&A, &B), 5.0);
        assert_eq!(Chebyshev.estimate(&A, &B), 3.0);
        assert!((Euclidean.estimate(&A, &B) - 13.0_f64.sqrt()).abs() < 1e-12);
        let expected = 2.0 * std::f64::consts::SQRT_2 + 1.0;
        assert!((Octile.estimate(&A, &B) - expected).abs() < 1e-12);
    }

    #[test]
    fn symmetric() {
        assert_eq!(Manhattan.estimate(&A, &B), Manhattan.estimate(&B, &A));
        assert_eq!(Octile.estimate(&A, &B), Octile.estimate(&B, &A));
    }
}
