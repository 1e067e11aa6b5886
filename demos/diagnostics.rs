use astar_pathfinding::{Chebyshev, Euclidean, Manhattan, Octile, Pathfinder, PathWorld};
use grid_util::Point;

// Runs the same search under all four heuristics and prints the analysis
// values kept by the engine: step count, elapsed time and the tie-breaker.
struct Field {
    size: i32,
}

impl PathWorld for Field {
    type Point = Point;
    type Neighbours = Vec<Point>;

    fn cost(&self, _from: &Point, _to: &Point) -> f64 {
        1.0
    }

    fn neighbours(&self, point: &Point) -> Vec<Point> {
        let mut points = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) == (0, 0) {
                    continue;
                }
                let candidate = Point::new(point.x + dx, point.y + dy);
                if candidate.x >= 0
                    && candidate.y >= 0
                    && candidate.x < self.size
                    && candidate.y < self.size
                {
                    points.push(candidate);
                }
            }
        }
        points
    }
}

fn main() {
    let field = Field { size: 50 };
    let start = Point::new(0, 0);
    let end = Point::new(49, 24);
    let mut finder = Pathfinder::new();
    for name in ["manhattan", "euclidean", "chebyshev", "octile"] {
        match name {
            "manhattan" => finder.set_heuristic(Manhattan),
            "euclidean" => finder.set_heuristic(Euclidean),
            "chebyshev" => finder.set_heuristic(Chebyshev),
            _ => finder.set_heuristic(Octile),
        }
        let path = finder.find_path(&field, start, end);
        println!(
            "{name}: path length {:?}, {} nodes expanded in {:.2?}, tie-breaker {:.5}",
            path.map(|p| p.len()),
            finder.steps(),
            finder.elapsed(),
            finder.tie_breaker(),
        );
    }
}
