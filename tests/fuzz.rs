//! Fuzzes the engine with random grids: a path must be found exactly when
//! start and goal are in the same connected component, and every found path
//! must be a valid neighbour chain whose cost matches the goal's g value.
use astar_pathfinding::{Chebyshev, Euclidean, Manhattan, Octile, Pathfinder, PathWorld};
use petgraph::unionfind::UnionFind;
use rand::prelude::*;

struct RandomGrid {
    size: i32,
    blocked: Vec<bool>,
}

impl RandomGrid {
    fn new(size: i32, rng: &mut StdRng, fill: f64) -> RandomGrid {
        let mut blocked = vec![false; (size * size) as usize];
        for cell in blocked.iter_mut() {
            *cell = rng.gen_bool(fill);
        }
        RandomGrid { size, blocked }
    }

    fn ix(&self, x: i32, y: i32) -> usize {
        (x * self.size + y) as usize
    }

    fn passable(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.size && y < self.size && !self.blocked[self.ix(x, y)]
    }

    /// Links all pairs of passable 8-neighbours into components.
    fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new((self.size * self.size) as usize);
        for x in 0..self.size {
            for y in 0..self.size {
                if !self.passable(x, y) {
                    continue;
                }
                for (dx, dy) in [(1, -1), (1, 0), (1, 1), (0, 1)] {
                    if self.passable(x + dx, y + dy) {
                        components.union(self.ix(x, y), self.ix(x + dx, y + dy));
                    }
                }
            }
        }
        components
    }
}

impl PathWorld for RandomGrid {
    type Point = (i32, i32);
    type Neighbours = Vec<(i32, i32)>;

    fn cost(&self, _from: &(i32, i32), _to: &(i32, i32)) -> f64 {
        1.0
    }

    fn neighbours(&self, point: &(i32, i32)) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) == (0, 0) {
                    continue;
                }
                if self.passable(point.0 + dx, point.1 + dy) {
                    points.push((point.0 + dx, point.1 + dy));
                }
            }
        }
        points
    }
}

fn visualize_grid(grid: &RandomGrid, start: (i32, i32), end: (i32, i32)) {
    for y in (0..grid.size).rev() {
        for x in 0..grid.size {
            if start == (x, y) {
                print!("S");
            } else if end == (x, y) {
                print!("G");
            } else if grid.blocked[grid.ix(x, y)] {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn check_path(grid: &RandomGrid, finder: &Pathfinder<(i32, i32)>, start: (i32, i32), path: &[(i32, i32)]) {
    let mut previous = start;
    for point in path {
        assert!(grid.neighbours(&previous).contains(point));
        previous = *point;
    }
    let goal_g = finder.g_value(&previous).unwrap();
    assert!((goal_g - path.len() as f64).abs() < 1e-9);
    assert_eq!(finder.steps(), finder.visited_points().len());
}

#[test]
fn fuzz() {
    const N: i32 = 10;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    let mut finder = Pathfinder::new();
    for variant in 0..4 {
        match variant {
            0 => finder.set_heuristic(Manhattan),
            1 => finder.set_heuristic(Euclidean),
            2 => finder.set_heuristic(Chebyshev),
            _ => finder.set_heuristic(Octile),
        }
        for _ in 0..N_GRIDS {
            let mut grid = RandomGrid::new(N, &mut rng, 0.4);
            let start = (0, 0);
            let end = (N - 1, N - 1);
            let start_ix = grid.ix(start.0, start.1);
            let end_ix = grid.ix(end.0, end.1);
            grid.blocked[start_ix] = false;
            grid.blocked[end_ix] = false;
            let reachable = grid.components().equiv(start_ix, end_ix);
            let path = finder.find_path(&grid, start, end);
            // Show the grid if the outcome disagrees with the components.
            if path.is_some() != reachable {
                visualize_grid(&grid, start, end);
            }
            assert!(path.is_some() == reachable);
            if let Some(path) = path {
                check_path(&grid, &finder, start, &path);
            }
        }
    }
}
