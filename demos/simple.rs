use astar_pathfinding::{Pathfinder, PathWorld};
use grid_util::Point;

// In this example a path is found on a 3x3 grid with shape
// S
//  #
//   E
// S marks the start
// E marks the end
// # marks a blocked cell
struct Map {
    width: i32,
    height: i32,
    walls: Vec<Point>,
}

impl Map {
    fn open(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x < self.width
            && point.y < self.height
            && !self.walls.contains(point)
    }
}

impl PathWorld for Map {
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
                if self.open(&candidate) {
                    points.push(candidate);
                }
            }
        }
        points
    }
}

fn main() {
    let map = Map {
        width: 3,
        height: 3,
        walls: vec![Point::new(1, 1)],
    };
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let mut finder = Pathfinder::new();
    match finder.find_path(&map, start, end) {
        Some(path) => {
            println!("Path from {start} to {end}:");
            for point in path {
                println!("  {point}");
            }
        }
        None => println!("No path exists from {start} to {end}"),
    }
}
