use grid_util::point::Point;
use maze_router::{route_between, MazeGraph};

// In this demo a route is computed from S to G on a 3x3 maze with corridors
//  ___
// |S .|
// | #  |
// |. G|
//  ___
// where # marks a missing corridor; the route detours around it.

fn main() {
    let mut maze = MazeGraph::new();
    for x in 0..3 {
        for y in 0..3 {
            let p = Point::new(x, y);
            let blocked = Point::new(1, 1);
            if x + 1 < 3 && p != blocked && Point::new(x + 1, y) != blocked {
                maze.add_corridor(p, Point::new(x + 1, y), 1).unwrap();
            }
            if y + 1 < 3 && p != blocked && Point::new(x, y + 1) != blocked {
                maze.add_corridor(p, Point::new(x, y + 1), 1).unwrap();
            }
        }
    }
    println!("{}", maze);
    let start = Point::new(0, 2);
    let goal = Point::new(2, 0);
    let moves = route_between(&maze, start, goal).unwrap();
    println!("Route from {} to {}:", start, goal);
    for m in moves {
        println!("{}", m);
    }
}
