use grid_util::point::Point;
use maze_router::{MazeGraph, PlannerSession};

// In this demo the session plans a full tour over three pieces of cheese on a
// 5x5 maze during setup, then drains one move per turn the way a game harness
// would call it.

fn main() {
    let mut maze = MazeGraph::new();
    for x in 0..5 {
        for y in 0..5 {
            let p = Point::new(x, y);
            if x + 1 < 5 {
                maze.add_corridor(p, Point::new(x + 1, y), 1).unwrap();
            }
            if y + 1 < 5 {
                maze.add_corridor(p, Point::new(x, y + 1), 1).unwrap();
            }
        }
    }

    let player = Point::new(0, 0);
    let cheese = [Point::new(4, 0), Point::new(4, 4), Point::new(0, 4)];

    let mut session = PlannerSession::new();
    session.preprocess(&mut maze, player, &cheese).unwrap();
    println!("Planned {} moves", session.remaining());

    let mut position = player;
    let mut turn = 0;
    while let Some(next_move) = session.decide() {
        position = next_move.apply(position);
        turn += 1;
        let note = if cheese.contains(&position) { " (cheese!)" } else { "" };
        println!("turn {turn}: {next_move} -> {position}{note}");
    }
}
