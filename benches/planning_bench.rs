use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::point::Point;
use maze_router::{plan, MazeGraph};
use rand::prelude::*;
use std::hint::black_box;

fn random_maze(w: i32, h: i32, rng: &mut StdRng) -> MazeGraph {
    let mut graph = MazeGraph::new();
    for x in 0..w {
        for y in 0..h {
            let p = Point::new(x, y);
            if x + 1 < w {
                graph
                    .add_corridor(p, Point::new(x + 1, y), rng.gen_range(1..=9))
                    .unwrap();
            }
            if y + 1 < h {
                graph
                    .add_corridor(p, Point::new(x, y + 1), rng.gen_range(1..=9))
                    .unwrap();
            }
        }
    }
    graph
}

fn traversal_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let maze = random_maze(32, 32, &mut rng);
    c.bench_function("dijkstra traversal, 32x32 maze", |b| {
        b.iter(|| black_box(maze.traverse_from(Point::new(0, 0))))
    });
}

fn plan_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut maze = random_maze(24, 24, &mut rng);
    maze.update();
    let start = Point::new(0, 0);
    for n_targets in [3, 6] {
        let targets = (0..n_targets)
            .map(|_| Point::new(rng.gen_range(1..24), rng.gen_range(1..24)))
            .collect::<Vec<Point>>();
        c.bench_function(format!("plan, 24x24 maze, {n_targets} targets").as_str(), |b| {
            b.iter(|| black_box(plan(&mut maze, start, &targets)))
        });
    }
}

criterion_group!(benches, traversal_bench, plan_bench);
criterion_main!(benches);
