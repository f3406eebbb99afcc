//! # maze_router
//!
//! A route-planning system for an agent collecting reward locations in a
//! weighted maze. Implements single-source
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) traversals
//! over an adjacency-map graph, builds a complete pairwise distance ("meta")
//! graph over the vertices of interest, solves the resulting
//! [Travelling Salesman Problem](https://en.wikipedia.org/wiki/Travelling_salesman_problem)
//! exactly by backtracking, and stitches the optimal tour into a sequence of
//! discrete [Move]s. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to reject unreachable targets before any search runs.
//!
//! Exact TSP is factorial in the number of targets; this crate is meant for
//! the handful of reward locations a maze game hands out, not for large tours.

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod meta;
pub mod planner;
pub mod tsp;
pub mod walk;

pub use dijkstra::Traversal;
pub use error::PlanError;
pub use graph::MazeGraph;
pub use meta::{build_meta_graph, MetaGraph};
pub use planner::{plan, PlannerSession};
pub use tsp::{solve_exact, Tour};
pub use walk::{reconstruct_walk, route_between, step_direction, walk_to_moves, Move};
