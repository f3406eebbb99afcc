//! The orchestrator: optimal visiting order over the reward locations,
//! stitched into one move sequence, plus the session object the game harness
//! drives (plan once during setup, pop one move per turn).

use std::collections::VecDeque;
use std::iter::once;

use grid_util::point::Point;
use itertools::Itertools;
use log::info;

use crate::error::PlanError;
use crate::graph::MazeGraph;
use crate::meta::build_meta_graph;
use crate::tsp::solve_exact;
use crate::walk::{reconstruct_walk, walk_to_moves, Move};

/// Computes the full move sequence visiting every target from `start` at
/// minimum total distance. Targets are deduplicated (including against
/// `start`) and sorted by `(x, y)` so ties in the tour search always resolve
/// the same way. An empty target set yields an empty sequence without
/// touching the meta graph or the tour search.
///
/// Components are refreshed first so a disconnected target fails the request
/// before any traversal runs; no partial plan is ever returned.
pub fn plan(graph: &mut MazeGraph, start: Point, targets: &[Point]) -> Result<Vec<Move>, PlanError> {
    if !graph.contains(&start) {
        return Err(PlanError::UnknownVertex(start));
    }
    let mut goals: Vec<Point> = targets.iter().copied().filter(|t| *t != start).collect();
    goals.sort_unstable_by_key(|p| (p.x, p.y));
    goals.dedup();
    if goals.is_empty() {
        info!("No targets to visit from {}", start);
        return Ok(Vec::new());
    }
    graph.update();
    for goal in &goals {
        if !graph.contains(goal) {
            return Err(PlanError::UnknownVertex(*goal));
        }
        if graph.unreachable(&start, goal) {
            return Err(PlanError::Unreachable {
                from: start,
                to: *goal,
            });
        }
    }
    let interest: Vec<Point> = once(start).chain(goals.iter().copied()).collect();
    let meta = build_meta_graph(graph, &interest)?;
    let tour = solve_exact(&meta, start, &goals)?;
    let mut moves = Vec::new();
    for (previous, next) in once(start).chain(tour.stops.iter().copied()).tuple_windows() {
        let traversal = meta
            .traversal(&previous)
            .ok_or(PlanError::Unreachable {
                from: previous,
                to: next,
            })?;
        let walk = reconstruct_walk(traversal, previous, next)?;
        moves.extend(walk_to_moves(&walk, previous)?);
    }
    info!(
        "Planned {} moves over {} targets, tour distance {}",
        moves.len(),
        goals.len(),
        tour.total_distance
    );
    Ok(moves)
}

/// Owned planning state threaded between the harness's setup and per-turn
/// calls. [preprocess](Self::preprocess) runs the full planner once under the
/// generous setup budget; [decide](Self::decide) then costs one queue pop per
/// turn. Once the queue drains, [decide](Self::decide) returns [None] and the
/// caller chooses its own fallback.
#[derive(Clone, Debug, Default)]
pub struct PlannerSession {
    pending: VecDeque<Move>,
}

impl PlannerSession {
    pub fn new() -> PlannerSession {
        PlannerSession::default()
    }

    /// Plans the tour from the player's location over the reward locations
    /// and caches the resulting move sequence. Any previously cached moves
    /// are replaced. Planning failures leave the session empty.
    pub fn preprocess(
        &mut self,
        graph: &mut MazeGraph,
        player: Point,
        rewards: &[Point],
    ) -> Result<(), PlanError> {
        self.pending.clear();
        let moves = plan(graph, player, rewards)?;
        self.pending = moves.into();
        Ok(())
    }

    /// Pops the next cached move, or [None] once the plan is exhausted.
    pub fn decide(&mut self) -> Option<Move> {
        self.pending.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_drained(&self) -> bool {
        self.pending.is_empty()
    }
}
