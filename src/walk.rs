//! Walk reconstruction from predecessor trees and encoding of walks into the
//! four discrete move symbols a maze harness consumes.

use grid_util::point::Point;

use crate::dijkstra::Traversal;
use crate::error::PlanError;
use crate::graph::MazeGraph;

/// A single-cell step. `+x` is [Move::Right] and `+y` is [Move::Up].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// The single-character symbol the game harness expects.
    pub fn as_char(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (0, 1),
            Move::Down => (0, -1),
            Move::Left => (-1, 0),
            Move::Right => (1, 0),
        }
    }

    /// The position reached by taking this move from `position`.
    pub fn apply(self, position: Point) -> Point {
        let (dx, dy) = self.delta();
        Point::new(position.x + dx, position.y + dy)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The move taking `from` to the grid-adjacent vertex `to`. Fails with
/// [PlanError::NotAdjacent] if the vertices differ by anything other than one
/// unit on exactly one axis.
pub fn step_direction(from: Point, to: Point) -> Result<Move, PlanError> {
    match (to.x - from.x, to.y - from.y) {
        (1, 0) => Ok(Move::Right),
        (-1, 0) => Ok(Move::Left),
        (0, 1) => Ok(Move::Up),
        (0, -1) => Ok(Move::Down),
        _ => Err(PlanError::NotAdjacent { from, to }),
    }
}

/// Encodes a walk into one move per edge, starting from `start`. The walk is
/// expected to exclude `start` itself, as produced by [reconstruct_walk].
pub fn walk_to_moves(walk: &[Point], start: Point) -> Result<Vec<Move>, PlanError> {
    let mut moves = Vec::with_capacity(walk.len());
    let mut position = start;
    for &step in walk {
        moves.push(step_direction(position, step)?);
        position = step;
    }
    Ok(moves)
}

/// Rebuilds the vertex sequence from `source` (excluded) to `target`
/// (included) by following the traversal's predecessor chain backwards.
/// Returns an empty walk when `source == target` and fails with
/// [PlanError::Unreachable] when `target` was never explored, or when the
/// chain roots at a vertex other than `source`.
pub fn reconstruct_walk(
    traversal: &Traversal<Point, i32>,
    source: Point,
    target: Point,
) -> Result<Vec<Point>, PlanError> {
    if source == target {
        return Ok(Vec::new());
    }
    let unreachable = PlanError::Unreachable {
        from: source,
        to: target,
    };
    let mut walk = vec![target];
    let mut current = target;
    loop {
        match traversal.parent(&current) {
            Some(Some(&parent)) => {
                if parent == source {
                    break;
                }
                walk.push(parent);
                current = parent;
            }
            // The chain rooted before reaching the source, or fell off the
            // explored set entirely.
            Some(None) | None => return Err(unreachable),
        }
    }
    walk.reverse();
    Ok(walk)
}

/// Point-to-point convenience: the move sequence of a shortest path from
/// `from` to `to`.
pub fn route_between(graph: &MazeGraph, from: Point, to: Point) -> Result<Vec<Move>, PlanError> {
    let traversal = graph.traverse_from(from)?;
    let walk = reconstruct_walk(&traversal, from, to)?;
    walk_to_moves(&walk, from)
}
