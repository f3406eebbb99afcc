use grid_util::point::Point;
use thiserror::Error;

/// Failure modes of route planning. `Unreachable` and the graph-shape errors
/// abort the whole planning request; `NotAdjacent` indicates an upstream bug
/// in walk construction rather than a recoverable condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// Dijkstra requires strictly positive edge weights.
    #[error("edge {from} -> {to} has non-positive weight {weight}")]
    NonPositiveWeight { from: Point, to: Point, weight: i32 },
    /// A start or target vertex is not part of the maze graph.
    #[error("vertex {0} is not part of the maze graph")]
    UnknownVertex(Point),
    /// No path exists between two vertices the plan needs to connect.
    #[error("{to} cannot be reached from {from}")]
    Unreachable { from: Point, to: Point },
    /// A walk contained a step between vertices that are not grid neighbours.
    #[error("{from} and {to} are not adjacent")]
    NotAdjacent { from: Point, to: Point },
}
