//! The meta graph: complete pairwise shortest-path distances over the small
//! set of vertices a plan cares about (the start and the reward locations).

use grid_util::point::Point;
use log::info;

use crate::dijkstra::Traversal;
use crate::error::PlanError;
use crate::graph::{FxIndexMap, MazeGraph};

/// Pairwise shortest distances among the vertices of interest, along with the
/// traversal each row was extracted from. Keeping the traversals around lets
/// the planner reconstruct the walk for any tour leg without running the
/// solver again for that pair.
#[derive(Clone, Debug)]
pub struct MetaGraph {
    matrix: FxIndexMap<Point, FxIndexMap<Point, i32>>,
    traversals: FxIndexMap<Point, Traversal<Point, i32>>,
}

impl MetaGraph {
    /// Shortest distance between two vertices of interest, excluding
    /// self-pairs.
    pub fn distance(&self, from: &Point, to: &Point) -> Option<i32> {
        self.matrix.get(from).and_then(|row| row.get(to)).copied()
    }

    /// The full traversal rooted at a vertex of interest.
    pub fn traversal(&self, from: &Point) -> Option<&Traversal<Point, i32>> {
        self.traversals.get(from)
    }

    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.matrix.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

/// Runs one Dijkstra traversal per vertex in `vertices` and collects the
/// distances between every ordered pair. Fails with [PlanError::Unreachable]
/// as soon as any pair is disconnected; no partial matrix is produced, since
/// an incomplete matrix cannot support an exact tour.
pub fn build_meta_graph(graph: &MazeGraph, vertices: &[Point]) -> Result<MetaGraph, PlanError> {
    let mut matrix = FxIndexMap::default();
    let mut traversals = FxIndexMap::default();
    for &from in vertices {
        let traversal = graph.traverse_from(from)?;
        let mut row = FxIndexMap::default();
        for &to in vertices {
            if to == from {
                continue;
            }
            let distance = traversal
                .distance(&to)
                .ok_or(PlanError::Unreachable { from, to })?;
            row.insert(to, distance);
        }
        matrix.insert(from, row);
        traversals.insert(from, traversal);
    }
    info!(
        "Built meta graph over {} vertices ({} traversals)",
        matrix.len(),
        traversals.len()
    );
    Ok(MetaGraph { matrix, traversals })
}
