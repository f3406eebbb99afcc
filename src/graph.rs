use core::fmt;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::dijkstra::{dijkstra, Traversal};
use crate::error::PlanError;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// [MazeGraph] holds the weighted adjacency of the maze (vertex to neighbour
/// to strictly positive edge weight) together with connected components in a
/// [UnionFind] structure, which allow unreachable start/target pairs to be
/// rejected without flood-filling the maze. Adjacency maps are
/// insertion-ordered so traversals relax neighbours in a fixed order and
/// produce the same predecessor tree on every run.
#[derive(Clone, Debug)]
pub struct MazeGraph {
    adjacency: FxIndexMap<Point, FxIndexMap<Point, i32>>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Default for MazeGraph {
    fn default() -> MazeGraph {
        MazeGraph {
            adjacency: FxIndexMap::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl MazeGraph {
    pub fn new() -> MazeGraph {
        MazeGraph::default()
    }

    /// Builds a graph from the adjacency mapping a game harness supplies
    /// (vertex to neighbour to weight). Fails on the first non-positive
    /// weight. Iteration order of the input fixes the relaxation order of
    /// later traversals, so callers wanting reproducible predecessor trees
    /// should supply an ordered mapping.
    pub fn from_adjacency<I, J>(adjacency: I) -> Result<MazeGraph, PlanError>
    where
        I: IntoIterator<Item = (Point, J)>,
        J: IntoIterator<Item = (Point, i32)>,
    {
        let mut graph = MazeGraph::new();
        for (from, row) in adjacency {
            graph.adjacency.entry(from).or_default();
            for (to, weight) in row {
                graph.add_edge(from, to, weight)?;
            }
        }
        Ok(graph)
    }

    /// Adds a directed edge. The target vertex is materialized in the
    /// adjacency even if it has no outgoing edges of its own yet. Fails with
    /// [PlanError::NonPositiveWeight] on a weight below 1, which would break
    /// the shortest-path invariants.
    pub fn add_edge(&mut self, from: Point, to: Point, weight: i32) -> Result<(), PlanError> {
        if weight <= 0 {
            return Err(PlanError::NonPositiveWeight { from, to, weight });
        }
        self.adjacency.entry(from).or_default().insert(to, weight);
        self.adjacency.entry(to).or_default();
        self.components_dirty = true;
        Ok(())
    }

    /// Adds the pair of directed edges modelling an undirected maze corridor.
    pub fn add_corridor(&mut self, a: Point, b: Point, weight: i32) -> Result<(), PlanError> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    pub fn contains(&self, vertex: &Point) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.adjacency.keys().copied()
    }

    /// The weight of the direct edge from `from` to `to`, if one exists.
    pub fn weight(&self, from: &Point, to: &Point) -> Option<i32> {
        self.adjacency.get(from).and_then(|row| row.get(to)).copied()
    }

    pub fn neighbours(&self, vertex: &Point) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flatten()
            .map(|(p, w)| (*p, *w))
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, vertex: &Point) -> Option<usize> {
        self.adjacency
            .get_index_of(vertex)
            .map(|ix| self.components.find(ix))
    }

    /// Checks if two vertices are on the same component. Vertices missing
    /// from the graph are never reachable.
    pub fn reachable(&self, from: &Point, to: &Point) -> bool {
        !self.unreachable(from, to)
    }

    /// Checks if two vertices are not on the same component.
    pub fn unreachable(&self, from: &Point, to: &Point) -> bool {
        match (
            self.adjacency.get_index_of(from),
            self.adjacency.get_index_of(to),
        ) {
            (Some(from_ix), Some(to_ix)) => {
                if self.components.equiv(from_ix, to_ix) {
                    false
                } else {
                    info!("{} and {} are on different components", from, to);
                    true
                }
            }
            _ => true,
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up edge endpoints to
    /// the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        self.components = UnionFind::new(self.adjacency.len());
        self.components_dirty = false;
        for (ix, row) in self.adjacency.values().enumerate() {
            for neighbour in row.keys() {
                if let Some(neighbour_ix) = self.adjacency.get_index_of(neighbour) {
                    self.components.union(ix, neighbour_ix);
                }
            }
        }
    }

    /// Runs a full Dijkstra traversal from `source`, yielding final distances
    /// and predecessors for every reachable vertex. Vertices absent from the
    /// result are unreachable from `source`.
    pub fn traverse_from(&self, source: Point) -> Result<Traversal<Point, i32>, PlanError> {
        if !self.contains(&source) {
            return Err(PlanError::UnknownVertex(source));
        }
        Ok(dijkstra(&source, |vertex| {
            self.neighbours(vertex).collect::<Vec<_>>()
        }))
    }
}

impl fmt::Display for MazeGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Maze graph ({} vertices):", self.adjacency.len())?;
        for (vertex, row) in &self.adjacency {
            let edges = row
                .iter()
                .map(|(p, w)| format!("{}:{}", p, w))
                .collect::<Vec<String>>();
            writeln!(f, "{} -> {}", vertex, edges.join(", "))?;
        }
        Ok(())
    }
}
