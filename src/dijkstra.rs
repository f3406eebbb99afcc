//! Single-source shortest-path search over closure-provided successors. The
//! frontier uses lazy deletion: offering a vertex a strictly shorter tentative
//! distance pushes a fresh heap entry, and stale entries are discarded when
//! popped. Final distances are identical to a decrease-key implementation.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

struct ClosestHolder<K> {
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for ClosestHolder<K> {}

impl<K: PartialEq> PartialEq for ClosestHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for ClosestHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for ClosestHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Orders by cost reversed for the max-heap; equal costs pop the
        // vertex discovered first so expansion order is deterministic.
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

/// The outcome of one [dijkstra] run: every vertex reached from the source
/// with its final distance and predecessor. Vertices absent from the
/// traversal are unreachable from the source; callers must not assume the
/// whole graph is covered.
#[derive(Clone, Debug)]
pub struct Traversal<N, C> {
    parents: FxIndexMap<N, (usize, C)>,
}

impl<N, C> Traversal<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy,
{
    /// Whether `vertex` was reached by the traversal.
    pub fn explored(&self, vertex: &N) -> bool {
        self.parents.contains_key(vertex)
    }

    /// The final distance from the source to `vertex`, or [None] if `vertex`
    /// is unreachable.
    pub fn distance(&self, vertex: &N) -> Option<C> {
        self.parents.get(vertex).map(|&(_, cost)| cost)
    }

    /// The predecessor of `vertex` in the shortest-path tree. The outer
    /// [Option] is [None] for unexplored vertices; the inner one is [None]
    /// only for the source itself.
    pub fn parent(&self, vertex: &N) -> Option<Option<&N>> {
        self.parents
            .get(vertex)
            .map(|&(parent_index, _)| self.parents.get_index(parent_index).map(|(node, _)| node))
    }

    /// The root of the shortest-path tree.
    pub fn source(&self) -> Option<&N> {
        self.parents.get_index(0).map(|(node, _)| node)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn explored_vertices(&self) -> impl Iterator<Item = &N> {
        self.parents.keys()
    }
}

/// Expands the closest frontier vertex until the frontier is exhausted,
/// recording a predecessor and final distance for every vertex reached.
/// `successors` yields `(neighbour, edge weight)` pairs; weights must be
/// positive for the returned distances to be minimal.
pub fn dijkstra<N, C, FN, IN>(start: &N, mut successors: FN) -> Traversal<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
{
    let mut frontier = BinaryHeap::new();
    frontier.push(ClosestHolder {
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    while let Some(ClosestHolder { cost, index }) = frontier.pop() {
        let successors = {
            let (node, &(_, best)) = parents.get_index(index).unwrap();
            // A vertex may sit in the heap several times if shorter offers
            // superseded earlier ones. Only the entry carrying the final
            // distance expands; the stale ones are discarded here.
            if cost > best {
                continue;
            }
            successors(node)
        };
        for (successor, edge_cost) in successors {
            let new_cost = cost + edge_cost;
            let successor_index;
            match parents.entry(successor) {
                Vacant(e) => {
                    successor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        successor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            frontier.push(ClosestHolder {
                cost: new_cost,
                index: successor_index,
            });
        }
    }
    Traversal { parents }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tiny directed graph as an adjacency closure.
    fn successors(edges: &[(u32, u32, i32)]) -> impl FnMut(&u32) -> Vec<(u32, i32)> + '_ {
        move |&node| {
            edges
                .iter()
                .filter(|(from, _, _)| *from == node)
                .map(|&(_, to, w)| (to, w))
                .collect()
        }
    }

    #[test]
    fn line_graph_distances() {
        let edges = [(0, 1, 2), (1, 2, 3), (2, 3, 4)];
        let traversal = dijkstra(&0, successors(&edges));
        assert_eq!(traversal.distance(&0), Some(0));
        assert_eq!(traversal.distance(&3), Some(9));
        assert_eq!(traversal.parent(&0), Some(None));
        assert_eq!(traversal.parent(&3), Some(Some(&2)));
    }

    #[test]
    fn shorter_offer_supersedes_frontier_entry() {
        // 0 -> 2 directly costs 10, but the detour through 1 costs 3. The
        // direct offer lands in the frontier first and must be superseded.
        let edges = [(0, 2, 10), (0, 1, 1), (1, 2, 2)];
        let traversal = dijkstra(&0, successors(&edges));
        assert_eq!(traversal.distance(&2), Some(3));
        assert_eq!(traversal.parent(&2), Some(Some(&1)));
    }

    #[test]
    fn unreachable_vertices_are_absent() {
        let edges = [(0, 1, 1), (5, 6, 1)];
        let traversal = dijkstra(&0, successors(&edges));
        assert_eq!(traversal.len(), 2);
        assert!(!traversal.explored(&5));
        assert_eq!(traversal.distance(&6), None);
        assert_eq!(traversal.parent(&6), None);
    }
}
