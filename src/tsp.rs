//! Exact tour search over the meta graph. Exhaustive backtracking over target
//! orderings anchored at the start vertex; factorial in the number of
//! targets, which is acceptable for the handful of reward locations a maze
//! game hands out and deliberately not engineered beyond that.

use grid_util::point::Point;
use log::info;

use crate::error::PlanError;
use crate::meta::MetaGraph;

/// A minimum-distance visiting order over the target set. `stops` is a
/// permutation of the targets; the start vertex is implicit and not included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    pub stops: Vec<Point>,
    pub total_distance: i32,
}

/// Finds the visiting order of `targets` that minimizes total meta-graph
/// distance starting from `start`. Branches enumerate targets in slice order,
/// and only a strictly shorter complete order replaces the incumbent, so ties
/// resolve to the order found first. Fails with [PlanError::Unreachable] if
/// the matrix is missing a required pair.
pub fn solve_exact(meta: &MetaGraph, start: Point, targets: &[Point]) -> Result<Tour, PlanError> {
    if targets.is_empty() {
        return Ok(Tour {
            stops: Vec::new(),
            total_distance: 0,
        });
    }
    debug_assert!(targets.len() <= 64, "bitmask limits the target set to 64");
    let mut best: Option<Tour> = None;
    let mut partial = Vec::with_capacity(targets.len());
    extend_order(meta, start, targets, 0, &mut partial, 0, &mut best)?;
    // Every target pair is present in a fully built meta graph, so the search
    // always completes at least one order.
    let tour = best.ok_or(PlanError::Unreachable {
        from: start,
        to: targets[0],
    })?;
    info!(
        "Optimal tour over {} targets has distance {}",
        targets.len(),
        tour.total_distance
    );
    Ok(tour)
}

fn extend_order(
    meta: &MetaGraph,
    current: Point,
    targets: &[Point],
    visited: u64,
    partial: &mut Vec<Point>,
    travelled: i32,
    best: &mut Option<Tour>,
) -> Result<(), PlanError> {
    if partial.len() == targets.len() {
        if best
            .as_ref()
            .map_or(true, |tour| travelled < tour.total_distance)
        {
            *best = Some(Tour {
                stops: partial.clone(),
                total_distance: travelled,
            });
        }
        return Ok(());
    }
    for (index, &next) in targets.iter().enumerate() {
        if visited & (1 << index) != 0 {
            continue;
        }
        let leg = meta
            .distance(&current, &next)
            .ok_or(PlanError::Unreachable {
                from: current,
                to: next,
            })?;
        let extended = travelled + leg;
        // Positive weights mean extending an order never shortens it, so a
        // partial order already matching the incumbent cannot win.
        if best
            .as_ref()
            .map_or(false, |tour| extended >= tour.total_distance)
        {
            continue;
        }
        partial.push(next);
        extend_order(
            meta,
            next,
            targets,
            visited | (1 << index),
            partial,
            extended,
            best,
        )?;
        partial.pop();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MazeGraph;
    use crate::meta::build_meta_graph;

    fn corridor_graph(edges: &[(Point, Point, i32)]) -> MazeGraph {
        let mut graph = MazeGraph::new();
        for &(a, b, w) in edges {
            graph.add_corridor(a, b, w).unwrap();
        }
        graph
    }

    #[test]
    fn picks_the_cheaper_ordering() {
        // One target sits just past the start, the other far out on the same
        // line; visiting the near one first is strictly cheaper.
        let start = Point::new(0, 0);
        let near = Point::new(1, 0);
        let far = Point::new(3, 0);
        let graph = corridor_graph(&[
            (start, near, 1),
            (near, Point::new(2, 0), 1),
            (Point::new(2, 0), far, 1),
        ]);
        let meta = build_meta_graph(&graph, &[start, near, far]).unwrap();
        // Enumeration order offers the far target first; the optimum must
        // still come out near-first.
        let tour = solve_exact(&meta, start, &[far, near]).unwrap();
        assert_eq!(tour.stops, vec![near, far]);
        assert_eq!(tour.total_distance, 3);
    }

    #[test]
    fn ties_resolve_to_first_enumerated_order() {
        // Symmetric cross: both targets are at distance 2 from the start and
        // 4 from each other, so both orders total 6.
        let start = Point::new(0, 0);
        let east = Point::new(2, 0);
        let north = Point::new(0, 2);
        let graph = corridor_graph(&[
            (start, Point::new(1, 0), 1),
            (Point::new(1, 0), east, 1),
            (start, Point::new(0, 1), 1),
            (Point::new(0, 1), north, 1),
        ]);
        let meta = build_meta_graph(&graph, &[start, east, north]).unwrap();
        let tour = solve_exact(&meta, start, &[east, north]).unwrap();
        assert_eq!(tour.stops, vec![east, north]);
        assert_eq!(tour.total_distance, 6);
        let flipped = solve_exact(&meta, start, &[north, east]).unwrap();
        assert_eq!(flipped.stops, vec![north, east]);
    }

    #[test]
    fn empty_target_set_is_a_zero_length_tour() {
        let start = Point::new(0, 0);
        let graph = corridor_graph(&[(start, Point::new(1, 0), 1)]);
        let meta = build_meta_graph(&graph, &[start]).unwrap();
        let tour = solve_exact(&meta, start, &[]).unwrap();
        assert!(tour.stops.is_empty());
        assert_eq!(tour.total_distance, 0);
    }
}
