//! Shortest-route planning over the board.
//!
//! A* over the 4-connected grid with unit step costs and the Manhattan
//! distance as heuristic. The heuristic never overestimates on this graph,
//! so the first time the goal pops off the frontier the route is shortest,
//! and a cell never needs re-expansion after it is closed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::config::GridSize;
use crate::snake::{Direction, Position};

/// One expanded search node. Nodes live in a single arena for the duration
/// of a search; predecessors are arena indices, and the route is rebuilt by
/// walking them back from the goal.
#[derive(Debug, Clone, Copy)]
struct Node {
    cell: Position,
    cost: u32,
    parent: Option<usize>,
}

/// Finds a shortest route from `start` to `goal`, stepping only through
/// cells accepted by `is_free`.
///
/// The returned route runs from `start` to `goal` inclusive. `start`
/// itself is exempt from the `is_free` test (the snake's head stands
/// there). Returns `None` when the frontier drains before the goal is
/// reached. Equal-estimate ties break by insertion order, so a search over
/// fixed inputs always yields the same route.
#[must_use]
pub fn find_route(
    start: Position,
    goal: Position,
    bounds: GridSize,
    is_free: impl Fn(Position) -> bool,
) -> Option<Vec<Position>> {
    let mut arena = vec![Node {
        cell: start,
        cost: 0,
        parent: None,
    }];
    let mut closed = vec![false; bounds.total_cells()];

    // Frontier entries are (estimate, arena index); `Reverse` turns the
    // max-heap into a min-heap and the index breaks estimate ties toward
    // the earliest insertion.
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((manhattan(start, goal), 0usize)));

    while let Some(Reverse((_, index))) = frontier.pop() {
        let Node { cell, cost, .. } = arena[index];

        if cell == goal {
            return Some(walk_back(&arena, index));
        }

        let slot = cell_slot(cell, bounds);
        if closed[slot] {
            continue;
        }
        closed[slot] = true;

        for direction in Direction::ALL {
            let next = cell.step(direction);
            if !next.is_within_bounds(bounds) {
                continue;
            }
            if closed[cell_slot(next, bounds)] {
                continue;
            }
            if !is_free(next) {
                continue;
            }

            let child = arena.len();
            arena.push(Node {
                cell: next,
                cost: cost + 1,
                parent: Some(index),
            });
            frontier.push(Reverse((cost + 1 + manhattan(next, goal), child)));
        }
    }

    None
}

/// Manhattan distance between two cells.
#[must_use]
pub fn manhattan(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

fn cell_slot(cell: Position, bounds: GridSize) -> usize {
    debug_assert!(cell.is_within_bounds(bounds));
    usize::try_from(cell.y).unwrap_or(0) * usize::from(bounds.width)
        + usize::try_from(cell.x).unwrap_or(0)
}

fn walk_back(arena: &[Node], goal_index: usize) -> Vec<Position> {
    let mut route = Vec::new();
    let mut index = Some(goal_index);

    while let Some(current) = index {
        route.push(arena[current].cell);
        index = arena[current].parent;
    }

    route.reverse();
    route
}
