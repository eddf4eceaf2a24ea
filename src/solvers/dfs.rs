use super::SearchOutcome;
use crate::maze::{CellGraph, NodeId};

/// Iterative depth-first search over `graph` from `start` to `goal`.
///
/// Neighbors are pushed in stored order and get their parent recorded when pushed,
/// not when popped. Stops as soon as the goal is popped.
///
/// # Panics
/// If `start` or `goal` is not a node of `graph`.
pub fn search(graph: &CellGraph, start: NodeId, goal: NodeId) -> SearchOutcome {
    let node_count = graph.node_count();
    assert!(
        start.index() < node_count && goal.index() < node_count,
        "Search endpoints {} and {} must be below {}",
        start.index(),
        goal.index(),
        node_count
    );

    let mut visited = vec![false; node_count];
    let mut parent = vec![None; node_count].into_boxed_slice();
    // Every node is pushed at most once
    let mut stack = Vec::with_capacity(node_count);

    stack.push(start);
    visited[start.index()] = true;

    let mut found = false;
    let mut popped = 0usize;
    while let Some(current) = stack.pop() {
        popped += 1;
        if current == goal {
            found = true;
            break;
        }
        for neighbor in graph.neighbors(current) {
            if !visited[neighbor.index()] {
                visited[neighbor.index()] = true;
                parent[neighbor.index()] = Some(current);
                stack.push(neighbor);
            }
        }
    }

    if found {
        tracing::debug!(start = start.index(), goal = goal.index(), popped, "Goal reached");
    } else {
        tracing::warn!(start = start.index(), goal = goal.index(), popped, "Goal unreachable");
    }

    SearchOutcome {
        found,
        start,
        goal,
        parent,
    }
}
