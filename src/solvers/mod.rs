pub mod dfs;

use crate::maze::NodeId;

/// Result of a search: whether the goal was reached and the parent tree built on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub found: bool,
    start: NodeId,
    goal: NodeId,
    /// Predecessor of each node in the search tree, `None` for the start and unreached nodes.
    parent: Box<[Option<NodeId>]>,
}

impl SearchOutcome {
    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn goal(&self) -> NodeId {
        self.goal
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent[id.index()]
    }

    /// Walks parent pointers from the goal back to the start.
    /// Returns `None` if the goal was not reached.
    ///
    /// # Panics
    /// If the parent chain is longer than the number of nodes, or ends anywhere but the start.
    pub fn path(&self) -> Option<Path> {
        if !self.found {
            return None;
        }
        let mut nodes = vec![self.goal];
        let mut current = self.goal;
        while let Some(parent) = self.parent(current) {
            assert!(
                nodes.len() < self.parent.len(),
                "Parent chain from node {} contains a cycle",
                self.goal.index()
            );
            nodes.push(parent);
            current = parent;
        }
        assert_eq!(
            current,
            self.start,
            "Parent chain ended at node {} instead of the start",
            current.index()
        );
        Some(Path {
            goal: self.goal,
            start: current,
            nodes,
        })
    }
}

/// Rooms on a solved route, ordered from goal back to start.
/// Only built by [`SearchOutcome::path`], so it always holds at least the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    goal: NodeId,
    start: NodeId,
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn goal(&self) -> NodeId {
        self.goal
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Number of rooms on the path, both ends included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A path always holds at least its start, so this is always `false`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of passages crossed.
    pub fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Grid cells covered, counting the passage cell between consecutive rooms.
    pub fn cell_span(&self) -> usize {
        self.nodes.len() * 2 - 1
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }
}
