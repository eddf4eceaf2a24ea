use super::NodeId;

/// A grid cell has at most four orthogonal neighbors.
pub const MAX_DEGREE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Adjacency {
    neighbors: [NodeId; MAX_DEGREE],
    degree: u8,
}

impl Adjacency {
    const EMPTY: Adjacency = Adjacency {
        neighbors: [NodeId(0); MAX_DEGREE],
        degree: 0,
    };

    fn as_slice(&self) -> &[NodeId] {
        &self.neighbors[..self.degree as usize]
    }

    /// Returns `false` when the list is already full.
    fn push(&mut self, id: NodeId) -> bool {
        let degree = self.degree as usize;
        if degree >= MAX_DEGREE {
            return false;
        }
        self.neighbors[degree] = id;
        self.degree += 1;
        true
    }
}

/// Undirected graph over grid cells with bounded degree.
/// Edges are carved passages; neighbor lists keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGraph {
    adjacency: Box<[Adjacency]>,
}

impl CellGraph {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        CellGraph {
            adjacency: vec![Adjacency::EMPTY; node_count].into_boxed_slice(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn entry(&self, id: NodeId) -> &Adjacency {
        self.adjacency.get(id.index()).unwrap_or_else(|| {
            panic!(
                "Node id {} is out of range for a graph of {} nodes",
                id.index(),
                self.node_count()
            )
        })
    }

    fn entry_mut(&mut self, id: NodeId) -> &mut Adjacency {
        let node_count = self.node_count();
        self.adjacency.get_mut(id.index()).unwrap_or_else(|| {
            panic!(
                "Node id {} is out of range for a graph of {} nodes",
                id.index(),
                node_count
            )
        })
    }

    /// Records `v` in `u`'s list and `u` in `v`'s list.
    ///
    /// A full list drops its half of the edge. On a grid lattice that cannot happen,
    /// so debug builds panic and release builds log the overflow.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        for (from, to) in [(u, v), (v, u)] {
            let pushed = self.entry_mut(from).push(to);
            debug_assert!(
                pushed,
                "Node {} already has {} neighbors, cannot add {}",
                from.index(),
                MAX_DEGREE,
                to.index()
            );
            if !pushed {
                tracing::error!(
                    from = from.index(),
                    to = to.index(),
                    "Degree overflow, dropping edge half"
                );
            }
        }
    }

    /// Neighbors of `u` in the order their edges were added.
    pub fn neighbors(&self, u: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.entry(u).as_slice().iter().copied()
    }

    pub fn degree(&self, u: NodeId) -> usize {
        self.entry(u).degree as usize
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|adj| adj.degree as usize)
            .sum::<usize>()
            / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_undirected() {
        let mut graph = CellGraph::new(25);
        graph.add_edge(NodeId(6), NodeId(8));
        assert_eq!(graph.neighbors(NodeId(6)).collect::<Vec<_>>(), [NodeId(8)]);
        assert_eq!(graph.neighbors(NodeId(8)).collect::<Vec<_>>(), [NodeId(6)]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut graph = CellGraph::new(25);
        graph.add_edge(NodeId(12), NodeId(14));
        graph.add_edge(NodeId(12), NodeId(2));
        graph.add_edge(NodeId(22), NodeId(12));
        let neighbors = graph.neighbors(NodeId(12)).collect::<Vec<_>>();
        assert_eq!(neighbors, [NodeId(14), NodeId(2), NodeId(22)]);
        assert_eq!(graph.degree(NodeId(12)), 3);
        // Restartable
        assert_eq!(graph.neighbors(NodeId(12)).count(), 3);
    }

    #[test]
    fn test_empty_graph() {
        let graph = CellGraph::new(9);
        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.neighbors(NodeId(4)).next(), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_node() {
        let graph = CellGraph::new(9);
        graph.degree(NodeId(9));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already has 4 neighbors")]
    fn test_degree_overflow_is_loud() {
        let mut graph = CellGraph::new(9);
        for v in [1, 3, 5, 7, 8] {
            graph.add_edge(NodeId(4), NodeId(v));
        }
    }
}
