pub mod cell;
pub mod graph;
pub mod grid;

use rand::Rng;

pub use cell::Cell;
pub use graph::CellGraph;
pub use grid::Grid;

use crate::{
    generators::carve,
    solvers::{SearchOutcome, dfs::search},
};

/// A grid coordinate `(x, y)`.
pub type Coord = (u16, u16);

/// Graph vertex identifier of a cell, `y * width + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in any per-node table.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Node id of `coord` in a grid that is `width` cells wide.
pub fn node_id(coord: Coord, width: u16) -> NodeId {
    debug_assert!(coord.0 < width, "x = {} exceeds width {}", coord.0, width);
    NodeId(coord.1 as usize * width as usize + coord.0 as usize)
}

/// Inverse of [`node_id`].
pub fn node_coord(id: NodeId, width: u16) -> Coord {
    let width = width as usize;
    ((id.0 % width) as u16, (id.0 / width) as u16)
}

/// A carved maze: the physical grid and the passage graph built alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    graph: CellGraph,
}

impl Maze {
    /// Allocates a fully walled grid with an empty graph and carves it from the start room.
    pub fn generate<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Self {
        let mut grid = Grid::new(width, height);
        let mut graph = CellGraph::new(grid.node_count());
        carve(&mut grid, &mut graph, Maze::start_coord(), rng);
        Maze { grid, graph }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn graph(&self) -> &CellGraph {
        &self.graph
    }

    pub fn room_count(&self) -> usize {
        self.grid.room_count()
    }

    fn start_coord() -> Coord {
        (1, 1)
    }

    /// The top-left room.
    pub fn start(&self) -> NodeId {
        self.grid.id_of(Maze::start_coord())
    }

    /// The bottom-right room.
    pub fn goal(&self) -> NodeId {
        self.grid.id_of((self.grid.width() - 2, self.grid.height() - 2))
    }

    /// Searches the passage graph from [`Maze::start`] to [`Maze::goal`].
    pub fn solve(&self) -> SearchOutcome {
        search(&self.graph, self.start(), self.goal())
    }
}
