use super::{Coord, NodeId, cell::Cell, node_coord, node_id};
use crate::config::MIN_SIDE;

/// Fixed-size matrix of wall/open cells, stored row-major.
///
/// Rooms live on odd coordinates and the outer ring is always wall,
/// so both dimensions must be odd and at least [`MIN_SIDE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid filled with walls.
    ///
    /// # Panics
    /// If either dimension is even or smaller than [`MIN_SIDE`].
    pub fn new(width: u16, height: u16) -> Self {
        assert!(
            width % 2 == 1 && height % 2 == 1,
            "Grid dimensions must be odd, got {}x{}",
            width,
            height
        );
        assert!(
            width >= MIN_SIDE && height >= MIN_SIDE,
            "Grid dimensions must be at least {}x{}, got {}x{}",
            MIN_SIDE,
            MIN_SIDE,
            width,
            height
        );
        let data = vec![Cell::Wall; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells, which is also the size of the node id space.
    pub fn node_count(&self) -> usize {
        self.data.len()
    }

    /// Number of room cells, i.e. cells on odd coordinates.
    pub fn room_count(&self) -> usize {
        (self.width as usize / 2) * (self.height as usize / 2)
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Whether the coordinate lies strictly inside the outer wall ring.
    pub fn is_interior(&self, coord: Coord) -> bool {
        coord.0 > 0 && coord.0 < self.width - 1 && coord.1 > 0 && coord.1 < self.height - 1
    }

    pub fn is_room(&self, coord: Coord) -> bool {
        self.is_interior(coord) && coord.0 % 2 == 1 && coord.1 % 2 == 1
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        assert!(
            self.is_in_bounds(coord),
            "Coordinate ({}, {}) is out of bounds for a {}x{} grid",
            coord.0,
            coord.1,
            self.width,
            self.height
        );
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    pub fn set_open(&mut self, coord: Coord) {
        let idx = self.ravel_index(coord);
        self.data[idx] = Cell::Open;
    }

    pub fn is_wall(&self, coord: Coord) -> bool {
        self[coord].is_wall()
    }

    pub fn is_open(&self, coord: Coord) -> bool {
        self[coord].is_open()
    }

    pub fn id_of(&self, coord: Coord) -> NodeId {
        assert!(
            self.is_in_bounds(coord),
            "Coordinate ({}, {}) has no node id in a {}x{} grid",
            coord.0,
            coord.1,
            self.width,
            self.height
        );
        node_id(coord, self.width)
    }

    pub fn coord_of(&self, id: NodeId) -> Coord {
        assert!(
            id.index() < self.node_count(),
            "Node id {} is out of range for a {}x{} grid",
            id.index(),
            self.width,
            self.height
        );
        node_coord(id, self.width)
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}
