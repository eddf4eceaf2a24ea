use rand::Rng;

use super::Direction;
use crate::maze::{CellGraph, Coord, Grid};

/// One room on the carving stack, with the directions it has yet to try.
struct Frame {
    cell: Coord,
    dirs: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(cell: Coord, rng: &mut R) -> Self {
        Frame {
            cell,
            dirs: Direction::shuffled(rng),
            next: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let dir = self.dirs.get(self.next).copied();
        self.next += 1;
        dir
    }
}

/// Returns the wall cell one step from `cell` and the room two steps away,
/// or `None` if that room would fall on or outside the outer wall ring.
fn step(grid: &Grid, cell: Coord, dir: Direction) -> Option<(Coord, Coord)> {
    let (dx, dy) = dir.delta();
    let (x, y) = (cell.0 as i32, cell.1 as i32);
    let (tx, ty) = (x + dx * 2, y + dy * 2);
    if tx <= 0 || ty <= 0 || tx >= grid.width() as i32 - 1 || ty >= grid.height() as i32 - 1 {
        return None;
    }
    let wall = ((x + dx) as u16, (y + dy) as u16);
    Some((wall, (tx as u16, ty as u16)))
}

/// Carves a perfect maze into `grid` by randomized depth-first backtracking from `start`,
/// adding an edge to `graph` for every passage opened.
///
/// Each room shuffles its four directions on entry and fully explores the first
/// unvisited neighbor before trying the next one. The stack holds one frame per
/// room on the current branch, so it never grows past the number of rooms.
///
/// # Panics
/// * If `start` is not a room cell of `grid`
/// * If `graph` was not sized for `grid`
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, graph: &mut CellGraph, start: Coord, rng: &mut R) {
    assert!(
        grid.is_room(start),
        "Carving must start on a room cell, got ({}, {})",
        start.0,
        start.1
    );
    assert_eq!(
        graph.node_count(),
        grid.node_count(),
        "Cell graph must have one node per grid cell"
    );

    grid.set_open(start);
    let mut stack = Vec::with_capacity(grid.room_count());
    stack.push(Frame::new(start, rng));
    let mut rooms = 1;

    while let Some(frame) = stack.last_mut() {
        let Some(dir) = frame.next_direction() else {
            // Every direction tried, backtrack
            stack.pop();
            continue;
        };
        let cell = frame.cell;
        let Some((wall, target)) = step(grid, cell, dir) else {
            continue;
        };
        if !grid.is_wall(target) {
            continue;
        }

        grid.set_open(wall);
        graph.add_edge(grid.id_of(cell), grid.id_of(target));
        grid.set_open(target);
        rooms += 1;
        // Descend into the new room before trying this room's other directions
        stack.push(Frame::new(target, rng));
    }

    tracing::debug!(
        rooms,
        edges = graph.edge_count(),
        width = grid.width(),
        height = grid.height(),
        "Carved maze"
    );
}
