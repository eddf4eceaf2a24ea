/// State of a single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Solid wall. Every cell starts out this way.
    #[default]
    Wall,
    /// A carved room or the passage between two rooms.
    Open,
}

impl Cell {
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}
