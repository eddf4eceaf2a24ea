/// Width of the maze grid in cells, outer wall ring included. Must be odd.
pub const WIDTH: u16 = 21;
/// Height of the maze grid in cells, outer wall ring included. Must be odd.
pub const HEIGHT: u16 = 21;
/// Minimum side length: one room surrounded by the outer wall ring.
pub const MIN_SIDE: u16 = 3;

const _: () = assert!(WIDTH % 2 == 1 && HEIGHT % 2 == 1, "maze dimensions must be odd");
const _: () = assert!(WIDTH >= MIN_SIDE && HEIGHT >= MIN_SIDE, "maze is too small");

/// Settings for a single generate-and-solve run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeConfig {
    pub width: u16,
    pub height: u16,
    /// Seed for the carving RNG. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
