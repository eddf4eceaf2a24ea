use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::carve;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Cardinal carving directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Unit step `(dx, dy)`, with y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    /// All four directions in a uniformly random order (Durstenfeld's Fisher-Yates).
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> [Direction; 4] {
        let mut dirs = Direction::ALL;
        for i in (1..dirs.len()).rev() {
            let j = rng.random_range(0..=i);
            dirs.swap(i, j);
        }
        dirs
    }
}
