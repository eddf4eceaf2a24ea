use std::time::{Duration, Instant};

use mazecarve::{config::MazeConfig, generators::get_rng, logging, maze::Maze};

const DEFAULT_ITERATIONS: usize = 1000;

/// Average duration per run. `count` may exceed `u32::MAX`, so divide in floating point.
fn mean(total: Duration, count: usize) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    total.div_f64(count as f64)
}

fn main() -> std::io::Result<()> {
    let _guard = logging::init(tracing::Level::INFO);

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_ITERATIONS)
        .max(1);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let config = match seed {
        Some(seed) => MazeConfig::default().with_seed(seed),
        None => MazeConfig::default(),
    };
    let mut rng = get_rng(config.seed);
    tracing::info!(
        num_iters,
        ?seed,
        width = config.width,
        height = config.height,
        "Profiling"
    );

    let mut carve_time = Duration::ZERO;
    let mut search_time = Duration::ZERO;
    let mut unsolved = 0usize;
    for _ in 0..num_iters {
        let started = Instant::now();
        let maze = Maze::generate(config.width, config.height, &mut rng);
        carve_time += started.elapsed();

        let started = Instant::now();
        let outcome = maze.solve();
        search_time += started.elapsed();
        if !outcome.found {
            unsolved += 1;
        }
    }

    tracing::info!(?carve_time, ?search_time, unsolved, "Profiling finished");
    println!(
        "{} mazes of {}x{}: carve {:?} total ({:?} each), search {:?} total ({:?} each), {} unsolved",
        num_iters,
        config.width,
        config.height,
        carve_time,
        mean(carve_time, num_iters),
        search_time,
        mean(search_time, num_iters),
        unsolved
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(Duration::from_secs(6), 3), Duration::from_secs(2));
        assert_eq!(mean(Duration::from_millis(500), 2), Duration::from_millis(250));
        assert_eq!(mean(Duration::from_secs(1), 0), Duration::ZERO);
    }

    #[test]
    fn test_mean_beyond_u32_count() {
        let count = u32::MAX as usize + 1;
        let total = Duration::from_secs(1 << 32);
        assert_eq!(mean(total, count), Duration::from_secs(1));
    }
}
