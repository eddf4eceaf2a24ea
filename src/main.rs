use std::io::IsTerminal;

use mazecarve::{config::MazeConfig, generators::get_rng, logging, maze::Maze, print_solution};

fn main() -> std::io::Result<()> {
    let _guard = logging::init(logging::DEFAULT_LEVEL);

    let config = MazeConfig::default();
    let mut rng = get_rng(config.seed);
    let maze = Maze::generate(config.width, config.height, &mut rng);

    let mut stdout = std::io::stdout().lock();
    let styled = stdout.is_terminal();
    // An unsolvable maze is still a successful run
    print_solution(&maze, &mut stdout, styled)?;
    Ok(())
}
