pub mod config;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod renderer;
pub mod solvers;

use std::io::Write;

use crate::{
    maze::{Grid, Maze},
    solvers::SearchOutcome,
};

/// Solves `maze` and writes the result with [`write_outcome`].
pub fn print_solution<W: Write>(
    maze: &Maze,
    out: &mut W,
    styled: bool,
) -> std::io::Result<bool> {
    write_outcome(maze.grid(), &maze.solve(), out, styled)
}

/// Writes either the `Solved Maze:` header and rendering, or a single
/// `No solution found!` line.
///
/// Returns whether a path was found. Neither outcome is an error.
pub fn write_outcome<W: Write>(
    grid: &Grid,
    outcome: &SearchOutcome,
    out: &mut W,
    styled: bool,
) -> std::io::Result<bool> {
    let Some(path) = outcome.path() else {
        tracing::warn!("No path from start to goal");
        writeln!(out, "No solution found!")?;
        return Ok(false);
    };

    tracing::debug!(rooms = path.len(), cells = path.cell_span(), "Rendering solved maze");
    writeln!(out, "Solved Maze:")?;
    if styled {
        renderer::write_styled(out, grid, Some(&path))?;
    } else {
        out.write_all(renderer::render(grid, Some(&path)).as_bytes())?;
    }
    Ok(true)
}
