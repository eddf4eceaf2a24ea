use std::io::Write;

use crossterm::{
    queue,
    style::{Color, PrintStyledContent, StyledContent, Stylize},
};

use crate::{maze::Grid, solvers::Path};

/// What a single cell is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Path,
    Wall,
    Open,
}

impl Glyph {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: usize = 2;

    pub fn symbol(self) -> &'static str {
        let symbol = match self {
            Glyph::Path => "* ",
            Glyph::Wall => "||",
            Glyph::Open => "  ",
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                symbol.width(),
                Glyph::CELL_WIDTH,
                "Each cell must occupy exactly two character widths."
            );
        }

        symbol
    }

    pub fn styled(self) -> StyledContent<&'static str> {
        let symbol = self.symbol();
        match self {
            Glyph::Path => symbol.with(Color::Yellow).bold(),
            Glyph::Wall => symbol.with(Color::DarkGrey),
            Glyph::Open => symbol.with(Color::Reset),
        }
    }
}

/// Path markers take precedence over the cell state.
fn glyph_at(grid: &Grid, coord: (u16, u16), path: Option<&Path>) -> Glyph {
    if path.is_some_and(|p| p.contains(grid.id_of(coord))) {
        Glyph::Path
    } else if grid.is_wall(coord) {
        Glyph::Wall
    } else {
        Glyph::Open
    }
}

fn rows<'a>(grid: &'a Grid, path: Option<&'a Path>) -> impl Iterator<Item = Vec<Glyph>> + 'a {
    (0..grid.height()).map(move |y| {
        (0..grid.width())
            .map(|x| glyph_at(grid, (x, y), path))
            .collect()
    })
}

/// Renders the grid as plain text, one line per row, marking the rooms on `path`.
pub fn render(grid: &Grid, path: Option<&Path>) -> String {
    let line_len = grid.width() as usize * Glyph::CELL_WIDTH + 1;
    let mut out = String::with_capacity(line_len * grid.height() as usize);
    for row in rows(grid, path) {
        row.iter().for_each(|g| out.push_str(g.symbol()));
        out.push('\n');
    }
    out
}

/// Writes the same layout as [`render`] with terminal colors.
pub fn write_styled<W: Write>(
    out: &mut W,
    grid: &Grid,
    path: Option<&Path>,
) -> std::io::Result<()> {
    for row in rows(grid, path) {
        for glyph in row {
            queue!(out, PrintStyledContent(glyph.styled()))?;
        }
        writeln!(out)?;
    }
    out.flush()
}
