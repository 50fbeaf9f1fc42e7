//! One-character-per-cell text patterns.
//!
//! | Glyph | Colour |
//! |-------|--------|
//! | `B`   | Blue   |
//! | `Y`   | Yellow |
//! | `R`   | Red    |
//! | `.`   | Black  |

use turmite_core::Color;
use turmite_grid::Grid;

/// Map a glyph to its colour. Returns `None` for unknown glyphs.
pub fn glyph_color(glyph: char) -> Option<Color> {
    match glyph {
        'B' => Some(Color::Blue),
        'Y' => Some(Color::Yellow),
        'R' => Some(Color::Red),
        '.' => Some(Color::Black),
        _ => None,
    }
}

/// Map a colour to its glyph.
pub fn color_glyph(color: Color) -> char {
    match color {
        Color::Blue => 'B',
        Color::Yellow => 'Y',
        Color::Red => 'R',
        Color::Black => '.',
    }
}

/// Build a grid from equal-length rows, top row first.
///
/// # Panics
///
/// Panics on an empty pattern, ragged rows, or an unknown glyph.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    assert!(!rows.is_empty(), "pattern has no rows");
    let width = rows[0].chars().count();
    let mut cells = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(
            row.chars().count(),
            width,
            "row {y} has {} cells, expected {width}",
            row.chars().count()
        );
        for (x, glyph) in row.chars().enumerate() {
            let color = glyph_color(glyph)
                .unwrap_or_else(|| panic!("unknown glyph {glyph:?} at ({x}, {y})"));
            cells.push(color);
        }
    }
    Grid::from_cells(width as u32, rows.len() as u32, cells)
        .unwrap_or_else(|e| panic!("invalid pattern: {e}"))
}

/// Render a grid back to pattern rows.
pub fn grid_to_rows(grid: &Grid) -> Vec<String> {
    (0..grid.height() as i64)
        .map(|y| grid.row(y).iter().map(|&c| color_glyph(c)).collect())
        .collect()
}
