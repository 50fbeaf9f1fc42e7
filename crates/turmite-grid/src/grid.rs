//! The toroidal colour lattice.

use crate::hash;
use crate::wrap::{axis_delta, wrap_axis};
use smallvec::SmallVec;
use turmite_core::{Color, GridError, Heading, Position};

/// A fixed-size `width × height` lattice of [`Color`] cells with periodic
/// boundaries on both axes (torus topology).
///
/// Cells are stored row-major. Every coordinate passed in is wrapped
/// before lookup, so `color_at` and `paint` never fail. A fresh grid is
/// all [`Color::Black`], the unvisited baseline.
///
/// # Examples
///
/// ```
/// use turmite_core::Color;
/// use turmite_grid::Grid;
///
/// let mut grid = Grid::new(60, 40).unwrap();
/// assert_eq!(grid.color_at(0, 0), Color::Black);
///
/// // (-1, -1) wraps to the opposite corner.
/// grid.paint(-1, -1, Color::Red);
/// assert_eq!(grid.color_at(59, 39), Color::Red);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Color>,
}

impl Grid {
    /// Maximum axis length: signed offsets use `i64` but positions are
    /// reported as `u32`, and this keeps both comfortably in range.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-black grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::filled(width, height, Color::Black)
    }

    /// Create a grid with every cell set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, GridError> {
        let len = Self::validate_dims(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![color; len],
        })
    }

    /// Create a grid from a row-major cell buffer.
    ///
    /// Fails with [`GridError::CellCountMismatch`] unless the buffer holds
    /// exactly `width * height` colours.
    pub fn from_cells(width: u32, height: u32, cells: Vec<Color>) -> Result<Self, GridError> {
        let len = Self::validate_dims(width, height)?;
        if cells.len() != len {
            return Err(GridError::CellCountMismatch {
                expected: len,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Check that `width × height` is a constructible grid and return its
    /// cell count, without allocating.
    pub fn validate_dims(width: u32, height: u32) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok((width as usize) * (height as usize))
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Wrap an arbitrary signed coordinate onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> Position {
        Position::new(wrap_axis(x, self.width), wrap_axis(y, self.height))
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    /// Colour of the cell at `(x, y)` after wrapping.
    pub fn color_at(&self, x: i64, y: i64) -> Color {
        self.color_at_pos(self.wrap(x, y))
    }

    /// Colour of the cell at `pos`. `pos` is re-wrapped, so a position
    /// taken from a larger grid still resolves.
    pub fn color_at_pos(&self, pos: Position) -> Color {
        let pos = self.wrap(pos.x as i64, pos.y as i64);
        self.cells[self.index(pos)]
    }

    /// Overwrite the cell at `(x, y)` after wrapping.
    pub fn paint(&mut self, x: i64, y: i64, color: Color) {
        self.paint_pos(self.wrap(x, y), color);
    }

    /// Overwrite the cell at `pos`.
    pub fn paint_pos(&mut self, pos: Position, color: Color) {
        let pos = self.wrap(pos.x as i64, pos.y as i64);
        let i = self.index(pos);
        self.cells[i] = color;
    }

    /// The cell one step from `pos` in direction `heading`, wrapped.
    pub fn offset(&self, pos: Position, heading: Heading) -> Position {
        let (dx, dy) = heading.offset();
        self.wrap(pos.x as i64 + dx, pos.y as i64 + dy)
    }

    /// The four orthogonal neighbours of `pos` in `N, E, S, W` order.
    ///
    /// On a torus every cell has exactly four; on an axis of length 1 or 2
    /// some of them coincide (a 1×1 grid is its own neighbour four times).
    pub fn neighbours(&self, pos: Position) -> SmallVec<[Position; 4]> {
        Heading::ALL
            .iter()
            .map(|&h| self.offset(pos, h))
            .collect()
    }

    /// Shortest signed `(dx, dy)` displacement from `from` to `to` on the torus.
    pub fn displacement(&self, from: Position, to: Position) -> (i64, i64) {
        (
            axis_delta(from.x, to.x, self.width),
            axis_delta(from.y, to.y, self.height),
        )
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// One row of cells, `y` wrapped.
    pub fn row(&self, y: i64) -> &[Color] {
        let y = wrap_axis(y, self.height) as usize;
        let w = self.width as usize;
        &self.cells[y * w..(y + 1) * w]
    }

    /// Number of cells currently holding `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Reset every cell to `color`.
    pub fn fill(&mut self, color: Color) {
        self.cells.fill(color);
    }

    /// FNV-1a fingerprint of dimensions and cells; see [`hash::grid_fingerprint`].
    pub fn fingerprint(&self) -> u64 {
        hash::grid_fingerprint(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: u32, y: u32) -> Position {
        Position::new(x, y)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_is_all_black() {
        let g = Grid::new(60, 40).unwrap();
        assert_eq!(g.cell_count(), 2400);
        assert_eq!(g.count(Color::Black), 2400);
    }

    #[test]
    fn new_zero_width_returns_error() {
        assert_eq!(Grid::new(0, 5), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_zero_height_returns_error() {
        assert_eq!(Grid::new(5, 0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_dims_exceeding_max() {
        let big = Grid::MAX_DIM + 1;
        assert!(matches!(
            Grid::new(big, 1),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Grid::new(1, big),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(Grid::from_cells(2, 2, vec![Color::Red; 4]).is_ok());
        assert_eq!(
            Grid::from_cells(2, 2, vec![Color::Red; 3]),
            Err(GridError::CellCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    // ── Read / paint tests ──────────────────────────────────────

    #[test]
    fn paint_then_read() {
        let mut g = Grid::new(5, 4).unwrap();
        g.paint(2, 3, Color::Yellow);
        assert_eq!(g.color_at(2, 3), Color::Yellow);
        assert_eq!(g.count(Color::Yellow), 1);
        assert_eq!(g.row(3)[2], Color::Yellow);
    }

    #[test]
    fn unnormalised_coordinates_wrap() {
        let mut g = Grid::new(5, 4).unwrap();
        g.paint(7, -1, Color::Blue);
        assert_eq!(g.color_at(2, 3), Color::Blue);
        assert_eq!(g.color_at(-3, 7), Color::Blue);
        assert_eq!(g.color_at_pos(p(2, 3)), Color::Blue);
    }

    #[test]
    fn paint_touches_exactly_one_cell() {
        let mut g = Grid::new(8, 8).unwrap();
        g.paint_pos(p(4, 4), Color::Red);
        assert_eq!(g.count(Color::Red), 1);
        assert_eq!(g.count(Color::Black), 63);
    }

    #[test]
    fn fill_resets_every_cell() {
        let mut g = Grid::new(3, 3).unwrap();
        g.paint(0, 0, Color::Red);
        g.fill(Color::Black);
        assert_eq!(g, Grid::new(3, 3).unwrap());
    }

    // ── Movement / neighbour tests ──────────────────────────────

    #[test]
    fn offset_wraps_each_edge() {
        let g = Grid::new(60, 40).unwrap();
        assert_eq!(g.offset(p(30, 0), Heading::North), p(30, 39));
        assert_eq!(g.offset(p(30, 39), Heading::South), p(30, 0));
        assert_eq!(g.offset(p(0, 20), Heading::West), p(59, 20));
        assert_eq!(g.offset(p(59, 20), Heading::East), p(0, 20));
    }

    #[test]
    fn neighbours_wrap_corner() {
        let g = Grid::new(5, 5).unwrap();
        let n = g.neighbours(p(0, 0));
        assert_eq!(n.as_slice(), &[p(0, 4), p(1, 0), p(0, 1), p(4, 0)]);
    }

    #[test]
    fn single_cell_is_its_own_neighbour() {
        let g = Grid::new(1, 1).unwrap();
        let n = g.neighbours(p(0, 0));
        assert_eq!(n.len(), 4);
        assert!(n.iter().all(|&nb| nb == p(0, 0)));
    }

    #[test]
    fn displacement_across_seam() {
        let g = Grid::new(60, 40).unwrap();
        assert_eq!(g.displacement(p(0, 0), p(59, 39)), (-1, -1));
        assert_eq!(g.displacement(p(30, 20), p(30, 15)), (0, -5));
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_heading() -> impl Strategy<Value = Heading> {
        prop::sample::select(Heading::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn offset_stays_in_range(
            w in 1u32..80, h in 1u32..80,
            x in -200i64..200, y in -200i64..200,
            heading in arb_heading(),
        ) {
            let g = Grid::new(w, h).unwrap();
            let next = g.offset(g.wrap(x, y), heading);
            prop_assert!(next.x < w);
            prop_assert!(next.y < h);
        }

        #[test]
        fn neighbours_symmetric(w in 1u32..12, h in 1u32..12, x in 0u32..12, y in 0u32..12) {
            let g = Grid::new(w, h).unwrap();
            let pos = g.wrap(x as i64, y as i64);
            for nb in g.neighbours(pos) {
                prop_assert!(
                    g.neighbours(nb).contains(&pos),
                    "neighbour symmetry violated: {:?} in N({:?}) but not vice versa",
                    nb, pos,
                );
            }
        }

        #[test]
        fn color_at_always_in_palette(
            w in 1u32..20, h in 1u32..20,
            x in any::<i32>(), y in any::<i32>(),
        ) {
            let g = Grid::new(w, h).unwrap();
            let c = g.color_at(x as i64, y as i64);
            prop_assert!(Color::ALL.contains(&c));
        }
    }
}
