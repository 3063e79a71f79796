//! Playfield module - the grid the game is played on
//!
//! Cells are stored in a flat row-major vector (`y * width + x`). Row 0 is the
//! spawn row at the top, row `height - 1` is the floor.
//!
//! Coordinates passed to the primitives are expected to be in bounds; the
//! game state checks bounds before it calls in, so an out-of-range coordinate
//! here is a programming error and panics on the slice index.

use crate::types::{Cell, Color, Coord};

/// The playfield - `width` columns x `height` rows using flat storage
#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Playfield {
    /// Create an empty playfield
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, c: Coord) -> usize {
        debug_assert!(c.x < self.width && c.y < self.height, "{c:?} out of bounds");
        c.y * self.width + c.x
    }

    #[inline(always)]
    fn row_range(&self, y: usize) -> std::ops::Range<usize> {
        debug_assert!(y < self.height, "row {y} out of bounds");
        let start = y * self.width;
        start..start + self.width
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, c: Coord) -> Cell {
        self.cells[self.index(c)]
    }

    /// Mark a cell occupied with the given block color
    pub fn set_occupied(&mut self, c: Coord, color: Color) {
        let idx = self.index(c);
        self.cells[idx] = Some(color);
    }

    pub fn clear_cell(&mut self, c: Coord) {
        let idx = self.index(c);
        self.cells[idx] = None;
    }

    /// Overwrite `to` with the full state of `from`, color included
    pub fn copy_cell(&mut self, to: Coord, from: Coord) {
        let src = self.index(from);
        let dst = self.index(to);
        self.cells[dst] = self.cells[src];
    }

    /// Overwrite row `to` with row `from`
    pub fn copy_row(&mut self, to: usize, from: usize) {
        let src = self.row_range(from);
        let dst = self.row_range(to).start;
        self.cells.copy_within(src, dst);
    }

    pub fn clear_row(&mut self, y: usize) {
        let range = self.row_range(y);
        self.cells[range].fill(None);
    }

    pub fn is_occupied(&self, c: Coord) -> bool {
        self.get(c).is_some()
    }

    /// True iff every cell in the row is occupied
    pub fn is_row_full(&self, y: usize) -> bool {
        let range = self.row_range(y);
        self.cells[range].iter().all(|cell| cell.is_some())
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Shift every row down by one (the bottom row is overwritten) and empty
    /// the top row
    pub fn shift_down(&mut self) {
        for y in (1..self.height).rev() {
            self.copy_row(y, y - 1);
        }
        self.clear_row(0);
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playfield_flat_layout() {
        let mut field = Playfield::new(8, 8);
        field.set_occupied(Coord::new(0, 0), Color::Red);
        field.set_occupied(Coord::new(5, 3), Color::Blue);

        assert_eq!(field.cells[0], Some(Color::Red));
        assert_eq!(field.cells[3 * 8 + 5], Some(Color::Blue));
        assert_eq!(field.occupied_count(), 2);
    }

    #[test]
    fn test_copy_cell_carries_color() {
        let mut field = Playfield::new(4, 4);
        field.set_occupied(Coord::new(1, 1), Color::Magenta);
        field.copy_cell(Coord::new(2, 1), Coord::new(1, 1));
        assert_eq!(field.get(Coord::new(2, 1)), Some(Color::Magenta));

        // Copying an empty cell empties the destination.
        field.copy_cell(Coord::new(1, 1), Coord::new(0, 0));
        assert!(!field.is_occupied(Coord::new(1, 1)));
    }

    #[test]
    fn test_shift_down_drops_bottom_row() {
        let mut field = Playfield::new(3, 3);
        field.set_occupied(Coord::new(0, 0), Color::Red);
        field.set_occupied(Coord::new(1, 1), Color::Green);
        for x in 0..3 {
            field.set_occupied(Coord::new(x, 2), Color::Blue);
        }

        field.shift_down();

        assert!(!field.is_row_full(2));
        assert_eq!(field.get(Coord::new(1, 2)), Some(Color::Green));
        assert_eq!(field.get(Coord::new(0, 1)), Some(Color::Red));
        assert_eq!(field.rows().next().unwrap(), &[None, None, None]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_is_a_bug() {
        let field = Playfield::new(2, 2);
        field.is_occupied(Coord::new(2, 5));
    }
}
