use std::fmt;

use crate::core::Direction;
use crate::core::cell::ROW_TERMINATOR;

/// A board kept exactly as it was read: one flat byte buffer whose rows are
/// separated by [`ROW_TERMINATOR`] and may differ in length.
///
/// Cells are addressed by their index into the buffer. Neighbors are found by
/// scanning for the surrounding terminators, so no row width is ever stored and
/// a row that is too short simply has no cell above or below a long neighbor.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid {
    cells: Vec<u8>,
}

impl Grid {
    pub fn new(cells: Vec<u8>) -> Self {
        Grid { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    pub fn set(&mut self, index: usize, symbol: u8) {
        self.cells[index] = symbol;
    }

    pub fn find(&self, symbol: u8) -> Option<usize> {
        self.cells.iter().position(|&c| c == symbol)
    }

    pub fn neighbor(&self, origin: usize, direction: Direction) -> Option<usize> {
        debug_assert!(origin < self.cells.len(), "origin {origin} outside the grid");
        match direction {
            Direction::Up => self.top(origin),
            Direction::Down => self.bottom(origin),
            Direction::Left => self.left(origin),
            Direction::Right => self.right(origin),
        }
    }

    pub fn neighbors(&self, origin: usize) -> impl Iterator<Item = usize> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(origin, direction))
    }

    /// Index of the first cell of the row containing `index`.
    fn row_start(&self, index: usize) -> usize {
        self.cells[..index]
            .iter()
            .rposition(|&c| c == ROW_TERMINATOR)
            .map_or(0, |terminator| terminator + 1)
    }

    /// Index of the terminator closing the row containing `index`, or the buffer
    /// length for an unterminated last row.
    fn row_end(&self, index: usize) -> usize {
        self.cells[index..]
            .iter()
            .position(|&c| c == ROW_TERMINATOR)
            .map_or(self.cells.len(), |offset| index + offset)
    }

    fn column(&self, index: usize) -> usize {
        index - self.row_start(index)
    }

    fn right(&self, origin: usize) -> Option<usize> {
        let next = origin + 1;
        (next < self.cells.len() && self.cells[next] != ROW_TERMINATOR).then_some(next)
    }

    fn left(&self, origin: usize) -> Option<usize> {
        let previous = origin.checked_sub(1)?;
        (self.cells[previous] != ROW_TERMINATOR).then_some(previous)
    }

    fn bottom(&self, origin: usize) -> Option<usize> {
        let column = self.column(origin);
        let terminator = self.row_end(origin);
        if terminator >= self.cells.len() {
            return None;
        }
        let next_start = terminator + 1;
        let next_end = self.row_end(next_start);
        let candidate = next_start + column;
        (candidate < next_end).then_some(candidate)
    }

    fn top(&self, origin: usize) -> Option<usize> {
        let column = self.column(origin);
        let terminator = self.row_start(origin).checked_sub(1)?;
        let candidate = self.row_start(terminator) + column;
        (candidate < terminator).then_some(candidate)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.cells))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use Direction::*;

    // a0 b1 c2 d3 | x5 y6 | p8 q9 r10 s11 |
    fn ragged() -> Grid {
        Grid::new(b"abcd\nxy\npqrs\n".to_vec())
    }

    #[test]
    fn horizontal_neighbors_stop_at_terminators() {
        let grid = ragged();
        assert_eq!(grid.neighbor(0, Left), None);
        assert_eq!(grid.neighbor(0, Right), Some(1));
        assert_eq!(grid.neighbor(3, Right), None);
        assert_eq!(grid.neighbor(5, Left), None);
        assert_eq!(grid.neighbor(6, Left), Some(5));
        assert_eq!(grid.neighbor(11, Right), None);
    }

    #[test]
    fn vertical_neighbors_keep_the_column() {
        let grid = ragged();
        assert_eq!(grid.neighbor(1, Down), Some(6));
        assert_eq!(grid.neighbor(6, Up), Some(1));
        assert_eq!(grid.neighbor(5, Up), Some(0));
        assert_eq!(grid.neighbor(6, Down), Some(9));
        assert_eq!(grid.neighbor(9, Up), Some(6));
    }

    #[test]
    fn short_rows_have_no_cell_under_long_columns() {
        let grid = ragged();
        assert_eq!(grid.neighbor(2, Down), None);
        assert_eq!(grid.neighbor(3, Down), None);
        assert_eq!(grid.neighbor(10, Up), None);
        assert_eq!(grid.neighbor(11, Up), None);
    }

    #[test]
    fn first_and_last_rows_have_no_outer_neighbors() {
        let grid = ragged();
        assert_eq!(grid.neighbor(0, Up), None);
        assert_eq!(grid.neighbor(3, Up), None);
        assert_eq!(grid.neighbor(8, Down), None);
        assert_eq!(grid.neighbor(11, Down), None);
    }

    #[test]
    fn unterminated_last_row_is_bounded_by_the_buffer() {
        let grid = Grid::new(b"ab\ncd".to_vec());
        assert_eq!(grid.neighbor(4, Right), None);
        assert_eq!(grid.neighbor(3, Down), None);
        assert_eq!(grid.neighbor(0, Down), Some(3));
        assert_eq!(grid.neighbor(4, Up), Some(1));
    }

    #[test]
    fn blank_row_blocks_vertical_movement() {
        let grid = Grid::new(b"ab\n\ncd\n".to_vec());
        assert_eq!(grid.neighbor(0, Down), None);
        assert_eq!(grid.neighbor(4, Up), None);
    }

    #[test]
    fn neighbors_lists_every_existing_direction() {
        let grid = ragged();
        let mut around = grid.neighbors(6).collect::<Vec<_>>();
        around.sort();
        assert_eq!(around, vec![1, 5, 9]);
    }
}
