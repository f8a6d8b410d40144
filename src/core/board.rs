//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a marker.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use crate::types::{Cell, Marker, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// True iff (x, y) is within bounds and unoccupied. Out-of-bounds
    /// coordinates are the collision engine's concern, so they simply read
    /// as "not empty" here.
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write a marker at a board coordinate. The caller guarantees the
    /// coordinate is in bounds; an out-of-bounds write is a programming
    /// error, not a recoverable condition.
    pub fn set(&mut self, x: i8, y: i8, marker: Marker) {
        let idx = Self::index(x, y);
        debug_assert!(idx.is_some(), "board write out of bounds: ({x}, {y})");
        if let Some(idx) = idx {
            self.cells[idx] = Some(marker);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Scans bottom to top with a write cursor: non-full rows are compacted
    /// downward, full rows are dropped, and the vacated rows at the top are
    /// emptied. A row shifted down into a scanned index is re-examined by
    /// construction, since full rows never advance the write cursor.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Fresh empty rows at the top, one per cleared row.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MARKER;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, MARKER);
        board.set(5, 10, MARKER);

        assert_eq!(board.get(0, 0), Some(Some(MARKER)));
        assert_eq!(board.get(5, 10), Some(Some(MARKER)));

        assert_eq!(board.cells[0], Some(MARKER));
        assert_eq!(board.cells[10 * 10 + 5], Some(MARKER));
    }

    #[test]
    fn test_clear_rescans_shifted_row() {
        let mut board = Board::new();

        // Two adjacent full rows: after the lower row clears, the row that
        // shifts into its index is itself full and must also clear.
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 18, MARKER);
            board.set(x, 19, MARKER);
        }

        assert_eq!(board.clear_full_rows(), 2);
        assert!(!board.is_row_full(18));
        assert!(!board.is_row_full(19));
    }
}
