//! Shapes module - the fixed piece catalog and clockwise rotation
//!
//! A shape is a small rectangular occupancy grid; pieces carry no identity
//! beyond their occupancy and marker glyph, so a rotated copy is just another
//! shape. The catalog holds the five templates and hands out independent
//! copies so in-place rotation never touches a template.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{Marker, MARKER};

/// Largest bounding-box side across the catalog (the I piece).
pub const MAX_DIM: usize = 4;

/// Upper bound on filled cells per shape, used for the offset list.
pub const MAX_CELLS: usize = MAX_DIM * MAX_DIM;

/// An immutable occupancy grid with logical dimensions inside a fixed
/// 4x4 backing array. Copy-cheap by design (34 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: u8,
    cols: u8,
    marker: Marker,
    cells: [[bool; MAX_DIM]; MAX_DIM],
}

impl Shape {
    /// Build a shape from pattern rows, where any non-space character marks
    /// a filled cell. Rows must be non-empty, equal length, and fit 4x4.
    pub fn from_pattern(pattern: &[&str]) -> Self {
        assert!(!pattern.is_empty() && pattern.len() <= MAX_DIM);
        let cols = pattern[0].chars().count();
        assert!(cols > 0 && cols <= MAX_DIM);

        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        for (y, row) in pattern.iter().enumerate() {
            assert_eq!(row.chars().count(), cols, "ragged pattern row {y}");
            for (x, ch) in row.chars().enumerate() {
                cells[y][x] = ch != ' ';
            }
        }

        Self {
            rows: pattern.len() as u8,
            cols: cols as u8,
            marker: MARKER,
            cells,
        }
    }

    /// Height of the bounding box in cells.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Width of the bounding box in cells.
    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Whether the cell at (col, row) inside the bounding box is filled.
    /// Out-of-box coordinates read as empty.
    pub fn filled(&self, col: u8, row: u8) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row as usize][col as usize]
    }

    /// (col, row) offsets of every filled cell, row-major, no allocation.
    pub fn filled_cells(&self) -> ArrayVec<(i8, i8), MAX_CELLS> {
        let mut out = ArrayVec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.cells[row as usize][col as usize] {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// The 90-degree clockwise rotation: an RxC grid becomes CxR with
    /// `new[col][R-1-row] = old[row][col]`. Pure; placement legality at the
    /// anchor is the caller's job.
    pub fn rotated(&self) -> Self {
        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        for row in 0..self.rows as usize {
            for col in 0..self.cols as usize {
                cells[col][self.rows as usize - 1 - row] = self.cells[row][col];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            marker: self.marker,
            cells,
        }
    }
}

/// The fixed, ordered set of piece templates.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: [Shape; 5],
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            templates: [
                // Square
                Shape::from_pattern(&["■■", "■■"]),
                // Z
                Shape::from_pattern(&["■■ ", " ■■"]),
                // L
                Shape::from_pattern(&["■  ", "■■■"]),
                // S
                Shape::from_pattern(&[" ■■", "■■ "]),
                // Line
                Shape::from_pattern(&["■■■■"]),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn templates(&self) -> &[Shape] {
        &self.templates
    }

    /// Pick a template uniformly at random. `Shape` is `Copy`, so the caller
    /// gets an independent grid to rotate freely.
    pub fn pick(&self, rng: &mut SimpleRng) -> Shape {
        let idx = rng.next_range(self.templates.len() as u32) as usize;
        self.templates[idx]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
