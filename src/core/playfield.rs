//! Playfield module - the fixed grid of locked cells.
//!
//! A 15x25 grid where each cell is empty or holds a locked piece's color.
//! Uses a flat array for cache locality; coordinates are (x, y) with x
//! growing rightward and y growing downward. The falling piece is never
//! stored here; it is composited over the grid at render time and merged
//! only when it locks.

use crate::core::catalog::ShapeMatrix;
use crate::types::{Cell, Rgb, PLAYFIELD_COLS, PLAYFIELD_ROWS};

/// Total number of cells on the playfield.
const FIELD_SIZE: usize = (PLAYFIELD_COLS as usize) * (PLAYFIELD_ROWS as usize);

/// The playfield - 15 columns x 25 rows using flat array storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    /// Flat array of cells, row-major order (y * COLS + x).
    cells: [Cell; FIELD_SIZE],
}

impl Playfield {
    /// Create a new empty playfield.
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= PLAYFIELD_COLS as i8 || y < 0 || y >= PLAYFIELD_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (PLAYFIELD_COLS as usize) + (x as usize))
    }

    /// Get width of the playfield.
    pub fn width(&self) -> u8 {
        PLAYFIELD_COLS
    }

    /// Get height of the playfield.
    pub fn height(&self) -> u8 {
        PLAYFIELD_ROWS
    }

    /// Get cell at position (x, y).
    /// Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y).
    /// Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled).
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Test a shape matrix at the given offset against walls, floor, and
    /// locked cells.
    ///
    /// Rows above the visible grid never collide: a bounding box may
    /// overhang the top edge (after an early rotation the matrix can extend
    /// upward while its offset row stays 0), so only the side walls, the
    /// floor, and in-grid occupancy reject a position.
    pub fn collides(&self, shape: &ShapeMatrix, offset_x: i8, offset_y: i8) -> bool {
        for r in 0..shape.height() {
            for c in 0..shape.width() {
                if !shape.filled(r, c) {
                    continue;
                }

                let x = offset_x + c as i8;
                let y = offset_y + r as i8;

                if x < 0 || x >= PLAYFIELD_COLS as i8 || y >= PLAYFIELD_ROWS as i8 {
                    return true;
                }
                if y >= 0 && self.is_occupied(x, y) {
                    return true;
                }
            }
        }
        false
    }

    /// Write `color` into every cell covered by the shape at the offset.
    ///
    /// Callers guarantee the position was vetted with `collides`; writes go
    /// through the bounds-guarded setter, so cells overhanging the top edge
    /// are dropped rather than wrapped.
    pub fn merge(&mut self, shape: &ShapeMatrix, offset_x: i8, offset_y: i8, color: Rgb) {
        for r in 0..shape.height() {
            for c in 0..shape.width() {
                if shape.filled(r, c) {
                    self.set(offset_x + c as i8, offset_y + r as i8, Some(color));
                }
            }
        }
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= PLAYFIELD_ROWS as usize {
            return false;
        }
        let start = y * PLAYFIELD_COLS as usize;
        let end = start + PLAYFIELD_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and prepend that many fresh empty rows.
    ///
    /// Pure: returns the compacted grid and the number of rows cleared,
    /// leaving `self` untouched. Surviving rows keep their relative order.
    pub fn clear_full_rows(&self) -> (Self, u32) {
        let mut out = Self::new();
        let mut cleared: u32 = 0;

        let width = PLAYFIELD_COLS as usize;
        let mut write_y = PLAYFIELD_ROWS as usize;

        // Scan from bottom to top, packing surviving rows downward. Rows
        // above the write cursor stay empty from `new`.
        for read_y in (0..PLAYFIELD_ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }

            write_y -= 1;
            let src = read_y * width;
            let dst = write_y * width;
            out.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }

        (out, cleared)
    }

    /// Copy the grid into a 2D snapshot buffer.
    pub fn write_cells(
        &self,
        out: &mut [[Cell; PLAYFIELD_COLS as usize]; PLAYFIELD_ROWS as usize],
    ) {
        let width = PLAYFIELD_COLS as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
