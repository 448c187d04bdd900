//! Piece module - the falling (or queued) shape instance.

use crate::core::catalog::{self, CatalogEntry, ShapeMatrix};
use crate::core::rng::SimpleRng;
use crate::types::{Rgb, PLAYFIELD_COLS};

/// A shape instance with a color and a grid offset.
///
/// `x`/`y` locate the shape's bounding-box origin in playfield cells. The
/// matrix is replaced wholesale on rotation; the struct is never resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: ShapeMatrix,
    pub color: Rgb,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Instantiate a catalog entry at its spawn position: horizontally
    /// centered (integer division) on the top row.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let x = (PLAYFIELD_COLS / 2) as i8 - (entry.shape.width() / 2) as i8;
        Self {
            shape: entry.shape,
            color: entry.color,
            x,
            y: 0,
        }
    }

    /// Spawn a piece with a random catalog entry.
    ///
    /// No collision check happens here; the controller tests the spawn
    /// position against the grid after every promotion.
    pub fn spawn(rng: &mut SimpleRng) -> Self {
        Self::from_entry(catalog::random_entry(rng))
    }

    /// Replace the shape with its clockwise quarter turn.
    ///
    /// Callers confirm via the playfield that `shape.rotated()` fits before
    /// committing.
    pub fn rotate_in_place(&mut self) {
        self.shape = self.shape.rotated();
    }

    /// Move the piece by (dx, dy) cells, unconditionally.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }
}
