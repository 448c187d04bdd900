//! Shape library - the fixed catalog of falling-piece geometries.
//!
//! Each catalog entry pairs a binary shape matrix with a color. The catalog
//! deliberately carries 8 entries: the classic seven plus a flipped-T
//! variant, matching the historical shape table this game inherits.

use crate::core::rng::SimpleRng;
use crate::types::Rgb;

/// Largest shape extent on either axis (the 1x4 bar rotated).
pub const MAX_SHAPE_DIM: usize = 4;

const MAX_SHAPE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

/// A binary occupancy matrix with explicit dimensions.
///
/// Cells are stored row-major in a fixed flat array (row * width + col),
/// so a matrix value is `Copy` and rotation never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMatrix {
    width: u8,
    height: u8,
    cells: [u8; MAX_SHAPE_CELLS],
}

impl ShapeMatrix {
    /// Build a matrix from row-major cell flags.
    pub const fn from_rows(width: u8, height: u8, rows: &[u8]) -> Self {
        assert!(width as usize <= MAX_SHAPE_DIM);
        assert!(height as usize <= MAX_SHAPE_DIM);
        assert!(rows.len() == width as usize * height as usize);

        let mut cells = [0u8; MAX_SHAPE_CELLS];
        let mut i = 0;
        while i < rows.len() {
            cells[i] = rows[i];
            i += 1;
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns in the bounding box.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows in the bounding box.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (row, col) is occupied.
    #[inline(always)]
    pub fn filled(&self, row: u8, col: u8) -> bool {
        self.cells[(row as usize) * (self.width as usize) + (col as usize)] != 0
    }

    /// Quarter turn clockwise: returns a new matrix with dimensions swapped.
    ///
    /// Pure, so a rotation can be computed speculatively, collision-checked,
    /// and discarded without touching the source matrix.
    pub fn rotated(&self) -> Self {
        let mut out = Self {
            width: self.height,
            height: self.width,
            cells: [0u8; MAX_SHAPE_CELLS],
        };

        // Transpose of the row-reversed matrix: (r, c) lands at
        // (c, height - 1 - r).
        for r in 0..self.height {
            for c in 0..self.width {
                if self.filled(r, c) {
                    let idx = (c as usize) * (out.width as usize)
                        + (self.height - 1 - r) as usize;
                    out.cells[idx] = 1;
                }
            }
        }
        out
    }
}

/// One catalog entry: a shape in its spawn orientation plus its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub shape: ShapeMatrix,
    pub color: Rgb,
}

/// The full shape catalog, in source order.
pub static CATALOG: [CatalogEntry; 8] = [
    // Bar
    CatalogEntry {
        shape: ShapeMatrix::from_rows(4, 1, &[1, 1, 1, 1]),
        color: Rgb::new(0, 255, 255),
    },
    // Square
    CatalogEntry {
        shape: ShapeMatrix::from_rows(2, 2, &[1, 1, 1, 1]),
        color: Rgb::new(255, 255, 0),
    },
    // T
    CatalogEntry {
        shape: ShapeMatrix::from_rows(3, 2, &[0, 1, 0, 1, 1, 1]),
        color: Rgb::new(128, 0, 128),
    },
    // J
    CatalogEntry {
        shape: ShapeMatrix::from_rows(3, 2, &[1, 0, 0, 1, 1, 1]),
        color: Rgb::new(0, 255, 0),
    },
    // L
    CatalogEntry {
        shape: ShapeMatrix::from_rows(3, 2, &[0, 0, 1, 1, 1, 1]),
        color: Rgb::new(255, 0, 0),
    },
    // S
    CatalogEntry {
        shape: ShapeMatrix::from_rows(3, 2, &[1, 1, 0, 0, 1, 1]),
        color: Rgb::new(255, 165, 0),
    },
    // Z
    CatalogEntry {
        shape: ShapeMatrix::from_rows(3, 2, &[0, 1, 1, 1, 1, 0]),
        color: Rgb::new(0, 0, 255),
    },
    // Flipped T (kept as its own entry, not deduplicated)
    CatalogEntry {
        shape: ShapeMatrix::from_rows(3, 2, &[1, 1, 1, 0, 1, 0]),
        color: Rgb::new(255, 105, 180),
    },
];

/// Draw one catalog entry uniformly at random, with replacement.
pub fn random_entry(rng: &mut SimpleRng) -> &'static CatalogEntry {
    let idx = rng.next_range(CATALOG.len() as u32) as usize;
    &CATALOG[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_entries() {
        assert_eq!(CATALOG.len(), 8);
    }

    #[test]
    fn every_entry_has_at_least_one_cell_per_row_and_col() {
        for (i, entry) in CATALOG.iter().enumerate() {
            let shape = entry.shape;
            for r in 0..shape.height() {
                let any = (0..shape.width()).any(|c| shape.filled(r, c));
                assert!(any, "entry {} has an empty row {}", i, r);
            }
            for c in 0..shape.width() {
                let any = (0..shape.height()).any(|r| shape.filled(r, c));
                assert!(any, "entry {} has an empty column {}", i, c);
            }
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let bar = CATALOG[0].shape;
        assert_eq!((bar.width(), bar.height()), (4, 1));

        let vertical = bar.rotated();
        assert_eq!((vertical.width(), vertical.height()), (1, 4));
        for r in 0..4 {
            assert!(vertical.filled(r, 0));
        }
    }

    #[test]
    fn rotation_maps_t_shape_clockwise() {
        // [[0,1,0],
        //  [1,1,1]]  rotated clockwise is
        // [[1,0],
        //  [1,1],
        //  [1,0]]
        let t = CATALOG[2].shape;
        let rotated = t.rotated();
        assert_eq!((rotated.width(), rotated.height()), (2, 3));

        let expected = [[1, 0], [1, 1], [1, 0]];
        for r in 0..3u8 {
            for c in 0..2u8 {
                assert_eq!(
                    rotated.filled(r, c),
                    expected[r as usize][c as usize] != 0,
                    "mismatch at ({}, {})",
                    r,
                    c
                );
            }
        }
    }

    #[test]
    fn four_rotations_round_trip() {
        for (i, entry) in CATALOG.iter().enumerate() {
            let rotated4 = entry.shape.rotated().rotated().rotated().rotated();
            assert_eq!(rotated4, entry.shape, "entry {} did not round-trip", i);
        }
    }

    #[test]
    fn random_entry_is_deterministic_per_seed() {
        let mut a = SimpleRng::new(99);
        let mut b = SimpleRng::new(99);
        for _ in 0..32 {
            assert_eq!(
                random_entry(&mut a) as *const _,
                random_entry(&mut b) as *const _
            );
        }
    }

    #[test]
    fn random_entry_covers_the_catalog() {
        let mut rng = SimpleRng::new(1);
        let mut seen = [false; CATALOG.len()];
        for _ in 0..512 {
            let entry = random_entry(&mut rng);
            let idx = CATALOG
                .iter()
                .position(|e| std::ptr::eq(e, entry))
                .unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "draws missed an entry: {:?}", seen);
    }
}
