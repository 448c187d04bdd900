//! Core module - pure game logic with no external dependencies.
//!
//! Everything here runs headless: the shape catalog, the falling piece,
//! the playfield, the controller, and the snapshot handed to rendering.
//! No UI, terminal, or I/O types leak in.

pub mod catalog;
pub mod game_state;
pub mod piece;
pub mod playfield;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use catalog::{CatalogEntry, ShapeMatrix, CATALOG};
pub use game_state::GameState;
pub use piece::Piece;
pub use playfield::Playfield;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PieceSnapshot, PreviewSnapshot};
