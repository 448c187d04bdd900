//! Terminal falling-block puzzle game.
//!
//! The crate splits into a pure engine (`core`), a keyboard layer
//! (`input`), and a terminal presentation layer (`term`). The engine never
//! touches I/O; each frame the binary drains input into actions, advances
//! the engine by the measured frame delta, and renders a read-only
//! snapshot.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
