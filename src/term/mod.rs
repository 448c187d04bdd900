//! Terminal presentation layer.
//!
//! Renders engine snapshots into a simple styled-character framebuffer and
//! flushes it to the terminal. The engine core never sees any of this; the
//! view consumes only `core::snapshot::GameSnapshot`.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
