//! Input layer: terminal key events in, game actions out.
//!
//! The controller consumes a drained sequence of discrete actions per
//! frame; draining happens here so the run loop never blocks past its
//! frame budget.

pub mod map;

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::types::GameAction;

/// Upper bound on actions applied in a single frame.
pub const MAX_ACTIONS_PER_FRAME: usize = 16;

/// Drained actions for one frame, without allocation.
pub type FrameActions = ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME>;

/// Drain all pending terminal events into game actions.
///
/// The first poll waits up to `timeout` (this is the frame-pacing sleep);
/// subsequent polls are non-blocking so the queue is emptied every frame.
/// Events past the per-frame bound are read and dropped.
pub fn drain_actions(timeout: Duration) -> Result<FrameActions> {
    let mut actions = FrameActions::new();
    let mut wait = timeout;

    while event::poll(wait)? {
        wait = Duration::ZERO;

        if let Event::Key(key) = event::read()? {
            if let Some(action) = map::map_key_event(key) {
                let _ = actions.try_push(action);
            }
        }
    }

    Ok(actions)
}
