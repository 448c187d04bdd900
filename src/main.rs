//! Terminal falling-block game runner.
//!
//! Frame loop: render the current snapshot, drain input (the poll timeout
//! paces frames at ~60 fps), then advance the engine by the measured
//! wall-clock delta so gravity speed stays independent of frame rate.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input;
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{GAME_OVER_HOLD_MS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut state = GameState::new(clock_seed());
    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();

    let frame_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    while state.running() {
        state.snapshot_into(&mut snapshot);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 30));
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Terminal state: hold the GAME OVER frame, then leave.
        if snapshot.game_over {
            std::thread::sleep(Duration::from_millis(GAME_OVER_HOLD_MS));
            return Ok(());
        }

        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);
        for action in input::drain_actions(timeout)? {
            state.apply_action(action);
        }

        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        state.tick(elapsed.as_millis() as u32);
    }

    Ok(())
}

/// Seed a session from the wall clock; every run gets a fresh sequence.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
