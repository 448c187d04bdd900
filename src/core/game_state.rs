//! Game state module - the controller tying the core together.
//!
//! Owns the session state (playfield, falling piece, lookahead piece,
//! lives, timers, flags) and sequences input application, gravity, locking,
//! row clearing, and the lockout/terminal transitions. All collision gating
//! happens here; `Piece` mutations are unchecked by design.

use crate::core::piece::Piece;
use crate::core::playfield::Playfield;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::{GameSnapshot, PieceSnapshot, PreviewSnapshot};
use crate::types::{GameAction, FALL_INTERVAL_MS, START_LIVES};

/// Complete session state.
///
/// Invariant: `next` is always generated one piece ahead of `current`, so
/// the lookahead display never shows a stale piece.
#[derive(Debug, Clone)]
pub struct GameState {
    playfield: Playfield,
    current: Piece,
    next: Piece,
    lives: u8,
    fall_timer_ms: u32,
    running: bool,
    game_over: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = Piece::spawn(&mut rng);
        let next = Piece::spawn(&mut rng);

        Self {
            playfield: Playfield::new(),
            current,
            next,
            lives: START_LIVES,
            fall_timer_ms: 0,
            running: true,
            game_over: false,
            rng,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    /// Fill a snapshot in place for the presentation layer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.playfield.write_cells(&mut out.cells);
        out.current = if self.game_over {
            None
        } else {
            Some(PieceSnapshot::from(&self.current))
        };
        out.next = PreviewSnapshot {
            shape: self.next.shape,
            color: self.next.color,
        };
        out.lives = self.lives;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply one player action.
    ///
    /// Returns whether the action changed anything. Rejected moves are
    /// silent; after the terminal transition only Quit is honored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Quit => {
                self.running = false;
                true
            }
            _ if self.game_over => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Translate the falling piece if the target cells are free.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self
            .playfield
            .collides(&self.current.shape, self.current.x + dx, self.current.y + dy)
        {
            return false;
        }
        self.current.translate(dx, dy);
        true
    }

    /// Rotate the falling piece if the rotated matrix fits at the current
    /// offset. The speculative rotation is discarded on collision.
    fn try_rotate(&mut self) -> bool {
        let rotated = self.current.shape.rotated();
        if self
            .playfield
            .collides(&rotated, self.current.x, self.current.y)
        {
            return false;
        }
        self.current.rotate_in_place();
        true
    }

    /// Advance the fall accumulator by the frame delta and run gravity when
    /// it crosses the fall interval.
    ///
    /// Returns whether the piece descended or locked this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over || !self.running {
            return false;
        }

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms <= FALL_INTERVAL_MS {
            return false;
        }
        self.fall_timer_ms = 0;

        if self.try_move(0, 1) {
            return true;
        }

        self.lock_current();
        true
    }

    /// Lock the falling piece, compact rows, promote the lookahead piece,
    /// and handle lockout.
    fn lock_current(&mut self) {
        self.playfield.merge(
            &self.current.shape,
            self.current.x,
            self.current.y,
            self.current.color,
        );

        let (compacted, _cleared) = self.playfield.clear_full_rows();
        self.playfield = compacted;

        self.current = std::mem::replace(&mut self.next, Piece::spawn(&mut self.rng));

        // Lockout: the promoted piece already overlaps locked cells at its
        // spawn position. Costs a life; the session ends when none remain.
        if self
            .playfield
            .collides(&self.current.shape, self.current.x, self.current.y)
        {
            self.lives = self.lives.saturating_sub(1);
            if self.lives > 0 {
                self.current = Piece::spawn(&mut self.rng);
            } else {
                self.game_over = true;
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
