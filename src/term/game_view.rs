//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, PLAYFIELD_COLS, PLAYFIELD_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Playfield cell width in terminal columns.
    cell_w: u16,
    /// Playfield cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into a fresh framebuffer.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let field_px_w = (PLAYFIELD_COLS as u16) * self.cell_w;
        let field_px_h = (PLAYFIELD_ROWS as u16) * self.cell_h;
        let frame_w = field_px_w + 2;
        let frame_h = field_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle::new(Rgb::new(80, 80, 90), FIELD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        // Background for the play area, then the border around it.
        fb.fill_rect(start_x + 1, start_y + 1, field_px_w, field_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells in their stored colors.
        for (y, row) in snapshot.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => {
                        self.draw_field_cell(&mut fb, start_x, start_y, x as u16, y as u16, *color)
                    }
                    None => self.draw_empty_cell(&mut fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Falling piece (absent once the session is over).
        if let Some(piece) = &snapshot.current {
            for r in 0..piece.shape.height() {
                for c in 0..piece.shape.width() {
                    if !piece.shape.filled(r, c) {
                        continue;
                    }
                    let x = piece.x + c as i8;
                    let y = piece.y + r as i8;
                    if x >= 0 && x < PLAYFIELD_COLS as i8 && y >= 0 && y < PLAYFIELD_ROWS as i8 {
                        self.draw_field_cell(
                            &mut fb,
                            start_x,
                            start_y,
                            x as u16,
                            y as u16,
                            piece.color,
                        );
                    }
                }
            }
        }

        // Side panel (next preview and lives).
        self.draw_side_panel(&mut fb, snapshot, viewport, start_x, start_y, frame_w);

        if snapshot.game_over {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), FIELD_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_field_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: Rgb,
    ) {
        let style = CellStyle::new(color, FIELD_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);

        // The preview draws the shape matrix itself, in its color.
        let next = &snapshot.next;
        let preview = CellStyle::new(next.color, Rgb::new(0, 0, 0)).bold();
        for r in 0..next.shape.height() {
            for c in 0..next.shape.width() {
                if next.shape.filled(r, c) {
                    fb.fill_rect(
                        panel_x + (c as u16) * self.cell_w,
                        y + (r as u16) * self.cell_h,
                        self.cell_w,
                        self.cell_h,
                        '█',
                        preview,
                    );
                }
            }
        }
        y = y.saturating_add((next.shape.height() as u16) * self.cell_h + 1);

        fb.put_str(panel_x, y, "LIVES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snapshot.lives), value);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 80, 80), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
