//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, ShapeMatrix};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Message shown once the run is lost
pub const LOST_TEXT: &str = "You Lost!";

const PREVIEW_LABEL: &str = "Next Shape";

const WHITE: Rgb = Rgb::new(255, 255, 255);
const BORDER: Rgb = Rgb::new(255, 0, 0);
const GRID_LINE: Rgb = Rgb::new(90, 90, 100);

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

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Outer size of the bordered board, in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Top-left corner of the board frame inside `viewport`
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        // Locked cells, grid dots for empty ones.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_block(fb, start_x, start_y, x as i16, y as i16, *kind),
                    None => self.fill_cell_rect(
                        fb,
                        start_x,
                        start_y,
                        x as u16,
                        y as u16,
                        '·',
                        CellStyle::fg(GRID_LINE),
                    ),
                }
            }
        }

        // Falling piece overlay.
        if let Some(current) = snap.current {
            for (dx, dy) in current.shape.minos() {
                let x = (current.x + dx) as i16;
                let y = (current.y + dy) as i16;
                self.draw_block(fb, start_x, start_y, x, y, current.kind);
            }
        }

        // Score goes first so the border always wins on cramped viewports.
        self.draw_score(fb, viewport, snap.score, start_x, start_y);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, CellStyle::fg(BORDER).bold());

        self.draw_next(fb, viewport, snap.next.kind, &snap.next.shape, start_x, start_y);

        if snap.lost {
            self.draw_lost(fb, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┏', style);
        fb.put_char(x + w - 1, y, '┓', style);
        fb.put_char(x, y + h - 1, '┗', style);
        fb.put_char(x + w - 1, y + h - 1, '┛', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '━', style);
            fb.put_char(x + dx, y + h - 1, '━', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '┃', style);
            fb.put_char(x + w - 1, y + dy, '┃', style);
        }
    }

    /// Draw one board cell; cells outside the board are skipped.
    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i16, y: i16, kind: PieceKind) {
        if x < 0 || x >= BOARD_WIDTH as i16 || y < 0 || y >= BOARD_HEIGHT as i16 {
            return;
        }
        let style = CellStyle::fg(kind.color()).bold();
        self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, '█', style);
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

    /// Score label: top of the side panel, or the screen corner when the
    /// panel does not fit.
    fn draw_score(&self, fb: &mut FrameBuffer, viewport: Viewport, score: u32, start_x: u16, start_y: u16) {
        let text = format!("Score: {score}");
        let panel_x = self.panel_x(start_x);
        if panel_x.saturating_add(text.len() as u16) <= viewport.width {
            fb.put_str(panel_x, start_y + 1, &text, CellStyle::fg(WHITE));
        } else {
            fb.put_str(0, 0, &text, CellStyle::fg(WHITE));
        }
    }

    fn panel_x(&self, start_x: u16) -> u16 {
        let (frame_w, _) = self.frame_size();
        start_x.saturating_add(frame_w).saturating_add(4)
    }

    fn draw_next(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        kind: PieceKind,
        shape: &ShapeMatrix,
        start_x: u16,
        start_y: u16,
    ) {
        let panel_x = self.panel_x(start_x);
        if panel_x.saturating_add(PREVIEW_LABEL.len() as u16) > viewport.width {
            return;
        }

        // Label sits one row above the preview, which starts a few rows above mid-board.
        let preview_y = start_y + 1 + (BOARD_HEIGHT as u16 * self.cell_h) / 2 - 3 * self.cell_h;
        fb.put_str(panel_x, preview_y - 1 - self.cell_h, PREVIEW_LABEL, CellStyle::fg(WHITE).bold());

        let style = CellStyle::fg(kind.color()).bold();
        for (dx, dy) in shape.minos() {
            let px = panel_x + dx as u16 * self.cell_w;
            let py = preview_y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_lost(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let text_w = LOST_TEXT.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        let y = viewport.height / 2;
        fb.put_str(x, y, LOST_TEXT, CellStyle::fg(WHITE).bold());
    }
}
