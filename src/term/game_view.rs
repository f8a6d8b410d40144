//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Every board cell is two terminal columns wide ("  " empty, " ■" filled)
//! to compensate for the glyph aspect ratio, with a box-drawing border around
//! the grid. The active piece is composited over the board cells without
//! mutating board state.

use crate::core::{Game, Piece};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Marker, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal columns per board cell.
const CELL_W: u16 = 2;

/// Message shown under the final board.
pub const GAME_OVER_TEXT: &str = "GAME OVER";

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

/// Projects game state into a framebuffer, one full frame per tick.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into a framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * CELL_W;
        let frame_w = board_px_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let block = CellStyle {
            fg: Rgb::new(80, 200, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        let active = game.active();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let px = start_x + 1 + (x as u16) * CELL_W;
                let py = start_y + 1 + y as u16;
                match composited_cell(game, active, x, y) {
                    Some(marker) => {
                        fb.put_char(px, py, ' ', block);
                        fb.put_char(px + 1, py, marker, block);
                    }
                    None => {
                        fb.put_char(px, py, ' ', border);
                        fb.put_char(px + 1, py, ' ', border);
                    }
                }
            }
        }

        if game.game_over() {
            let text_w = GAME_OVER_TEXT.chars().count() as u16;
            let tx = start_x + (frame_w.saturating_sub(text_w)) / 2;
            let ty = start_y + frame_h;
            let style = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            };
            fb.put_str(tx, ty, GAME_OVER_TEXT, style);
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
}

/// Board cell with the active piece overlaid, reading board state only.
fn composited_cell(game: &Game, active: Option<Piece>, x: i8, y: i8) -> Option<Marker> {
    if let Some(piece) = active {
        let col = x - piece.x;
        let row = y - piece.y;
        if (0..piece.shape.cols() as i8).contains(&col)
            && (0..piece.shape.rows() as i8).contains(&row)
            && piece.shape.filled(col as u8, row as u8)
        {
            return Some(piece.shape.marker());
        }
    }
    game.board().get(x, y).flatten()
}
