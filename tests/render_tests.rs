//! Render tests - board framing, cell glyphs, compositing, game-over line
//!
//! GameView is pure, so the full frame layout is asserted without a terminal.
//! With a 40x30 viewport the 22x22 board frame starts at (9, 4): board cell
//! (x, y) occupies framebuffer columns (10 + 2x, 11 + 2x) on row (5 + y).

use blockfall::core::Game;
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{BOARD_WIDTH, MARKER};

const VIEW: Viewport = Viewport {
    width: 40,
    height: 30,
};

fn ch(fb: &FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).map(|c| c.ch).unwrap_or('?')
}

#[test]
fn test_border_encloses_the_grid() {
    let game = Game::new(1);
    let fb = GameView.render(&game, VIEW);

    assert_eq!(ch(&fb, 9, 4), '┌');
    assert_eq!(ch(&fb, 30, 4), '┐');
    assert_eq!(ch(&fb, 9, 25), '└');
    assert_eq!(ch(&fb, 30, 25), '┘');
    assert_eq!(ch(&fb, 10, 4), '─');
    assert_eq!(ch(&fb, 9, 5), '│');
    assert_eq!(ch(&fb, 30, 24), '│');
}

#[test]
fn test_cells_render_two_columns_wide() {
    let mut game = Game::new(1);
    game.board_mut().set(0, 19, MARKER);

    let fb = GameView.render(&game, VIEW);

    // Filled cell: space + marker.
    assert_eq!(ch(&fb, 10, 24), ' ');
    assert_eq!(ch(&fb, 11, 24), MARKER);
    // Neighboring empty cell: two blanks.
    assert_eq!(ch(&fb, 12, 24), ' ');
    assert_eq!(ch(&fb, 13, 24), ' ');
}

#[test]
fn test_active_piece_composited_without_board_mutation() {
    let mut game = Game::new(1);
    game.start();
    let piece = game.active().expect("piece spawned");

    let fb = GameView.render(&game, VIEW);

    for &(dx, dy) in piece.shape.filled_cells().iter() {
        let bx = piece.x + dx;
        let by = piece.y + dy;
        let px = 10 + 2 * bx as u16;
        let py = 5 + by as u16;
        assert_eq!(ch(&fb, px + 1, py), MARKER, "piece cell at ({bx}, {by})");
        // The board itself stays untouched by rendering.
        assert!(game.board().is_empty(bx, by));
    }
}

#[test]
fn test_game_over_message_below_board() {
    let mut game = Game::new(1);
    for x in 0..BOARD_WIDTH as i8 {
        game.board_mut().set(x, 0, MARKER);
        game.board_mut().set(x, 1, MARKER);
    }
    game.start();
    assert!(game.game_over());

    let fb = GameView.render(&game, VIEW);

    // Final board renders with no floating piece.
    assert_eq!(ch(&fb, 11, 5), MARKER);

    let line: String = (15..24).map(|x| ch(&fb, x, 26)).collect();
    assert_eq!(line, "GAME OVER");
}

#[test]
fn test_no_game_over_message_mid_game() {
    let mut game = Game::new(1);
    game.start();

    let fb = GameView.render(&game, VIEW);
    let line: String = (15..24).map(|x| ch(&fb, x, 26)).collect();
    assert_eq!(line, "         ");
}
