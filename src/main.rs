//! Terminal falling-block game runner.
//!
//! Owns the terminal lifecycle and the tick loop: render, wait up to one
//! tick for a key, feed the (at most one) resulting action into the core.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use blockfall::core::Game;
use blockfall::input::wait_for_key;
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{KeyEvent, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(time_seed());
    game.start();

    let view = GameView;
    let tick = Duration::from_millis(TICK_MS as u64);

    while !game.game_over() {
        draw(term, &view, &game)?;

        let key = wait_for_key(tick)?;
        if key == KeyEvent::Quit {
            return Ok(());
        }
        game.tick(key.action());
    }

    // Final board plus the game-over line; any key ends the process.
    draw(term, &view, &game)?;
    loop {
        if wait_for_key(tick)? != KeyEvent::None {
            return Ok(());
        }
    }
}

fn draw(term: &mut TerminalRenderer, view: &GameView, game: &Game) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let fb = view.render(game, Viewport::new(w, h));
    term.draw(&fb)
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
