//! Input module - key polling for terminal environments
//!
//! One call waits up to the tick duration for a keypress. A key arriving
//! inside the window is consumed immediately (short-circuiting the wait);
//! otherwise the caller gets [`KeyEvent::None`] and runs the gravity step.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::types::KeyEvent;

/// Block for at most `timeout` waiting for a key, returning the decoded
/// event. Repeat and release events are swallowed so a single press is never
/// observed twice; unmapped keys end the wait with [`KeyEvent::None`].
pub fn wait_for_key(timeout: Duration) -> Result<KeyEvent> {
    if !event::poll(timeout)? {
        return Ok(KeyEvent::None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(
            key.code,
            key.modifiers.contains(KeyModifiers::CONTROL),
        )),
        _ => Ok(KeyEvent::None),
    }
}

fn map_key(code: KeyCode, ctrl: bool) -> KeyEvent {
    match code {
        KeyCode::Char('c') if ctrl => KeyEvent::Quit,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => KeyEvent::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => KeyEvent::Right,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => KeyEvent::Down,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => KeyEvent::Rotate,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyEvent::Quit,
        _ => KeyEvent::None,
    }
}
