//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Length of one game-loop tick in milliseconds.
///
/// A keypress inside the tick window is consumed immediately and
/// short-circuits the remaining wait; otherwise the tick ends with a
/// gravity step.
pub const TICK_MS: u32 = 500;

/// Glyph used for every occupied cell.
pub const MARKER: char = '■';

/// The glyph an occupied cell is drawn with.
pub type Marker = char;

/// Cell on the board (None = empty, Some = filled with its marker)
pub type Cell = Option<Marker>;

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// A decoded input event: a mapped key, a quit request, or a tick timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEvent {
    Left,
    Right,
    Down,
    Rotate,
    Quit,
    #[default]
    None,
}

impl KeyEvent {
    /// Map the event to the game action it triggers, if any.
    pub fn action(self) -> Option<GameAction> {
        match self {
            KeyEvent::Left => Some(GameAction::MoveLeft),
            KeyEvent::Right => Some(GameAction::MoveRight),
            KeyEvent::Down => Some(GameAction::SoftDrop),
            KeyEvent::Rotate => Some(GameAction::Rotate),
            KeyEvent::Quit | KeyEvent::None => None,
        }
    }
}
