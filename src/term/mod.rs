//! Terminal rendering module.
//!
//! The game view projects core state into a plain framebuffer of styled
//! characters; the renderer owns the terminal lifecycle (raw mode, alternate
//! screen) and flushes a full frame every tick. Keeping the projection pure
//! lets the whole board layout be unit-tested without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
