//! Blockfall: a small terminal falling-block puzzle game.
//!
//! `core` holds the pure game logic (board, shapes, collision, tick state
//! machine) and has no I/O dependencies; `input` and `term` wrap crossterm
//! for key polling and fullscreen rendering.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
