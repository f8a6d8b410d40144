//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or terminal I/O.

pub mod board;
pub mod game;
pub mod rng;
pub mod shapes;

// Re-export commonly used types
pub use board::Board;
pub use game::{Game, Piece};
pub use rng::SimpleRng;
pub use shapes::{Catalog, Shape};
