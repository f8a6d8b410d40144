//! Game module - collision/placement rules and the per-tick state machine
//!
//! `Game` owns the board, the active piece, and the RNG; nothing else mutates
//! them. One call to [`Game::tick`] applies exactly one action (a consumed
//! key, or the gravity step on timeout) and then performs the lock check.

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::core::shapes::{Catalog, Shape};
use crate::types::{GameAction, BOARD_HEIGHT, BOARD_WIDTH};

/// The active falling piece: a freely rotated shape plus its top-left
/// board-space anchor. `y` may be negative while the piece hangs above the
/// visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Spawn anchor for a shape: horizontally centered, top row.
    pub fn spawned(shape: Shape) -> Self {
        let x = (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8;
        Self { shape, x, y: 0 }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    catalog: Catalog,
    rng: SimpleRng,
    active: Option<Piece>,
    started: bool,
    game_over: bool,
}

impl Game {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            catalog: Catalog::new(),
            rng: SimpleRng::new(seed),
            active: None,
            started: false,
            game_over: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Whether every filled cell of `shape`, anchored at (x, y), lands on a
    /// legal position: inside the side walls, above the floor, and not over
    /// an occupied cell. Cells with a negative board row are allowed so a
    /// fresh piece can descend into view from above the top edge.
    pub fn can_place(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.filled_cells().iter().all(|&(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return false;
            }
            py < 0 || !self.board.is_occupied(px, py)
        })
    }

    /// Write every filled cell of `shape` into the board. The caller must
    /// have confirmed `can_place` for this exact position; no re-check here.
    /// Cells still above the top edge are not stored.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8) {
        debug_assert!(
            self.can_place(shape, x, y),
            "merge at unchecked position ({x}, {y})"
        );
        for &(dx, dy) in shape.filled_cells().iter() {
            let py = y + dy;
            if py >= 0 {
                self.board.set(x + dx, py, shape.marker());
            }
        }
    }

    /// Draw a fresh template and place it at the spawn anchor. If the board
    /// cannot accept it, the game is over (the sole loss condition).
    pub fn spawn(&mut self) -> bool {
        let piece = Piece::spawned(self.catalog.pick(&mut self.rng));

        if !self.can_place(&piece.shape, piece.x, piece.y) {
            self.active = None;
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to shift the active piece; no-op if the target is illegal.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        if !self.can_place(&piece.shape, piece.x + dx, piece.y + dy) {
            return false;
        }

        self.active = Some(Piece {
            x: piece.x + dx,
            y: piece.y + dy,
            ..piece
        });
        true
    }

    /// Try to rotate the active piece clockwise at its current anchor.
    /// An illegal rotation is discarded wholesale; there are no wall kicks.
    pub fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        let rotated = piece.shape.rotated();
        if !self.can_place(&rotated, piece.x, piece.y) {
            return false;
        }

        self.active = Some(Piece {
            shape: rotated,
            ..piece
        });
        true
    }

    /// Advance the state machine by one tick.
    ///
    /// Exactly one action applies: the consumed key's, or the gravity step
    /// when the tick timed out with no key. Afterwards the lock check runs:
    /// a piece that cannot fall further merges into the board, full rows are
    /// cleared, and the next piece spawns (or the game ends).
    pub fn tick(&mut self, action: Option<GameAction>) {
        if self.game_over || self.active.is_none() {
            return;
        }

        match action {
            Some(GameAction::MoveLeft) => {
                self.try_move(-1, 0);
            }
            Some(GameAction::MoveRight) => {
                self.try_move(1, 0);
            }
            Some(GameAction::Rotate) => {
                self.try_rotate();
            }
            // A timed-out tick is a gravity step: one soft drop if legal.
            Some(GameAction::SoftDrop) | None => {
                self.try_move(0, 1);
            }
        }

        let Some(piece) = self.active else {
            return;
        };
        if !self.can_place(&piece.shape, piece.x, piece.y + 1) {
            self.lock(piece);
        }
    }

    fn lock(&mut self, piece: Piece) {
        self.merge(&piece.shape, piece.x, piece.y);
        self.active = None;
        // Count is exposed for tests on Board; gameplay keeps no score.
        self.board.clear_full_rows();
        self.spawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shapes::Shape;
    use crate::types::MARKER;

    #[test]
    fn test_spawn_centers_piece() {
        let square = Shape::from_pattern(&["■■", "■■"]);
        let piece = Piece::spawned(square);
        assert_eq!(piece.x, 4);
        assert_eq!(piece.y, 0);

        let line = Shape::from_pattern(&["■■■■"]);
        let piece = Piece::spawned(line);
        assert_eq!(piece.x, 3);
    }

    #[test]
    fn test_can_place_allows_negative_y() {
        let game = Game::new(1);
        let square = Shape::from_pattern(&["■■", "■■"]);
        assert!(game.can_place(&square, 4, -1));
    }

    #[test]
    fn test_lock_spawns_next_piece() {
        let mut game = Game::new(1);
        game.start();

        // Piece resting on the floor locks on the next tick.
        let piece = game.active().unwrap();
        let floor_y = BOARD_HEIGHT as i8 - piece.shape.rows() as i8;
        game.active = Some(Piece { y: floor_y, ..piece });
        game.tick(None);

        assert!(!game.game_over());
        let next = game.active().unwrap();
        assert_eq!(next.y, 0);
        // The old piece is on the board now.
        assert!(game
            .board()
            .cells()
            .iter()
            .any(|cell| *cell == Some(MARKER)));
    }
}
