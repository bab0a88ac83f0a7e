//! Gess rules engine
//!
//! Gess is played on a 20x20 grid with Go stones, but the stones are moved
//! as 3x3 "pieces" the way Chess pieces are:
//! - A piece is any 3x3 footprint holding friendly stones and no enemy stone
//! - Stones on the footprint's rim give the directions it may move
//! - A center stone lifts the 3-cell range limit
//! - Moving overwrites whatever lies under the destination footprint
//! - Stones pushed onto the outer border are removed
//! - A ring (empty cell surrounded by 8 friendly stones) is a life;
//!   a player with no ring has lost
//!
//! # Architecture
//!
//! - [`board`]: 20x20 board with bitboards, notation, starting layout
//! - [`rules`]: footprint geometry, validation, transplant, ring scan
//! - [`game`]: turn/outcome state machine and the public move API
//! - [`ui`]: egui front-end used by the `gess` binary
//!
//! # Quick Start
//!
//! ```
//! use gess::{Game, GameState, MoveError, Stone};
//!
//! let mut game = Game::new();
//!
//! // Black advances the C3 piece three ranks
//! assert_eq!(game.make_move("C3", "C6"), Ok(GameState::InProgress));
//!
//! // Rejected moves report why and change nothing
//! assert_eq!(game.make_move("C18", "C18"), Err(MoveError::NoOp));
//! assert_eq!(game.turn(), Stone::White);
//!
//! println!("{}", game.board());
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use game::{advance, evaluate, Game, GameState};
pub use rules::{MoveError, Rings};
