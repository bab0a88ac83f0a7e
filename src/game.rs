//! Game state machine
//!
//! [`Game`] owns the board and applies one move at a time:
//!
//! 1. validate (no mutation on failure)
//! 2. transplant the footprint
//! 3. clear the border
//! 4. rescan rings
//! 5. evaluate the outcome
//! 6. pass the turn
//!
//! # Example
//!
//! ```
//! use gess::{Game, GameState, Stone};
//!
//! let mut game = Game::new();
//! assert_eq!(game.make_move("C3", "C6"), Ok(GameState::InProgress));
//! assert_eq!(game.turn(), Stone::White);
//! assert!(game.make_move("C3", "C3").is_err());
//! ```

use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::rules::{apply_move, rescan, validate, MoveError, Rings};

/// Outcome of the game so far. Once decided it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    BlackWon,
    WhiteWon,
}

impl GameState {
    /// Win state for `stone` (`InProgress` for `Stone::Empty`)
    #[inline]
    pub fn won_by(stone: Stone) -> Self {
        match stone {
            Stone::Black => GameState::BlackWon,
            Stone::White => GameState::WhiteWon,
            Stone::Empty => GameState::InProgress,
        }
    }

    #[inline]
    pub fn winner(self) -> Option<Stone> {
        match self {
            GameState::InProgress => None,
            GameState::BlackWon => Some(Stone::Black),
            GameState::WhiteWon => Some(Stone::White),
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        self != GameState::InProgress
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameState::InProgress => "in progress",
            GameState::BlackWon => "Black won",
            GameState::WhiteWon => "White won",
        };
        f.write_str(text)
    }
}

/// Side to move after `turn`
#[inline]
pub fn advance(turn: Stone) -> Stone {
    turn.opponent()
}

/// Outcome after `mover` has moved, from the recounted rings.
///
/// A color with no rings has lost. If neither color has a ring the mover
/// wins, since its move took the opponent's last ring.
pub fn evaluate(rings: &Rings, mover: Stone) -> GameState {
    match (rings.count(Stone::Black), rings.count(Stone::White)) {
        (0, 0) => GameState::won_by(mover),
        (0, _) => GameState::WhiteWon,
        (_, 0) => GameState::BlackWon,
        _ => GameState::InProgress,
    }
}

/// A game of Gess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Stone,
    state: GameState,
    rings: Rings,
    history: Vec<(Pos, Pos)>,
}

impl Game {
    /// Standard opening, Black to move
    pub fn new() -> Self {
        Self::from_position(Board::starting(), Stone::Black)
    }

    /// Game from an arbitrary position with `turn` to move.
    ///
    /// Rings are scanned and the outcome evaluated as if the other side had
    /// just moved. The border is cleared first.
    pub fn from_position(mut board: Board, turn: Stone) -> Self {
        debug_assert!(turn.is_stone());
        board.clear_border();
        let rings = rescan(&board);
        let state = evaluate(&rings, turn.opponent());
        Self {
            board,
            turn,
            state,
            rings,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn rings(&self) -> &Rings {
        &self.rings
    }

    /// Accepted moves, oldest first
    #[inline]
    pub fn history(&self) -> &[(Pos, Pos)] {
        &self.history
    }

    /// Play a move given in "C3"-style notation
    pub fn make_move(&mut self, current: &str, new: &str) -> Result<GameState, MoveError> {
        let current: Pos = current.parse()?;
        let new: Pos = new.parse()?;
        self.play(current, new)
    }

    /// Would moving `current` to `new` be accepted right now
    pub fn check_move(&self, current: Pos, new: Pos) -> Result<(), MoveError> {
        validate(&self.board, current, new, self.turn, self.state, &self.rings)
    }

    /// Play a move for the side to move, returning the resulting state
    pub fn play(&mut self, current: Pos, new: Pos) -> Result<GameState, MoveError> {
        if let Err(err) = self.check_move(current, new) {
            debug!(%current, %new, turn = %self.turn, %err, "move rejected");
            return Err(err);
        }

        let mover = self.turn;
        apply_move(&mut self.board, current, new);
        self.board.clear_border();
        self.rings = rescan(&self.board);
        self.state = evaluate(&self.rings, mover);
        self.turn = advance(mover);
        self.history.push((current, new));

        info!(
            %current,
            %new,
            %mover,
            black_rings = self.rings.count(Stone::Black),
            white_rings = self.rings.count(Stone::White),
            "move played"
        );
        if let Some(winner) = self.state.winner() {
            info!(%winner, "game over");
        }
        Ok(self.state)
    }

    /// The side to move concedes. Does nothing once the game is decided.
    pub fn resign(&mut self) {
        if self.state.is_over() {
            return;
        }
        self.state = GameState::won_by(self.turn.opponent());
        info!(resigned = %self.turn, state = %self.state, "resignation");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
