//! Move validation
//!
//! Checks run in a fixed order and the first failure is reported:
//!
//! 1. both files interior (B-S)
//! 2. both ranks interior (2-19)
//! 3. not a no-op
//! 4. a stone in the footprint slot facing the destination
//! 5. game still in progress
//! 6. last-ring guard, when the mover holds a single ring
//! 7. no opposing stone in the footprint
//! 8. straight line (orthogonal or exact diagonal)
//! 9. at most 3 cells when the center is empty
//! 10. clear path
//!
//! Nothing here mutates the board; the guard simulates on a copy.

use thiserror::Error;

use crate::board::{Board, Pos, Stone, INTERIOR_MAX, INTERIOR_MIN};
use crate::game::GameState;

use super::footprint::{
    direction_towards, footprint_indices, sample_footprint, Direction, SAMPLE_CENTER,
};
use super::ring::{rescan, Rings};
use super::transplant::apply_move;

/// Range of a piece without a center stone
pub const MAX_UNCENTERED_DISTANCE: u8 = 3;

/// Why a move was refused. Rejections never change the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid coordinate {0:?}")]
    InvalidCoordinate(String),
    #[error("{0} is outside the playable area")]
    OutOfBounds(Pos),
    #[error("piece must move to a different cell")]
    NoOp,
    #[error("no stone in that direction")]
    NoStoneInDirection,
    #[error("game is over: {0}")]
    GameOver(GameState),
    #[error("move would break or expose the last ring")]
    LastRing,
    #[error("piece contains an opponent stone")]
    ForeignStone,
    #[error("move is not along a row, column or diagonal")]
    NotInLine,
    #[error("piece without a center stone cannot move {distance} cells")]
    TooFar { distance: u8 },
    #[error("path is blocked")]
    PathBlocked,
}

/// Validate moving the piece centered on `current` to `new` for `turn`.
pub fn validate(
    board: &Board,
    current: Pos,
    new: Pos,
    turn: Stone,
    state: GameState,
    rings: &Rings,
) -> Result<(), MoveError> {
    let interior = INTERIOR_MIN..=INTERIOR_MAX;
    for pos in [current, new] {
        if !interior.contains(&pos.col) {
            return Err(MoveError::OutOfBounds(pos));
        }
    }
    for pos in [current, new] {
        if !interior.contains(&pos.row) {
            return Err(MoveError::OutOfBounds(pos));
        }
    }

    if current == new {
        return Err(MoveError::NoOp);
    }

    if direction_towards(board, current, new) == Stone::Empty {
        return Err(MoveError::NoStoneInDirection);
    }

    if state != GameState::InProgress {
        return Err(MoveError::GameOver(state));
    }

    if let [ring] = rings.of(turn) {
        last_ring_allows_move(board, current, new, *ring, turn)?;
    }

    let footprint = sample_footprint(board, current);
    if footprint.contains(&turn.opponent()) {
        return Err(MoveError::ForeignStone);
    }

    if !is_straight(current, new) {
        return Err(MoveError::NotInLine);
    }

    let distance = current.distance(new);
    if footprint[SAMPLE_CENTER] == Stone::Empty && distance > MAX_UNCENTERED_DISTANCE {
        return Err(MoveError::TooFar { distance });
    }

    if !path_clear(board, current, new) {
        return Err(MoveError::PathBlocked);
    }

    Ok(())
}

/// Horizontal, vertical or exact diagonal
#[inline]
pub fn is_straight(current: Pos, new: Pos) -> bool {
    let dr = (new.row as i32 - current.row as i32).abs();
    let dc = (new.col as i32 - current.col as i32).abs();
    dr == 0 || dc == 0 || dr == dc
}

/// Guard for a mover holding exactly one ring, centered on `ring`.
///
/// - The ring piece itself may not land on file B/S or rank 2/19.
/// - Any other piece may not drop an empty cell onto one of the ring's
///   eight stones.
/// - The move may not leave the mover without a ring.
pub fn last_ring_allows_move(
    board: &Board,
    current: Pos,
    new: Pos,
    ring: Pos,
    turn: Stone,
) -> Result<(), MoveError> {
    if current == ring {
        let edge = [INTERIOR_MIN, INTERIOR_MAX];
        if edge.contains(&new.col) || edge.contains(&new.row) {
            return Err(MoveError::LastRing);
        }
    } else {
        let ring_cells = footprint_indices(ring);
        let source = footprint_indices(current);
        let dest = footprint_indices(new);
        for (offset, cell) in dest.iter().enumerate() {
            let sustains_ring = *cell != ring && ring_cells.contains(cell);
            if sustains_ring && board.is_empty(source[offset]) {
                return Err(MoveError::LastRing);
            }
        }
    }

    let mut scratch = board.clone();
    apply_move(&mut scratch, current, new);
    scratch.clear_border();
    if rescan(&scratch).count(turn) == 0 {
        return Err(MoveError::LastRing);
    }

    Ok(())
}

/// Leading-edge offsets, relative to a center, of a footprint moving in `dir`
fn leading_edge(dir: Direction) -> Vec<(i32, i32)> {
    let (dr, dc) = dir.delta();
    if dir.is_diagonal() {
        vec![(dr, -dc), (dr, 0), (dr, dc), (0, dc), (-dr, dc)]
    } else if dr != 0 {
        vec![(dr, -1), (dr, 0), (dr, 1)]
    } else {
        vec![(-1, dc), (0, dc), (1, dc)]
    }
}

/// True when no stone lies in the cells the footprint sweeps over between
/// `current` and `new`.
///
/// At each intermediate center the footprint's leading edge is sampled:
/// three cells for orthogonal moves, five for diagonal ones. The destination
/// footprint itself is not checked; stones there are captured.
pub fn path_clear(board: &Board, current: Pos, new: Pos) -> bool {
    if !is_straight(current, new) {
        return false;
    }
    let Some(dir) = Direction::between(current, new) else {
        return true;
    };
    let (dr, dc) = dir.delta();
    let edge = leading_edge(dir);
    let steps = current.distance(new) as i32;

    for k in 1..steps {
        for &(er, ec) in &edge {
            let cell = current.offset(dr * k + er, dc * k + ec);
            // Intermediate footprints of interior centers stay on the grid
            if cell.is_some_and(|pos| !board.is_empty(pos)) {
                return false;
            }
        }
    }
    true
}
