//! Session state for the Gess GUI
//!
//! A move is entered with two clicks: the piece center, then the target
//! center. Rejections are shown as a message and leave the game untouched.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::{Game, Pos, Stone};

/// Clock for the move in progress
pub struct MoveTimer {
    pub start_time: Option<Instant>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Hotseat session: the game plus what the GUI needs around it
pub struct Session {
    pub game: Game,
    pub selected: Option<Pos>,
    pub message: Option<String>,
    pub move_timer: MoveTimer,
    resigned: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            selected: None,
            message: None,
            move_timer: MoveTimer::default(),
            resigned: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Most recent accepted move
    pub fn last_move(&self) -> Option<(Pos, Pos)> {
        self.game.history().last().copied()
    }

    /// Handle a click on the board
    pub fn click(&mut self, pos: Pos) {
        if self.game.state().is_over() {
            self.message = Some(format!("Game over: {}", self.game.state()));
            return;
        }

        match self.selected {
            None => {
                if pos.is_interior() {
                    self.selected = Some(pos);
                    self.message = None;
                } else {
                    self.message = Some(format!("{} is on the border", pos));
                }
            }
            Some(from) if from == pos => self.selected = None,
            Some(from) => {
                self.selected = None;
                self.try_move(from, pos);
            }
        }
    }

    /// Play `from` to `to` for the side to move
    pub fn try_move(&mut self, from: Pos, to: Pos) {
        match self.game.play(from, to) {
            Ok(state) => {
                self.message = state.is_over().then(|| format!("{}", state));
                self.move_timer.start();
            }
            Err(err) => {
                self.message = Some(format!("{}-{}: {}", from, to, err));
            }
        }
    }

    /// Concede for the side to move
    pub fn resign(&mut self) {
        if self.game.state().is_over() {
            return;
        }
        let loser = self.game.turn();
        self.game.resign();
        self.resigned = true;
        self.selected = None;
        self.message = Some(format!("{} resigned", color_name(loser)));
    }

    /// Take back a resignation, or else the last move
    pub fn undo(&mut self) {
        let mut moves = self.game.history().to_vec();
        if !self.resigned && moves.pop().is_none() {
            return;
        }

        let mut game = Game::new();
        for (from, to) in moves {
            // Recorded moves were all accepted from the opening
            if let Err(err) = game.play(from, to) {
                debug!(%from, %to, %err, "replay diverged");
                break;
            }
        }
        self.game = game;
        self.resigned = false;
        self.selected = None;
        self.message = None;
        self.move_timer.start();
    }
}

pub fn color_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
        Stone::Empty => "Nobody",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameState;

    fn p(s: &str) -> Pos {
        s.parse().unwrap()
    }

    #[test]
    fn test_two_clicks_make_a_move() {
        let mut session = Session::new();
        session.click(p("C3"));
        assert_eq!(session.selected, Some(p("C3")));
        session.click(p("C6"));
        assert_eq!(session.selected, None);
        assert_eq!(session.last_move(), Some((p("C3"), p("C6"))));
        assert_eq!(session.game.turn(), Stone::White);
    }

    #[test]
    fn test_clicking_selection_again_deselects() {
        let mut session = Session::new();
        session.click(p("C3"));
        session.click(p("C3"));
        assert_eq!(session.selected, None);
        assert!(session.game.history().is_empty());
    }

    #[test]
    fn test_border_click_not_selected() {
        let mut session = Session::new();
        session.click(Pos::new(0, 4));
        assert_eq!(session.selected, None);
        assert!(session.message.is_some());
    }

    #[test]
    fn test_rejected_move_reports_reason() {
        let mut session = Session::new();
        session.click(p("E3"));
        session.click(p("E8"));
        assert!(session.game.history().is_empty());
        let msg = session.message.clone().unwrap();
        assert!(msg.starts_with("E3-E8"), "{}", msg);
    }

    #[test]
    fn test_undo_replays_history() {
        let mut session = Session::new();
        session.try_move(p("C3"), p("C6"));
        session.try_move(p("C18"), p("C15"));
        session.undo();
        assert_eq!(session.game.history(), &[(p("C3"), p("C6"))]);
        assert_eq!(session.game.turn(), Stone::White);
        session.undo();
        session.undo();
        assert_eq!(session.game, Game::new());
    }

    #[test]
    fn test_undo_withdraws_resignation_first() {
        let mut session = Session::new();
        session.try_move(p("C3"), p("C6"));
        session.resign();
        assert_eq!(session.game.state(), GameState::BlackWon);
        session.undo();
        assert_eq!(session.game.state(), GameState::InProgress);
        assert_eq!(session.game.history().len(), 1);
    }
}
