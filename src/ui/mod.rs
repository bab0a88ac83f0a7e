//! GUI module for the Gess game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GessApp;
pub use game_state::Session;
