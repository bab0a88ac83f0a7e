//! Game rules for Gess
//!
//! This module implements the rule set:
//! - Footprint geometry (3x3 pieces, directions, sweep order)
//! - Move validation (direction, range, path, last-ring guard)
//! - Footprint transplantation
//! - Ring detection

pub mod footprint;
pub mod ring;
pub mod transplant;
pub mod validate;

// Re-exports for convenient access
pub use footprint::{
    direction_towards, footprint_indices, sample_footprint, Direction, Sweep, INDEX_CENTER,
    SAMPLE_CENTER,
};
pub use ring::{rescan, ring_owner, Rings};
pub use transplant::apply_move;
pub use validate::{
    is_straight, last_ring_allows_move, path_clear, validate, MoveError, MAX_UNCENTERED_DISTANCE,
};
