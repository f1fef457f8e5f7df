//! Move search and placement helpers on top of the core controller.
//!
//! Used by automation (the headless runner, tests, benchmarks) to enumerate
//! what can be played from a position and to play a chosen move in one call.

pub mod place;
pub mod search;

pub use edge_shift_core as core;
pub use edge_shift_types as types;

pub use place::{apply_move, apply_place, PlaceError};
pub use search::{best_move, cycle_orientations, has_legal_move, legal_moves, Move};
