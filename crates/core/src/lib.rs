//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the edge-shift puzzle and the controller
//! that owns a game session. It has no dependencies on rendering, input
//! devices, or I/O:
//!
//! - **Deterministic**: Same seed produces the same shapes in the same order
//! - **Pure**: Geometry and board functions take and return values
//! - **All-or-nothing**: A rejected operation leaves the game untouched
//!
//! # Module Structure
//!
//! - [`geometry`]: normalize, rotate and mirror shape cell sets
//! - [`board`]: occupancy grid with placement checks and placement search
//! - [`clears`]: full lines, edge shifts, and cascade resolution
//! - [`queue`]: the batch of offered shapes and its atomic refill
//! - [`scoring`]: move score, clear-pass score, and cumulative stats
//! - [`game_state`]: the controller and its command dispatcher
//! - [`rng`]: the seeded Mulberry32 stream
//! - [`shapes`]: the static shape catalogs
//! - [`config`]: board size, batch size and catalog selection
//!
//! # Game Rules
//!
//! - Shapes are placed anywhere they fit; there is no gravity.
//! - Full rows and full columns clear together.
//! - Full lines touching an edge in an unbroken run shift the whole board
//!   toward that edge by the run length. Opposite edges cancel.
//! - A placement scores one point per cell, 100 per line, 50 per unit of edge
//!   shift, and 50 per line beyond the first.
//!
//! # Example
//!
//! ```
//! use edge_shift_core::{CascadePhase, GameState};
//!
//! let mut game = GameState::new(12345);
//! let outcome = game.place_at(0, 0, 0).unwrap();
//! assert!(outcome.move_score.total > 0);
//!
//! // Clearing turns are revealed in phases; drive them to the end.
//! game.settle();
//! assert_eq!(game.phase(), CascadePhase::Settled);
//! assert_eq!(game.stats().moves, 1);
//! ```

pub mod board;
pub mod clears;
pub mod config;
pub mod error;
pub mod game_state;
pub mod geometry;
pub mod queue;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use edge_shift_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Placement};
pub use clears::{
    apply_clears_and_shifts, clear_only, compute_clears, resolve_all_clears, Cascade, ClearScan,
    EdgeShifts,
};
pub use config::{CatalogKind, GameConfig};
pub use error::{ConfigError, PlayError};
pub use game_state::{CommandOutcome, GameState, HoverPreview, TurnOutcome};
pub use geometry::{apply_orientation, Cells};
pub use queue::{ShapeInstance, ShapeQueue};
pub use rng::Mulberry32;
pub use scoring::{calculate_clear_score, calculate_move_score, ScoreResult, Stats, StatsDelta};
pub use shapes::{Catalog, ShapeDef};
pub use snapshot::GameSnapshot;
pub use types::{CascadePhase, GameCommand, Orientation, Rotation};
