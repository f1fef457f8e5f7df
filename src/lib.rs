//! Edge-Shift puzzle (workspace facade crate).
//!
//! Re-exports the member crates as `edge_shift::{core, engine, types}`; the
//! implementation lives in dedicated crates under `crates/`.

pub use edge_shift_core as core;
pub use edge_shift_engine as engine;
pub use edge_shift_types as types;
