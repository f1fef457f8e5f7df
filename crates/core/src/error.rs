//! Error types for gameplay rejections and configuration faults

use thiserror::Error;

/// A rejected gameplay operation.
///
/// None of these are faults: the operation is a no-op and committed state is
/// left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Target cells occupied or out of bounds
    #[error("shape does not fit at col {col}, row {row}")]
    InvalidPlacement { col: i32, row: i32 },
    /// No shape in that queue slot
    #[error("no shape in queue slot {0}")]
    InvalidSelection(usize),
    /// A previous placement has not settled yet
    #[error("a placement is still resolving")]
    Busy,
    /// Nothing to advance
    #[error("no placement is resolving")]
    NotBusy,
}

/// Invalid construction-time configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions {rows}x{cols} outside 1..={max}")]
    BoardSize { rows: usize, cols: usize, max: usize },
    #[error("queue size {size} outside 1..={max}")]
    QueueSize { size: usize, max: usize },
    #[error("shape catalog is empty")]
    EmptyCatalog,
    #[error("shape `{0}` has no cells")]
    EmptyShape(String),
    #[error("shape `{key}` has {cells} cells, more than supported")]
    ShapeTooLarge { key: String, cells: usize },
    #[error("shape `{0}` has a negative cell offset")]
    NegativeOffset(String),
    #[error("shape `{key}` has a cell offset above {max}")]
    OffsetTooLarge { key: String, max: i8 },
    #[error("shape `{0}` does not touch x = 0 and y = 0")]
    NotNormalized(String),
    #[error("duplicate shape key `{0}`")]
    DuplicateShapeKey(String),
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("invalid config document: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}
