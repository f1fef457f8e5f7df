use serde::Serialize;

use crate::queue::ShapeInstance;
use crate::scoring::Stats;
use crate::types::{CascadePhase, Cell};

/// Read-only view of everything a presentation layer draws
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Cells by row, top to bottom
    pub board: Vec<Vec<Cell>>,
    pub queue: Vec<ShapeInstance>,
    pub selected: usize,
    pub stats: Stats,
    pub busy: bool,
    pub phase: CascadePhase,
    pub seed: u32,
    pub episode_id: u32,
}
