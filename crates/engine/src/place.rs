use log::debug;
use thiserror::Error;

use crate::core::geometry::{apply_orientation, bounding_size};
use crate::core::{GameState, PlayError, TurnOutcome};
use crate::search::Move;
use crate::types::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("a placement is still resolving")]
    NotPlayable,
    #[error("no shape in the requested slot")]
    NoShape,
    #[error("target origin would place the shape out of bounds")]
    OutOfBounds,
    #[error("target cells are occupied")]
    Blocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "busy",
            PlaceError::NoShape => "invalid_selection",
            PlaceError::OutOfBounds | PlaceError::Blocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "a placement is still resolving",
            PlaceError::NoShape => "no shape in the requested slot",
            PlaceError::OutOfBounds => "target origin would place the shape out of bounds",
            PlaceError::Blocked => "target cells are occupied",
        }
    }
}

impl From<PlayError> for PlaceError {
    fn from(err: PlayError) -> Self {
        match err {
            PlayError::Busy | PlayError::NotBusy => PlaceError::NotPlayable,
            PlayError::InvalidSelection(_) => PlaceError::NoShape,
            PlayError::InvalidPlacement { .. } => PlaceError::Blocked,
        }
    }
}

/// Turn the shape in `slot` to `orientation` and place it at (col, row).
///
/// The target is checked before the orientation is touched, so a rejected
/// call leaves the queue exactly as it was.
pub fn apply_place(
    state: &mut GameState,
    slot: usize,
    orientation: Orientation,
    col: i32,
    row: i32,
) -> Result<TurnOutcome, PlaceError> {
    if state.is_busy() {
        return Err(PlaceError::NotPlayable);
    }
    let Some(shape) = state.queue().get(slot) else {
        return Err(PlaceError::NoShape);
    };

    let cells = apply_orientation(shape.shape.cells, orientation);
    let (w, h) = bounding_size(&cells);
    let board = state.board();
    let fits = |origin: i32, extent: i8, limit: usize| {
        origin >= 0
            && origin
                .checked_add(i32::from(extent))
                .is_some_and(|end| end <= limit as i32)
    };
    if !fits(col, w, board.cols()) || !fits(row, h, board.rows()) {
        debug!("apply_place: slot {} out of bounds at ({}, {})", slot, col, row);
        return Err(PlaceError::OutOfBounds);
    }
    if !board.can_place(&cells, col, row) {
        debug!("apply_place: slot {} blocked at ({}, {})", slot, col, row);
        return Err(PlaceError::Blocked);
    }

    state.set_orientation(slot, orientation)?;
    Ok(state.place_at(slot, col, row)?)
}

/// Play a move found by the search
pub fn apply_move(state: &mut GameState, mv: &Move) -> Result<TurnOutcome, PlaceError> {
    apply_place(state, mv.slot, mv.orientation, mv.col, mv.row)
}
