//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no game logic, making them
//! usable in any context (rules engine, presentation layer, automation).
//!
//! # Board Dimensions
//!
//! The canonical Edge-Shift board is a 12x12 square:
//!
//! - **Columns**: 12 (indexed 0-11, left to right)
//! - **Rows**: 12 (indexed 0-11, top to bottom)
//! - **Queue**: 4 shapes offered per batch
//!
//! Other dimensions are configurable up to [`MAX_BOARD_DIM`] per side.
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_POINTS` | 1 | Per placed cell |
//! | `LINE_POINTS` | 100 | Per full row or column |
//! | `EDGE_SHIFT_POINTS` | 50 | Per unit of edge shift |
//! | `MULTI_LINE_BONUS` | 50 | Per line beyond the first in one evaluation |
//!
//! # Presentation Timing
//!
//! The engine never reads these; they are the pacing the reference presentation
//! uses between cascade phases, in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CLEAR_MS` | 280 | Clear flash/shrink |
//! | `SHIFT_MS` | 320 | Board slide |
//! | `COMBO_MS` | 900 | Combo popup lifetime |
//! | `BURST_MS` | 1000 | Score burst lifetime |
//!
//! # Examples
//!
//! ```
//! use edge_shift_types::{Orientation, Rotation, ClearKind, GRID_COLS, GRID_ROWS};
//!
//! // Rotate
//! let rotation = Rotation::North;
//! assert_eq!(rotation.rotate_cw(), Rotation::East);
//!
//! // The rotate control cycles four turns, then flips the mirror flag
//! let mut o = Orientation::IDENTITY;
//! for _ in 0..4 {
//!     o = o.next_in_cycle();
//! }
//! assert_eq!(o.rotation, Rotation::North);
//! assert!(o.mirrored_h);
//!
//! // Clear labels
//! assert_eq!(ClearKind::from_combo(2).unwrap().to_string(), "DOUBLE CLEAR!");
//!
//! // Board dimensions
//! assert_eq!(GRID_COLS, 12);
//! assert_eq!(GRID_ROWS, 12);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board width in cells (12 columns)
pub const GRID_COLS: usize = 12;

/// Board height in cells (12 rows)
pub const GRID_ROWS: usize = 12;

/// Number of shapes offered per batch
pub const QUEUE_SIZE: usize = 4;

/// Largest supported board side. Line sets are stack-allocated at this capacity.
pub const MAX_BOARD_DIM: usize = 64;

/// Largest supported batch size.
pub const MAX_QUEUE_SIZE: usize = 16;

/// Largest number of cells a single shape may have.
pub const MAX_SHAPE_CELLS: usize = 16;

/// Points per placed cell
pub const CELL_POINTS: u32 = 1;

/// Points per full row or column
pub const LINE_POINTS: u32 = 100;

/// Points per unit of edge shift (summed over all four sides)
pub const EDGE_SHIFT_POINTS: u32 = 50;

/// Bonus per line beyond the first in a single clear evaluation
pub const MULTI_LINE_BONUS: u32 = 50;

/// Clear flash duration hint (280ms)
pub const CLEAR_MS: u32 = 280;

/// Board slide duration hint (320ms)
pub const SHIFT_MS: u32 = 320;

/// Combo popup lifetime hint (900ms)
pub const COMBO_MS: u32 = 900;

/// Score burst lifetime hint (1000ms)
pub const BURST_MS: u32 = 1000;

/// Shade used for the flash variant of every hue
pub const FLASH_SHADE: u16 = 200;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_presentation_timing_defaults() {
        assert_eq!(CLEAR_MS, 280);
        assert_eq!(SHIFT_MS, 320);
        assert_eq!(COMBO_MS, 900);
        assert_eq!(BURST_MS, 1000);
    }

    #[test]
    fn rotation_quarter_turns_wrap() {
        assert_eq!(Rotation::from_quarter_turns(4), Rotation::North);
        assert_eq!(Rotation::from_quarter_turns(-1), Rotation::West);
        assert_eq!(Rotation::from_quarter_turns(6), Rotation::South);
        assert_eq!(Rotation::West.quarter_turns(), 3);
    }

    #[test]
    fn orientation_cycle_returns_after_eight_steps() {
        let mut o = Orientation::IDENTITY;
        for i in 1..=8 {
            o = o.next_in_cycle();
            if i == 4 {
                assert_eq!(o, Orientation::new(Rotation::North, true, false));
            }
        }
        assert_eq!(o, Orientation::IDENTITY);
    }

    #[test]
    fn orientation_cycle_preserves_vertical_mirror() {
        let o = Orientation::new(Rotation::West, false, true).next_in_cycle();
        assert_eq!(o, Orientation::new(Rotation::North, true, true));
    }

    #[test]
    fn cycle_index_round_trips_through_all_eight() {
        for i in 0..8 {
            assert_eq!(Orientation::from_cycle_index(i).cycle_index(), i);
        }
    }

    #[test]
    fn flash_keeps_hue() {
        let base = ColorId::new(Hue::Emerald, 500);
        assert_eq!(base.flash(), ColorId::new(Hue::Emerald, FLASH_SHADE));
        assert_eq!(base.to_string(), "emerald-500");
    }

    #[test]
    fn clear_kind_labels() {
        assert_eq!(ClearKind::from_combo(0), None);
        assert_eq!(ClearKind::from_combo(1), Some(ClearKind::Line));
        assert_eq!(ClearKind::from_combo(3).unwrap().to_string(), "TRIPLE CLEAR!");
        assert_eq!(ClearKind::from_combo(5).unwrap().to_string(), "MEGA CLEAR x5!");
    }

    #[test]
    fn phase_order() {
        assert_eq!(CascadePhase::Placed.next(), Some(CascadePhase::Cleared));
        assert_eq!(CascadePhase::Cleared.next(), Some(CascadePhase::Settled));
        assert_eq!(CascadePhase::Settled.next(), None);
    }
}

/// Offset of a single cell relative to a shape's local bounding box, as (x, y)
pub type CellOffset = (i8, i8);

/// Rotation states in clockwise quarter turns
///
/// - **North**: Spawn orientation (0 quarter turns)
/// - **East**: Rotated 90° clockwise
/// - **South**: Rotated 180°
/// - **West**: Rotated 270° clockwise
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use edge_shift_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Number of clockwise quarter turns (0-3)
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from any number of quarter turns, reduced mod 4 (negative allowed)
    pub fn from_quarter_turns(steps: i32) -> Self {
        match steps.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// The (rotation, mirror flags) triple determining a shape instance's layout.
///
/// Cell offsets are never stored for an orientation; they are derived from the
/// base shape whenever needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub rotation: Rotation,
    pub mirrored_h: bool,
    pub mirrored_v: bool,
}

impl Orientation {
    /// Spawn orientation: no rotation, no mirroring
    pub const IDENTITY: Self = Self {
        rotation: Rotation::North,
        mirrored_h: false,
        mirrored_v: false,
    };

    pub fn new(rotation: Rotation, mirrored_h: bool, mirrored_v: bool) -> Self {
        Self {
            rotation,
            mirrored_h,
            mirrored_v,
        }
    }

    /// Advance the rotate control by one step.
    ///
    /// Rotation advances clockwise; wrapping from West back to North toggles the
    /// horizontal mirror. The vertical mirror is not part of the cycle.
    pub fn next_in_cycle(self) -> Self {
        let rotation = self.rotation.rotate_cw();
        let mirrored_h = if rotation == Rotation::North {
            !self.mirrored_h
        } else {
            self.mirrored_h
        };
        Self {
            rotation,
            mirrored_h,
            ..self
        }
    }

    /// Position within the 8-step rotate cycle (0-7), ignoring the vertical mirror
    pub fn cycle_index(&self) -> u8 {
        self.rotation.quarter_turns() + if self.mirrored_h { 4 } else { 0 }
    }

    /// Inverse of [`Orientation::cycle_index`] with the vertical mirror cleared
    pub fn from_cycle_index(index: u8) -> Self {
        Self {
            rotation: Rotation::from_quarter_turns(i32::from(index % 4)),
            mirrored_h: index % 8 >= 4,
            mirrored_v: false,
        }
    }

    pub fn toggled_h(self) -> Self {
        Self {
            mirrored_h: !self.mirrored_h,
            ..self
        }
    }

    pub fn toggled_v(self) -> Self {
        Self {
            mirrored_v: !self.mirrored_v,
            ..self
        }
    }
}

/// Palette hues used by the shape catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    Emerald,
    Sky,
    Amber,
    Rose,
    Violet,
    Cyan,
    Yellow,
    Teal,
    Lime,
    Indigo,
    Orange,
    Fuchsia,
    Pink,
    Blue,
    Stone,
    Green,
    Purple,
    Zinc,
}

impl Hue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hue::Emerald => "emerald",
            Hue::Sky => "sky",
            Hue::Amber => "amber",
            Hue::Rose => "rose",
            Hue::Violet => "violet",
            Hue::Cyan => "cyan",
            Hue::Yellow => "yellow",
            Hue::Teal => "teal",
            Hue::Lime => "lime",
            Hue::Indigo => "indigo",
            Hue::Orange => "orange",
            Hue::Fuchsia => "fuchsia",
            Hue::Pink => "pink",
            Hue::Blue => "blue",
            Hue::Stone => "stone",
            Hue::Green => "green",
            Hue::Purple => "purple",
            Hue::Zinc => "zinc",
        }
    }
}

/// Color identity carried by occupied cells, as (hue, shade).
///
/// The engine only cares whether a cell is occupied; the color is for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorId {
    pub hue: Hue,
    pub shade: u16,
}

impl ColorId {
    pub const fn new(hue: Hue, shade: u16) -> Self {
        Self { hue, shade }
    }

    /// Highlight variant used while a cell flashes before clearing
    pub const fn flash(self) -> Self {
        Self {
            hue: self.hue,
            shade: FLASH_SHADE,
        }
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.hue.as_str(), self.shade)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ColorId)`: Occupied cell with its display color
pub type Cell = Option<ColorId>;

/// Stages a multi-phase placement passes through before the board settles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CascadePhase {
    /// Shape committed, full lines still on the board
    Placed,
    /// Full lines emptied, no shift applied yet
    Cleared,
    /// Shift and cascade applied; the turn is complete
    Settled,
}

impl CascadePhase {
    pub fn next(&self) -> Option<Self> {
        match self {
            CascadePhase::Placed => Some(CascadePhase::Cleared),
            CascadePhase::Cleared => Some(CascadePhase::Settled),
            CascadePhase::Settled => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CascadePhase::Placed => "placed",
            CascadePhase::Cleared => "cleared",
            CascadePhase::Settled => "settled",
        }
    }
}

/// Label category for a clear, derived from the combo count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearKind {
    Line,
    Double,
    Triple,
    Mega(u32),
}

impl ClearKind {
    /// Returns `None` when nothing was cleared.
    pub fn from_combo(combo: u32) -> Option<Self> {
        match combo {
            0 => None,
            1 => Some(ClearKind::Line),
            2 => Some(ClearKind::Double),
            3 => Some(ClearKind::Triple),
            n => Some(ClearKind::Mega(n)),
        }
    }
}

impl fmt::Display for ClearKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearKind::Line => f.write_str("LINE CLEAR!"),
            ClearKind::Double => f.write_str("DOUBLE CLEAR!"),
            ClearKind::Triple => f.write_str("TRIPLE CLEAR!"),
            ClearKind::Mega(n) => write!(f, "MEGA CLEAR x{}!", n),
        }
    }
}

/// Commands accepted by the game controller
///
/// These are used by both interactive presentation layers and automation.
/// Slots index the current queue; `col`/`row` are the origin of the shape's
/// local bounding box on the board and may be negative while hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameCommand {
    /// Make a queue slot the active selection
    Select { slot: usize },
    /// Compute a placement preview (never mutates)
    Hover { slot: usize, col: i32, row: i32 },
    /// Advance the slot's rotate cycle by one step
    Rotate { slot: usize },
    /// Toggle the slot's horizontal mirror
    Mirror { slot: usize },
    /// Toggle the slot's vertical mirror
    MirrorVertical { slot: usize },
    /// Place the slot's shape with its bounding box origin at (col, row)
    Place { slot: usize, col: i32, row: i32 },
    /// Move a pending placement to its next cascade phase
    AdvancePhase,
    /// Restart with the current seed
    Reset,
    /// Restart with the given seed, or a freshly sampled one
    NewGame { seed: Option<u32> },
}

impl GameCommand {
    /// Command name in camelCase (matches the serialized tag)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::Select { .. } => "select",
            GameCommand::Hover { .. } => "hover",
            GameCommand::Rotate { .. } => "rotate",
            GameCommand::Mirror { .. } => "mirror",
            GameCommand::MirrorVertical { .. } => "mirrorVertical",
            GameCommand::Place { .. } => "place",
            GameCommand::AdvancePhase => "advancePhase",
            GameCommand::Reset => "reset",
            GameCommand::NewGame { .. } => "newGame",
        }
    }

    /// Whether the command is inert while a placement is still resolving
    pub fn blocked_while_busy(&self) -> bool {
        matches!(
            self,
            GameCommand::Hover { .. }
                | GameCommand::Rotate { .. }
                | GameCommand::Mirror { .. }
                | GameCommand::MirrorVertical { .. }
                | GameCommand::Place { .. }
        )
    }
}
