//! Shapes module - the static polyomino catalog
//!
//! Shape definitions are process-wide constants and are never mutated. Queue
//! items reference a definition and derive their oriented cells from it.

use std::borrow::Cow;

use serde::Serialize;

use crate::config::CatalogKind;
use crate::error::ConfigError;
use crate::types::{CellOffset, ColorId, Hue, MAX_SHAPE_CELLS};

/// Immutable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShapeDef {
    /// Unique id within a catalog
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    pub color: ColorId,
    pub flash: ColorId,
    /// Cell offsets in the shape's local bounding box
    pub cells: &'static [CellOffset],
    /// Relative placement difficulty in percent (100 = neutral)
    pub difficulty_pct: u16,
}

impl ShapeDef {
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

const fn shape(
    key: &'static str,
    name: &'static str,
    hue: Hue,
    shade: u16,
    cells: &'static [CellOffset],
    difficulty_pct: u16,
) -> ShapeDef {
    let color = ColorId::new(hue, shade);
    ShapeDef {
        key,
        name,
        color,
        flash: color.flash(),
        cells,
        difficulty_pct,
    }
}

/// Number of shapes in the classic catalog (a prefix of [`EXTENDED_SHAPES`])
pub const CLASSIC_LEN: usize = 10;

/// Every shape the game draws from. The first [`CLASSIC_LEN`] entries form the classic set.
pub static EXTENDED_SHAPES: [ShapeDef; 30] = [
    shape("single", "1x1", Hue::Emerald, 500, &[(0, 0)], 75),
    shape("line2", "1x2", Hue::Sky, 400, &[(0, 0), (1, 0)], 90),
    shape("line3", "1x3", Hue::Amber, 500, &[(0, 0), (1, 0), (2, 0)], 105),
    shape("line4", "1x4", Hue::Rose, 500, &[(0, 0), (1, 0), (2, 0), (3, 0)], 115),
    shape("square2", "2x2", Hue::Violet, 500, &[(0, 0), (1, 0), (0, 1), (1, 1)], 85),
    shape(
        "square3",
        "3x3",
        Hue::Cyan,
        500,
        &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)],
        90,
    ),
    shape("corner2", "Corner 2x2", Hue::Yellow, 500, &[(0, 0), (1, 0), (0, 1)], 105),
    shape("t3", "T", Hue::Teal, 400, &[(0, 0), (1, 0), (2, 0), (1, 1)], 115),
    shape("L3", "L", Hue::Lime, 400, &[(0, 0), (0, 1), (0, 2), (1, 2)], 110),
    shape("Z", "Z", Hue::Rose, 400, &[(0, 0), (1, 0), (1, 1), (2, 1)], 130),
    // Remaining tetrominoes
    shape("J4", "J", Hue::Indigo, 400, &[(1, 0), (1, 1), (1, 2), (0, 2)], 105),
    shape("S4", "S", Hue::Orange, 400, &[(1, 0), (2, 0), (0, 1), (1, 1)], 125),
    // Lines and rectangles
    shape("line5", "1x5", Hue::Fuchsia, 500, &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], 110),
    shape(
        "line6",
        "1x6",
        Hue::Pink,
        500,
        &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)],
        115,
    ),
    shape(
        "rect2x3",
        "2x3",
        Hue::Sky,
        500,
        &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)],
        90,
    ),
    shape(
        "rect2x4",
        "2x4",
        Hue::Blue,
        600,
        &[(0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1), (3, 1)],
        85,
    ),
    // Pentominoes
    shape("I5", "I (5)", Hue::Stone, 500, &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)], 110),
    shape("L5", "L (5)", Hue::Green, 600, &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)], 115),
    shape("J5", "J (5)", Hue::Green, 500, &[(1, 0), (1, 1), (1, 2), (1, 3), (0, 3)], 115),
    shape("T5", "T (5)", Hue::Indigo, 500, &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)], 120),
    shape("U5", "U", Hue::Lime, 500, &[(0, 0), (0, 1), (2, 0), (2, 1), (1, 1)], 130),
    shape("V5", "V", Hue::Emerald, 400, &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)], 115),
    shape("W5", "W", Hue::Cyan, 600, &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)], 130),
    shape("X5", "Plus", Hue::Purple, 500, &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)], 115),
    shape("Y5", "Y", Hue::Teal, 500, &[(0, 0), (1, 0), (2, 0), (3, 0), (1, 1)], 140),
    shape("P5", "P", Hue::Yellow, 600, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)], 110),
    shape("N5", "N", Hue::Amber, 600, &[(0, 0), (1, 0), (1, 1), (2, 1), (3, 1)], 145),
    shape("F5", "F", Hue::Rose, 600, &[(1, 0), (0, 1), (1, 1), (1, 2), (2, 2)], 150),
    // Hole makers
    shape(
        "ring3",
        "Ring 3x3 (hollow)",
        Hue::Zinc,
        500,
        &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)],
        180,
    ),
    shape("C5", "C", Hue::Orange, 500, &[(0, 0), (1, 0), (0, 1), (0, 2), (1, 2)], 135),
];

/// An ordered, validated set of shape definitions to draw from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shapes: Cow<'static, [ShapeDef]>,
}

impl Catalog {
    /// Build a custom catalog, rejecting empty catalogs, empty or oversized
    /// shapes, and duplicate keys.
    pub fn new(shapes: Vec<ShapeDef>) -> Result<Self, ConfigError> {
        validate(&shapes)?;
        Ok(Self {
            shapes: Cow::Owned(shapes),
        })
    }

    /// The ten base shapes
    pub fn classic() -> Self {
        Self {
            shapes: Cow::Borrowed(&EXTENDED_SHAPES[..CLASSIC_LEN]),
        }
    }

    /// All thirty shapes
    pub fn extended() -> Self {
        Self {
            shapes: Cow::Borrowed(&EXTENDED_SHAPES[..]),
        }
    }

    pub fn from_kind(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Classic => Self::classic(),
            CatalogKind::Extended => Self::extended(),
        }
    }

    pub fn shapes(&self) -> &[ShapeDef] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ShapeDef> {
        self.shapes.iter().find(|s| s.key == key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::extended()
    }
}

fn validate(shapes: &[ShapeDef]) -> Result<(), ConfigError> {
    if shapes.is_empty() {
        return Err(ConfigError::EmptyCatalog);
    }
    for (i, def) in shapes.iter().enumerate() {
        if def.cells.is_empty() {
            return Err(ConfigError::EmptyShape(def.key.to_string()));
        }
        if def.cells.len() > MAX_SHAPE_CELLS {
            return Err(ConfigError::ShapeTooLarge {
                key: def.key.to_string(),
                cells: def.cells.len(),
            });
        }
        if def.cells.iter().any(|&(x, y)| x < 0 || y < 0) {
            return Err(ConfigError::NegativeOffset(def.key.to_string()));
        }
        // Bounding sizes stay within i8
        let limit = MAX_SHAPE_CELLS as i8;
        if def.cells.iter().any(|&(x, y)| x >= limit || y >= limit) {
            return Err(ConfigError::OffsetTooLarge {
                key: def.key.to_string(),
                max: limit - 1,
            });
        }
        let touches_left = def.cells.iter().any(|&(x, _)| x == 0);
        let touches_top = def.cells.iter().any(|&(_, y)| y == 0);
        if !touches_left || !touches_top {
            return Err(ConfigError::NotNormalized(def.key.to_string()));
        }
        if shapes[..i].iter().any(|other| other.key == def.key) {
            return Err(ConfigError::DuplicateShapeKey(def.key.to_string()));
        }
    }
    Ok(())
}
