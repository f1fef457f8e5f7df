//! Queue module - the batch of offered shapes
//!
//! The queue drains one shape at a time and is refilled with a whole new
//! batch only when it becomes empty. The refill happens inside the same
//! [`ShapeQueue::consume`] call, so a partially refilled queue is never
//! observable.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::error::PlayError;
use crate::geometry::{apply_orientation, Cells};
use crate::rng::Mulberry32;
use crate::shapes::{Catalog, ShapeDef};
use crate::types::{ColorId, Orientation, MAX_QUEUE_SIZE};

/// A drawn shape waiting in the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeInstance {
    /// Unique per draw
    pub instance_id: u32,
    pub shape: ShapeDef,
    pub orientation: Orientation,
    pub color: ColorId,
}

impl ShapeInstance {
    pub fn new(instance_id: u32, shape: ShapeDef) -> Self {
        Self {
            instance_id,
            shape,
            orientation: Orientation::IDENTITY,
            color: shape.color,
        }
    }

    pub fn key(&self) -> &'static str {
        self.shape.key
    }

    /// Cell offsets for the current orientation, derived from the base shape
    pub fn cells(&self) -> Cells {
        apply_orientation(self.shape.cells, self.orientation)
    }

    pub fn cell_count(&self) -> usize {
        self.shape.cells.len()
    }
}

/// Shapes in a queue, in slot order
pub type Batch = ArrayVec<ShapeInstance, MAX_QUEUE_SIZE>;

/// Draw one shape uniformly from the catalog with the spawn orientation
pub fn draw(rng: &mut Mulberry32, catalog: &Catalog, instance_id: u32) -> ShapeInstance {
    let shapes = catalog.shapes();
    // Catalogs are validated non-empty at construction.
    let idx = rng.next_range(shapes.len() as u32) as usize;
    ShapeInstance::new(instance_id, shapes[idx])
}

/// Draw `size` shapes in order, assigning ids from `next_id`
pub fn initial_batch(
    rng: &mut Mulberry32,
    catalog: &Catalog,
    size: usize,
    next_id: &mut u32,
) -> Batch {
    let mut batch = Batch::new();
    for _ in 0..size.min(MAX_QUEUE_SIZE) {
        batch.push(draw(rng, catalog, *next_id));
        *next_id = next_id.wrapping_add(1);
    }
    batch
}

/// The offered shapes plus the active selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeQueue {
    items: Batch,
    batch_size: usize,
    selected: usize,
    /// Next instance id; never rewinds, not even on reset
    next_id: u32,
}

impl ShapeQueue {
    /// Create an empty queue. Call [`ShapeQueue::refill`] before use.
    pub fn new(batch_size: usize) -> Self {
        Self {
            items: Batch::new(),
            batch_size: batch_size.clamp(1, MAX_QUEUE_SIZE),
            selected: 0,
            next_id: 1,
        }
    }

    /// Replace the contents with a fresh batch and select slot 0
    pub fn refill(&mut self, rng: &mut Mulberry32, catalog: &Catalog) {
        self.items = initial_batch(rng, catalog, self.batch_size, &mut self.next_id);
        self.selected = 0;
    }

    /// Remove the shape at `slot`.
    ///
    /// If that empties the queue, a full batch is drawn immediately and the
    /// selection resets to 0. Otherwise the selection is clamped to
    /// `min(selected, len - 1)`.
    pub fn consume(
        &mut self,
        slot: usize,
        rng: &mut Mulberry32,
        catalog: &Catalog,
    ) -> Result<ShapeInstance, PlayError> {
        if slot >= self.items.len() {
            return Err(PlayError::InvalidSelection(slot));
        }
        let taken = self.items.remove(slot);
        if self.items.is_empty() {
            self.refill(rng, catalog);
        } else {
            self.selected = self.selected.min(self.items.len() - 1);
        }
        Ok(taken)
    }

    pub fn get(&self, slot: usize) -> Option<&ShapeInstance> {
        self.items.get(slot)
    }

    pub fn items(&self) -> &[ShapeInstance] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn select(&mut self, slot: usize) -> Result<(), PlayError> {
        if slot >= self.items.len() {
            return Err(PlayError::InvalidSelection(slot));
        }
        self.selected = slot;
        Ok(())
    }

    /// Overwrite a slot's orientation, returning the new value
    pub fn set_orientation(
        &mut self,
        slot: usize,
        orientation: Orientation,
    ) -> Result<Orientation, PlayError> {
        let item = self
            .items
            .get_mut(slot)
            .ok_or(PlayError::InvalidSelection(slot))?;
        item.orientation = orientation;
        Ok(orientation)
    }

    /// Transform a slot's orientation in place, returning the new value
    pub fn reorient(
        &mut self,
        slot: usize,
        f: impl FnOnce(Orientation) -> Orientation,
    ) -> Result<Orientation, PlayError> {
        let current = self
            .items
            .get(slot)
            .ok_or(PlayError::InvalidSelection(slot))?
            .orientation;
        self.set_orientation(slot, f(current))
    }
}
