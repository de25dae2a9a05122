//! Occupancy index - cell to entity lookup
//!
//! The entity table is the source of truth for positions; this index is the
//! derived, query-friendly view of it. It is rebuilt from scratch after every
//! state change rather than patched incrementally, which keeps it impossible
//! to desynchronize at the cost of an O(cells + entities) sweep that is
//! trivial at these grid sizes.

use arrayvec::ArrayVec;
use tui_ninelives_types::{Cell, MAX_OCCUPANTS};

use crate::entity::{Entity, EntityId};

/// Grid-shaped lookup table from cell to the entities standing on it
///
/// Each cell holds a small id list sorted ascending, so two indexes built
/// from the same set of entities compare equal regardless of entity table
/// order. Out-of-bounds queries return an empty slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyIndex {
    width: u8,
    height: u8,
    cells: Vec<ArrayVec<EntityId, MAX_OCCUPANTS>>,
}

impl OccupancyIndex {
    /// Create an empty index for a `width` x `height` grid
    pub fn new(width: u8, height: u8) -> Self {
        OccupancyIndex {
            width,
            height,
            cells: vec![ArrayVec::new(); width as usize * height as usize],
        }
    }

    /// Whether `cell` lies inside the grid
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u8) < self.width && (cell.y as u8) < self.height
    }

    /// Row-major slot for a cell, or `None` when out of bounds
    #[inline]
    fn slot(&self, cell: Cell) -> Option<usize> {
        if self.in_bounds(cell) {
            Some(cell.y as usize * self.width as usize + cell.x as usize)
        } else {
            None
        }
    }

    /// Discard the current contents and re-derive them from the entity table
    ///
    /// Within each cell the ids are kept sorted ascending.
    pub fn rebuild(&mut self, entities: &[Entity]) {
        for slot in &mut self.cells {
            slot.clear();
        }
        for entity in entities {
            if let Some(i) = self.slot(entity.cell) {
                let ids = &mut self.cells[i];
                let at = ids.partition_point(|id| *id < entity.id);
                ids.insert(at, entity.id);
            }
        }
    }

    /// Ids of every entity standing on `cell`, sorted ascending
    ///
    /// Out-of-bounds cells report no occupants.
    #[inline]
    pub fn occupants(&self, cell: Cell) -> &[EntityId] {
        match self.slot(cell) {
            Some(i) => &self.cells[i],
            None => &[],
        }
    }
}
