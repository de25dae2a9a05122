//! Entity records and identities
//!
//! Every object on the grid is an entity: the actor, walls, spikes, boxes,
//! switches, and the exit. Entities are stored in a flat table owned by the
//! puzzle; the occupancy index refers back into that table by id.

use tui_ninelives_types::{Cell, EntityKind};

/// Stable identity of one entity within a puzzle
///
/// Ids are assigned at construction and never reassigned while an entity
/// lives. When undo resurrects a destroyed entity, the fresh record is given
/// the destroyed entity's id back, so references recorded in older log
/// entries stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One live entity: an identity, a kind, and a current cell
///
/// Only `cell` ever changes after creation. Destruction removes the record
/// from the table entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub cell: Cell,
}

impl Entity {
    pub const fn new(id: EntityId, kind: EntityKind, cell: Cell) -> Self {
        Entity { id, kind, cell }
    }
}
