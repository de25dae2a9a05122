//! Move resolution
//!
//! Resolution inspects the current state and either rejects a move, reports
//! the puzzle complete, or produces the batch of primitive actions the move
//! will commit. Nothing here mutates state; the puzzle applies the batch
//! afterwards, which keeps every move all-or-nothing.
//!
//! The two forms resolve differently:
//!
//! - **Solid** pushes: a box ahead of the actor is shoved one cell further,
//!   or destroyed together with a spike waiting behind it. Stepping onto a
//!   spike costs the actor its solid form.
//! - **Spectral** pulls: a box directly behind the actor follows into the
//!   vacated cell. Spikes are harmless underfoot, but a box pulled onto the
//!   spike the actor just vacated is destroyed with it. Only this form may
//!   leave through the exit, and only while the gate is open.

use arrayvec::ArrayVec;
use tui_ninelives_types::{Cell, Direction, EntityKind, Form};

use crate::action::{Action, ActionBatch};
use crate::entity::{Entity, EntityId};
use crate::index::OccupancyIndex;

/// What a proposed move turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// Blocked; the state must not change
    Reject,
    /// The actor left through the exit; the state must not change
    Complete,
    /// Legal; commit exactly these actions, in order
    Commit(ActionBatch),
}

/// First occupant of `cell` with the requested kind
fn occupant_of_kind(
    entities: &[Entity],
    index: &OccupancyIndex,
    cell: Cell,
    kind: EntityKind,
) -> Option<EntityId> {
    index
        .occupants(cell)
        .iter()
        .copied()
        .find(|id| entities.iter().any(|e| e.id == *id && e.kind == kind))
}

fn holds(entities: &[Entity], index: &OccupancyIndex, cell: Cell, kind: EntityKind) -> bool {
    occupant_of_kind(entities, index, cell, kind).is_some()
}

/// Resolve one proposed actor move against the current state
pub(crate) fn resolve(
    entities: &[Entity],
    index: &OccupancyIndex,
    actor: &Entity,
    form: Form,
    gate_open: bool,
    dir: Direction,
) -> Resolution {
    match form {
        Form::Solid => resolve_solid(entities, index, actor, dir),
        Form::Spectral => resolve_spectral(entities, index, actor, gate_open, dir),
    }
}

fn resolve_solid(
    entities: &[Entity],
    index: &OccupancyIndex,
    actor: &Entity,
    dir: Direction,
) -> Resolution {
    let from = actor.cell;
    let dst = from.step(dir);

    if !index.in_bounds(dst) || holds(entities, index, dst, EntityKind::Wall) {
        return Resolution::Reject;
    }
    // The exit admits only the spectral form, whatever the gate says.
    if holds(entities, index, dst, EntityKind::Exit) {
        return Resolution::Reject;
    }

    let mut batch = ArrayVec::new();
    if holds(entities, index, dst, EntityKind::Spike) {
        batch.push(Action::Rebirth { dir });
    } else if let Some(box_id) = occupant_of_kind(entities, index, dst, EntityKind::Box) {
        let box_dst = dst.step(dir);
        let blocked = !index.in_bounds(box_dst)
            || holds(entities, index, box_dst, EntityKind::Wall)
            || holds(entities, index, box_dst, EntityKind::Box)
            || holds(entities, index, box_dst, EntityKind::Exit);
        if blocked {
            return Resolution::Reject;
        }
        if let Some(spike_id) = occupant_of_kind(entities, index, box_dst, EntityKind::Spike) {
            batch.push(Action::Spikefall {
                box_id,
                box_cell: dst,
                spike_id,
                spike_cell: box_dst,
            });
        } else {
            batch.push(Action::Move {
                id: box_id,
                from: dst,
                dir,
            });
        }
    }

    batch.push(Action::Move {
        id: actor.id,
        from,
        dir,
    });
    Resolution::Commit(batch)
}

fn resolve_spectral(
    entities: &[Entity],
    index: &OccupancyIndex,
    actor: &Entity,
    gate_open: bool,
    dir: Direction,
) -> Resolution {
    let from = actor.cell;
    let dst = from.step(dir);

    if !index.in_bounds(dst) || holds(entities, index, dst, EntityKind::Wall) {
        return Resolution::Reject;
    }
    if holds(entities, index, dst, EntityKind::Exit) {
        return if gate_open {
            Resolution::Complete
        } else {
            Resolution::Reject
        };
    }
    // Spectral hands pass through boxes; they cannot push.
    if holds(entities, index, dst, EntityKind::Box) {
        return Resolution::Reject;
    }

    let mut batch = ArrayVec::new();
    let behind = from.step(dir.opposite());
    if let Some(box_id) = occupant_of_kind(entities, index, behind, EntityKind::Box) {
        if let Some(spike_id) = occupant_of_kind(entities, index, from, EntityKind::Spike) {
            // The box is dragged onto the spike the actor is vacating.
            batch.push(Action::Spikefall {
                box_id,
                box_cell: behind,
                spike_id,
                spike_cell: from,
            });
        } else {
            batch.push(Action::Move {
                id: box_id,
                from: behind,
                dir,
            });
        }
    }

    batch.push(Action::Move {
        id: actor.id,
        from,
        dir,
    });
    Resolution::Commit(batch)
}
