//! Committed actions and the undo log
//!
//! A successful move commits as a batch of primitive actions. Each primitive
//! records enough to run itself backward exactly, so undo never guesses:
//! the log replays a batch in reverse order with each action inverted.

use arrayvec::ArrayVec;
use tui_ninelives_types::{Cell, Direction};

use crate::entity::EntityId;

/// Most primitives one move can commit
///
/// A batch is at most one entity effect (a box displacement, a mutual
/// destruction, or a form change) followed by the actor's own displacement.
pub const MAX_BATCH_ACTIONS: usize = 2;

/// One primitive state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// An entity left `from` one step in `dir`
    ///
    /// Inverse: move the entity from `from.step(dir)` back to `from`.
    Move {
        id: EntityId,
        from: Cell,
        dir: Direction,
    },
    /// A box collided with a spike and both were destroyed
    ///
    /// Inverse: recreate both entities at their recorded cells, under their
    /// recorded ids, so earlier log entries still name them correctly.
    Spikefall {
        box_id: EntityId,
        box_cell: Cell,
        spike_id: EntityId,
        spike_cell: Cell,
    },
    /// The solid actor stepped onto a spike and turned spectral
    ///
    /// `dir` is the step that triggered the transition; the inverse is the
    /// return to solid form.
    Rebirth { dir: Direction },
}

/// The ordered primitives committed by one move
///
/// The actor's own `Move` is always the final element.
pub type ActionBatch = ArrayVec<Action, MAX_BATCH_ACTIONS>;

/// Append-only history of committed batches
///
/// Rejected moves never enter the log, so popping always yields a batch that
/// really ran. The log grows by exactly one entry per committed move.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    batches: Vec<ActionBatch>,
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            batches: Vec::new(),
        }
    }

    /// Record a committed batch
    pub fn push(&mut self, batch: ActionBatch) {
        self.batches.push(batch);
    }

    /// Take back the most recent batch, if any
    pub fn pop(&mut self) -> Option<ActionBatch> {
        self.batches.pop()
    }

    /// Number of committed moves still on the log
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Drop the whole history
    pub fn clear(&mut self) {
        self.batches.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor_step() -> ActionBatch {
        let mut batch = ActionBatch::new();
        batch.push(Action::Move {
            id: EntityId(0),
            from: Cell::new(1, 1),
            dir: Direction::Right,
        });
        batch
    }

    #[test]
    fn log_is_last_in_first_out() {
        let mut log = ActionLog::new();
        let mut push_batch = actor_step();
        push_batch.insert(
            0,
            Action::Move {
                id: EntityId(3),
                from: Cell::new(2, 1),
                dir: Direction::Right,
            },
        );

        log.push(actor_step());
        log.push(push_batch.clone());
        assert_eq!(log.len(), 2);

        assert_eq!(log.pop(), Some(push_batch));
        assert_eq!(log.pop(), Some(actor_step()));
        assert_eq!(log.pop(), None);
    }

    #[test]
    fn clear_empties_the_history() {
        let mut log = ActionLog::new();
        log.push(actor_step());
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.pop(), None);
    }

    #[test]
    fn batches_hold_effect_then_actor_move() {
        let mut batch = ActionBatch::new();
        batch.push(Action::Spikefall {
            box_id: EntityId(4),
            box_cell: Cell::new(3, 1),
            spike_id: EntityId(5),
            spike_cell: Cell::new(4, 1),
        });
        batch.push(Action::Move {
            id: EntityId(0),
            from: Cell::new(2, 1),
            dir: Direction::Right,
        });

        assert_eq!(batch.len(), MAX_BATCH_ACTIONS);
        assert!(matches!(batch[batch.len() - 1], Action::Move { .. }));
    }
}
