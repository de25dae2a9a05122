//! Puzzle state and the public move/undo/reset surface
//!
//! A [`Puzzle`] owns the entity table, the derived occupancy index, the
//! cached gate state, and the undo log. Construction is the only fallible
//! operation; once a puzzle exists, every move either commits atomically or
//! leaves the state untouched.

use arrayvec::ArrayVec;
use thiserror::Error;
use tracing::{debug, info, trace};
use tui_ninelives_types::{
    Cell, Direction, EntityKind, EntitySpec, Form, MAX_GRID_HEIGHT, MAX_GRID_WIDTH, MAX_OCCUPANTS,
};

use crate::action::{Action, ActionLog};
use crate::entity::{Entity, EntityId};
use crate::gate;
use crate::index::OccupancyIndex;
use crate::resolve::{self, Resolution};

/// Rejected starting layouts
///
/// These are the only errors the engine produces. Everything after
/// construction is an ordinary outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("grid {width}x{height} is empty or larger than {}x{}", MAX_GRID_WIDTH, MAX_GRID_HEIGHT)]
    InvalidDimensions { width: u8, height: u8 },
    #[error("{kind} at ({x}, {y}) lies outside the grid")]
    OutOfBounds { kind: EntityKind, x: i8, y: i8 },
    #[error("layout has no actor")]
    NoActor,
    #[error("layout has {count} actors, expected exactly one")]
    MultipleActors { count: usize },
    #[error("wall at ({x}, {y}) shares its cell with another entity")]
    WallShared { x: i8, y: i8 },
    #[error("two boxes start at ({x}, {y})")]
    BoxOverlap { x: i8, y: i8 },
    #[error("box at ({x}, {y}) starts on the exit")]
    BoxOnExit { x: i8, y: i8 },
    #[error("two {kind} entities start at ({x}, {y})")]
    KindStacked { kind: EntityKind, x: i8, y: i8 },
}

/// What one call to [`Puzzle::apply_move`] did
///
/// `applied` reports whether a batch was committed. The winning move commits
/// nothing, so it reports `applied: false, completed: true`; a rejected move
/// reports both flags false (and `completed: true` once the puzzle is
/// already solved).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub applied: bool,
    pub completed: bool,
}

/// One puzzle instance: a validated layout plus everything derived from it
#[derive(Debug, Clone)]
pub struct Puzzle {
    width: u8,
    height: u8,
    /// Validated starting layout, kept verbatim for `reset`
    layout: Vec<EntitySpec>,
    entities: Vec<Entity>,
    form: Form,
    index: OccupancyIndex,
    gate_open: bool,
    log: ActionLog,
    completed: bool,
}

impl Puzzle {
    /// Validate a starting layout and build the puzzle
    ///
    /// The layout must fit the grid, contain exactly one actor, keep walls
    /// alone in their cells, never stack boxes on each other or on the
    /// exit, and place at most one entity of each kind on any cell. Any
    /// violation is reported as a [`PuzzleError`] and nothing is built.
    pub fn new(layout: Vec<EntitySpec>, width: u8, height: u8) -> Result<Self, PuzzleError> {
        Self::validate(&layout, width, height)?;
        Ok(Self::build(layout, width, height))
    }

    fn validate(layout: &[EntitySpec], width: u8, height: u8) -> Result<(), PuzzleError> {
        if width == 0 || height == 0 || width > MAX_GRID_WIDTH || height > MAX_GRID_HEIGHT {
            return Err(PuzzleError::InvalidDimensions { width, height });
        }
        for spec in layout {
            let Cell { x, y } = spec.cell;
            if x < 0 || y < 0 || x as u8 >= width || y as u8 >= height {
                return Err(PuzzleError::OutOfBounds {
                    kind: spec.kind,
                    x,
                    y,
                });
            }
        }

        let actors = layout
            .iter()
            .filter(|s| s.kind == EntityKind::Actor)
            .count();
        if actors == 0 {
            return Err(PuzzleError::NoActor);
        }
        if actors > 1 {
            return Err(PuzzleError::MultipleActors { count: actors });
        }

        for wall in layout.iter().filter(|s| s.kind == EntityKind::Wall) {
            if layout.iter().filter(|s| s.cell == wall.cell).count() > 1 {
                return Err(PuzzleError::WallShared {
                    x: wall.cell.x,
                    y: wall.cell.y,
                });
            }
        }

        for (i, a) in layout.iter().enumerate() {
            if a.kind != EntityKind::Box {
                continue;
            }
            let overlapping_box = layout[i + 1..]
                .iter()
                .any(|b| b.kind == EntityKind::Box && b.cell == a.cell);
            if overlapping_box {
                return Err(PuzzleError::BoxOverlap {
                    x: a.cell.x,
                    y: a.cell.y,
                });
            }
            let on_exit = layout
                .iter()
                .any(|s| s.kind == EntityKind::Exit && s.cell == a.cell);
            if on_exit {
                return Err(PuzzleError::BoxOnExit {
                    x: a.cell.x,
                    y: a.cell.y,
                });
            }
        }

        // At most one entity of each kind per cell; with the wall and box
        // rules this keeps every cell within the index's MAX_OCCUPANTS.
        for (i, a) in layout.iter().enumerate() {
            let stacked = layout[i + 1..]
                .iter()
                .any(|b| b.kind == a.kind && b.cell == a.cell);
            if stacked {
                return Err(PuzzleError::KindStacked {
                    kind: a.kind,
                    x: a.cell.x,
                    y: a.cell.y,
                });
            }
        }

        Ok(())
    }

    /// Build from an already validated layout
    fn build(layout: Vec<EntitySpec>, width: u8, height: u8) -> Self {
        // The actor goes into slot 0; ids follow table order.
        let actor_first = layout
            .iter()
            .filter(|s| s.kind == EntityKind::Actor)
            .chain(layout.iter().filter(|s| s.kind != EntityKind::Actor));
        let entities: Vec<Entity> = actor_first
            .enumerate()
            .map(|(i, spec)| Entity::new(EntityId(i as u32), spec.kind, spec.cell))
            .collect();

        let mut index = OccupancyIndex::new(width, height);
        index.rebuild(&entities);
        let gate_open = gate::evaluate(&entities);

        Puzzle {
            width,
            height,
            layout,
            entities,
            form: Form::Solid,
            index,
            gate_open,
            log: ActionLog::new(),
            completed: false,
        }
    }

    /// The actor entity
    fn actor(&self) -> &Entity {
        // Slot 0 is the actor; construction puts it there and nothing
        // ever removes it from the table.
        &self.entities[0]
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Re-derive the index and the gate from the entity table
    fn refresh(&mut self) {
        self.index.rebuild(&self.entities);
        let open = gate::evaluate(&self.entities);
        if open != self.gate_open {
            debug!(open, "gate flipped");
        }
        self.gate_open = open;
    }

    /// Attempt to move the actor one cell in `dir`
    ///
    /// A blocked move changes nothing and reports `applied: false`. A legal
    /// move commits its whole batch, then refreshes the index and the gate.
    /// The move that leaves through the exit changes nothing either; it only
    /// flips the puzzle into its completed state, after which every further
    /// move is rejected.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.completed {
            return MoveOutcome {
                applied: false,
                completed: true,
            };
        }

        let actor = *self.actor();
        let resolution = resolve::resolve(
            &self.entities,
            &self.index,
            &actor,
            self.form,
            self.gate_open,
            dir,
        );
        match resolution {
            Resolution::Reject => {
                trace!(dir = dir.as_str(), "move rejected");
                MoveOutcome {
                    applied: false,
                    completed: false,
                }
            }
            Resolution::Complete => {
                self.completed = true;
                info!(moves = self.log.len(), "puzzle solved");
                MoveOutcome {
                    applied: false,
                    completed: true,
                }
            }
            Resolution::Commit(batch) => {
                for action in &batch {
                    self.apply(action);
                }
                self.log.push(batch);
                self.refresh();
                debug!(dir = dir.as_str(), moves = self.log.len(), "move committed");
                MoveOutcome {
                    applied: true,
                    completed: false,
                }
            }
        }
    }

    fn apply(&mut self, action: &Action) {
        match *action {
            Action::Move { id, from, dir } => {
                let to = from.step(dir);
                if let Some(entity) = self.entity_mut(id) {
                    entity.cell = to;
                }
            }
            Action::Spikefall {
                box_id, spike_id, ..
            } => {
                self.entities
                    .retain(|e| e.id != box_id && e.id != spike_id);
            }
            Action::Rebirth { .. } => {
                self.form = Form::Spectral;
            }
        }
    }

    fn revert(&mut self, action: &Action) {
        match *action {
            Action::Move { id, from, .. } => {
                if let Some(entity) = self.entity_mut(id) {
                    entity.cell = from;
                }
            }
            Action::Spikefall {
                box_id,
                box_cell,
                spike_id,
                spike_cell,
            } => {
                // Fresh records under the destroyed ids, so references in
                // older batches resolve again.
                self.entities
                    .push(Entity::new(box_id, EntityKind::Box, box_cell));
                self.entities
                    .push(Entity::new(spike_id, EntityKind::Spike, spike_cell));
            }
            Action::Rebirth { .. } => {
                self.form = Form::Solid;
            }
        }
    }

    /// Revert the most recent committed move
    ///
    /// Reverts the batch back-to-front, so compound effects unwind in the
    /// exact reverse of how they applied. With nothing on the log this is a
    /// no-op, as it is once the puzzle is completed.
    pub fn undo(&mut self) {
        if self.completed {
            return;
        }
        let Some(batch) = self.log.pop() else {
            trace!("undo with empty log ignored");
            return;
        };
        for action in batch.iter().rev() {
            self.revert(action);
        }
        self.refresh();
        debug!(moves = self.log.len(), "move undone");
    }

    /// Rebuild the starting state from the stored layout
    ///
    /// Discards the undo log, the current entity positions, the form, and
    /// any completed flag.
    pub fn reset(&mut self) {
        let layout = std::mem::take(&mut self.layout);
        *self = Self::build(layout, self.width, self.height);
        debug!("puzzle reset");
    }

    /// Whether every switch currently holds a box
    pub fn is_gate_open(&self) -> bool {
        self.gate_open
    }

    /// Whether the actor has left through the exit
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Kinds of every entity standing on `cell`, in stable id order
    ///
    /// Out-of-bounds cells report an empty list.
    pub fn occupants_at(&self, cell: Cell) -> ArrayVec<EntityKind, MAX_OCCUPANTS> {
        self.index
            .occupants(cell)
            .iter()
            .filter_map(|id| self.entities.iter().find(|e| e.id == *id))
            .map(|e| e.kind)
            .collect()
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// The actor's current form
    pub fn form(&self) -> Form {
        self.form
    }

    /// The actor's current cell
    pub fn actor_cell(&self) -> Cell {
        self.actor().cell
    }

    /// Number of committed moves available to undo
    pub fn moves_committed(&self) -> usize {
        self.log.len()
    }

    /// Every live entity, in table order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}
