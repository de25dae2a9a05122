//! Core puzzle logic module - pure, deterministic, and testable
//!
//! This module contains all the movement rules, state management, and undo
//! machinery. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same move sequence always produces the same state
//! - **Testable**: every rule is exercised by unit tests against tiny grids
//! - **Portable**: runs identically under the terminal UI, tests, and benches
//!
//! # Module Structure
//!
//! - [`entity`]: entity records and their stable ids
//! - [`index`]: the occupancy index, rebuilt from the entity table after
//!   every change
//! - [`action`]: primitive actions, batches, and the undo log
//! - [`puzzle`]: the [`Puzzle`] type tying it all together
//!
//! Resolution and gate evaluation are internal; their behavior is reachable
//! through [`Puzzle::apply_move`] and [`Puzzle::is_gate_open`].
//!
//! # Mechanics
//!
//! One actor walks a small grid in four directions and exists in one of two
//! forms. The **solid** form pushes boxes and is transformed by spikes; the
//! **spectral** form pulls boxes, ignores spikes, and is the only form the
//! exit admits, gate permitting. A box meeting a spike destroys both. Every
//! legal move commits a small action batch; undo replays batches backward,
//! exactly, any number of times.
//!
//! # Example
//!
//! ```
//! use tui_ninelives_core::Puzzle;
//! use tui_ninelives_types::{Cell, Direction, EntityKind, EntitySpec};
//!
//! // A 5x3 strip: the actor beside a box, open floor to the right.
//! let layout = vec![
//!     EntitySpec::new(EntityKind::Actor, Cell::new(1, 1)),
//!     EntitySpec::new(EntityKind::Box, Cell::new(2, 1)),
//! ];
//! let mut puzzle = Puzzle::new(layout, 5, 3).unwrap();
//!
//! // Solid form pushes the box ahead.
//! let outcome = puzzle.apply_move(Direction::Right);
//! assert!(outcome.applied);
//! assert_eq!(puzzle.actor_cell(), Cell::new(2, 1));
//! assert_eq!(
//!     puzzle.occupants_at(Cell::new(3, 1)).as_slice(),
//!     &[EntityKind::Box]
//! );
//!
//! // Undo restores the previous state exactly.
//! puzzle.undo();
//! assert_eq!(puzzle.actor_cell(), Cell::new(1, 1));
//! assert_eq!(
//!     puzzle.occupants_at(Cell::new(2, 1)).as_slice(),
//!     &[EntityKind::Box]
//! );
//! ```

pub mod action;
pub mod entity;
pub mod index;
pub mod puzzle;

mod gate;
mod resolve;

pub use tui_ninelives_types as types;

// Re-export commonly used types for convenience
pub use action::{Action, ActionBatch, ActionLog, MAX_BATCH_ACTIONS};
pub use entity::{Entity, EntityId};
pub use index::OccupancyIndex;
pub use puzzle::{MoveOutcome, Puzzle, PuzzleError};
