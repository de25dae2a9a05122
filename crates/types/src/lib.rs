//! Shared types module - pure data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, making them usable
//! in any context (puzzle logic, level parsing, input mapping, UI rendering).
//!
//! # Coordinates
//!
//! Grids are small rectangles addressed by [`Cell`] coordinates:
//!
//! - **x**: column, 0 at the left edge, grows rightward
//! - **y**: row, 0 at the top edge, grows downward
//!
//! Coordinates are `i8` so that stepping off any edge of the largest legal
//! grid still produces a representable (out-of-bounds) cell rather than a
//! wrap-around.
//!
//! # Grid Limits
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_GRID_WIDTH` | 64 | Widest grid a puzzle will accept |
//! | `MAX_GRID_HEIGHT` | 64 | Tallest grid a puzzle will accept |
//! | `MAX_OCCUPANTS` | 4 | Upper bound of entities sharing one cell |
//!
//! # Save File
//!
//! Campaign progress is stored next to the working directory by default;
//! `SAVE_PATH_ENV` names the environment variable that overrides the
//! location.
//!
//! # Examples
//!
//! ```
//! use tui_ninelives_types::{Cell, Direction, EntityKind, Form};
//!
//! let cell = Cell::new(3, 2);
//! assert_eq!(cell.step(Direction::Right), Cell::new(4, 2));
//! assert_eq!(cell.step(Direction::Up), Cell::new(3, 1));
//!
//! // A direction knows its own reverse.
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // Forms and kinds carry readable names for logs and the HUD.
//! assert_eq!(Form::Spectral.as_str(), "spectral");
//! assert_eq!(EntityKind::Switch.as_str(), "switch");
//! ```

/// Widest grid a puzzle will accept, in cells
pub const MAX_GRID_WIDTH: u8 = 64;

/// Tallest grid a puzzle will accept, in cells
pub const MAX_GRID_HEIGHT: u8 = 64;

/// Upper bound of entities that may share one cell
///
/// Walls hold their cells exclusively and no cell holds two entities of
/// the same kind, so a cell tops out at the actor, a spike, a switch,
/// and either a box or the exit.
pub const MAX_OCCUPANTS: usize = 4;

/// Default progress-save file name, relative to the working directory
pub const SAVE_FILE_DEFAULT: &str = "ninelives-save.json";

/// Environment variable that overrides the progress-save path
pub const SAVE_PATH_ENV: &str = "NINELIVES_SAVE";

/// A grid coordinate pair
///
/// `x` is the column (leftmost is 0), `y` is the row (topmost is 0).
/// Out-of-bounds cells are representable on purpose; bounds checking
/// is the occupancy index's job, not the coordinate's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Cell { x, y }
    }

    /// The adjacent cell one step in `dir`
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_ninelives_types::{Cell, Direction};
    ///
    /// assert_eq!(Cell::new(0, 0).step(Direction::Down), Cell::new(0, 1));
    /// assert_eq!(Cell::new(0, 0).step(Direction::Left), Cell::new(-1, 0));
    /// ```
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four cardinal movement directions
///
/// Moves are strictly orthogonal; there are no diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset as `(dx, dy)` with y growing downward
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The reverse direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_ninelives_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Convert to lowercase string for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// The actor's two modes of being
///
/// - **Solid**: the living cat; pushes boxes, dies on spikes
/// - **Spectral**: the ghost; pulls boxes, drifts over spikes, may exit
///
/// The transition only ever runs Solid → Spectral during play; undo is the
/// single way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    Solid,
    Spectral,
}

impl Form {
    /// Convert to lowercase string for logs and the HUD
    pub fn as_str(&self) -> &'static str {
        match self {
            Form::Solid => "solid",
            Form::Spectral => "spectral",
        }
    }
}

/// Everything that can occupy a grid cell
///
/// - **Actor**: the player; exactly one per puzzle
/// - **Wall**: impassable and exclusive in its cell
/// - **Spike**: lethal to the solid actor, inert to the spectral one
/// - **Box**: movable; pushed when solid, pulled when spectral
/// - **Switch**: a floor pad; the gate opens while every switch holds a box
/// - **Exit**: the goal cell; enterable only in spectral form with the gate open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Actor,
    Wall,
    Spike,
    Box,
    Switch,
    Exit,
}

impl EntityKind {
    /// Convert to lowercase string for logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Actor => "actor",
            EntityKind::Wall => "wall",
            EntityKind::Spike => "spike",
            EntityKind::Box => "box",
            EntityKind::Switch => "switch",
            EntityKind::Exit => "exit",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entity placement in a puzzle's starting layout
///
/// A puzzle is constructed from a flat list of these; the constructor
/// validates the layout and assigns runtime identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySpec {
    pub kind: EntityKind,
    pub cell: Cell,
}

impl EntitySpec {
    pub const fn new(kind: EntityKind, cell: Cell) -> Self {
        EntitySpec { kind, cell }
    }
}

/// Player commands after key mapping
///
/// These are what the input layer produces and the session loop consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Attempt a move in the given direction
    Move(Direction),
    /// Revert the most recent committed move
    Undo,
    /// Restart the current level from its initial layout
    Reset,
    /// Advance to the next level after a win
    Next,
}
