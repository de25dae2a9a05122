//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget toolkits and instead renders into a plain framebuffer that a
//! terminal backend flushes, diffing frames to keep writes minimal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render the grid with precise aspect control (2 columns per cell)
//! - Make the scene mapping pure so it can be unit-tested without a tty

pub mod fb;
pub mod puzzle_view;
pub mod renderer;

pub use tui_ninelives_core as core;
pub use tui_ninelives_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use puzzle_view::{PuzzleView, Scene, Viewport};
pub use renderer::TerminalRenderer;
