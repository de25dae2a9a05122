//! Terminal input module
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] values for the
//! session loop to act on. The game is turn-based, so there is no key
//! repeat handling; one key press is one command.

pub mod map;

pub use tui_ninelives_types as types;

pub use map::{handle_key_event, should_quit};
