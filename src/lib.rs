//! TUI Nine Lives (workspace facade crate).
//!
//! This package presents the `tui_ninelives::{core,level,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`. The campaign progress store lives here directly, since it sits
//! above the member crates and below the binary.

pub use tui_ninelives_core as core;
pub use tui_ninelives_input as input;
pub use tui_ninelives_level as level;
pub use tui_ninelives_term as term;
pub use tui_ninelives_types as types;

pub mod progress;

pub use progress::ProgressStore;
