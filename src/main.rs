//! Terminal Nine Lives runner (default binary).
//!
//! This is the playable gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). Play is turn-based, so the loop blocks on
//! input; nothing moves until a key arrives.

use anyhow::{ensure, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_ninelives::core::Puzzle;
use tui_ninelives::input::{handle_key_event, should_quit};
use tui_ninelives::level::{campaign, Level};
use tui_ninelives::progress::ProgressStore;
use tui_ninelives::term::{FrameBuffer, PuzzleView, Scene, TerminalRenderer, Viewport};
use tui_ninelives::types::Command;

fn main() -> Result<()> {
    init_tracing();

    let levels = campaign().context("built-in campaign failed to parse")?;
    ensure!(!levels.is_empty(), "campaign has no levels");
    let progress = ProgressStore::open_default();
    info!(
        levels = levels.len(),
        completed = progress.completed(),
        "campaign loaded"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &levels, progress);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to stderr, and only when `RUST_LOG` asks for it
///
/// The alternate screen owns stdout; with logging opt-in, ordinary play
/// stays clean and `RUST_LOG=debug ... 2>log` captures everything.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(term: &mut TerminalRenderer, levels: &[Level], mut progress: ProgressStore) -> Result<()> {
    let mut current = progress.next_level().min(levels.len() - 1);
    let mut puzzle = build_puzzle(&levels[current])?;

    let view = PuzzleView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let scene = Scene {
            puzzle: &puzzle,
            level_name: &levels[current].name,
            level_number: current + 1,
            level_count: levels.len(),
        };
        view.render_into(&scene, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // One key, one turn.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(command) = handle_key_event(key) else {
                    continue;
                };
                match command {
                    Command::Move(dir) => {
                        if puzzle.apply_move(dir).completed {
                            progress.record_completed(current);
                        }
                    }
                    Command::Undo => puzzle.undo(),
                    Command::Reset => puzzle.reset(),
                    Command::Next => {
                        if puzzle.is_completed() && current + 1 < levels.len() {
                            current += 1;
                            puzzle = build_puzzle(&levels[current])?;
                        }
                    }
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn build_puzzle(level: &Level) -> Result<Puzzle> {
    Puzzle::new(level.entities.clone(), level.width, level.height)
        .with_context(|| format!("level '{}' is not a valid layout", level.name))
}
