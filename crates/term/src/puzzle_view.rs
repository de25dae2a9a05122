//! PuzzleView: maps a core [`Puzzle`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Puzzle;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell as GridCell, EntityKind, Form};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything one frame shows: the puzzle plus session context.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub puzzle: &'a Puzzle,
    pub level_name: &'a str,
    /// 1-based position in the campaign.
    pub level_number: usize,
    pub level_count: usize,
}

/// A lightweight terminal renderer for the puzzle grid and HUD.
pub struct PuzzleView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for PuzzleView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl PuzzleView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a scene into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized only
    /// when the terminal size changes.
    pub fn render_into(&self, scene: &Scene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let puzzle = scene.puzzle;
        let grid_w = puzzle.width() as u16 * self.cell_w;
        let grid_h = puzzle.height() as u16 * self.cell_h;
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..puzzle.height() {
            for x in 0..puzzle.width() {
                let tile = tile_for(puzzle, GridCell::new(x as i8, y as i8));
                self.draw_tile(fb, start_x, start_y, x as u16, y as u16, tile);
            }
        }

        self.draw_panel(fb, scene, viewport, start_x, start_y, frame_w);

        if puzzle.is_completed() {
            let text = if scene.level_number >= scene.level_count {
                "ALL LEVELS CLEAR"
            } else {
                "LEVEL CLEAR"
            };
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a fresh framebuffer.
    pub fn render(&self, scene: &Scene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, tile: Tile) {
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        if tile.fill {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, tile.glyph, tile.style);
        } else {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', tile.style);
            fb.put_char(px, py, tile.glyph, tile.style);
        }
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        scene: &Scene<'_>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let puzzle = scene.puzzle;
        let mut y = start_y;

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_u32(panel_x + 6, y, scene.level_number as u32, value);
        fb.put_char(panel_x + 6 + digits(scene.level_number), y, '/', value);
        fb.put_u32(
            panel_x + 7 + digits(scene.level_number),
            y,
            scene.level_count as u32,
            value,
        );
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, scene.level_name, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u32(panel_x + 6, y, puzzle.moves_committed() as u32, value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "FORM", label);
        fb.put_str(panel_x + 6, y, puzzle.form().as_str(), value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "GATE", label);
        let gate = if puzzle.is_gate_open() { "open" } else { "shut" };
        fb.put_str(panel_x + 6, y, gate, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "arrows/wasd move", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "u undo   r reset", hint);
        y = y.saturating_add(1);
        if puzzle.is_completed() && scene.level_number < scene.level_count {
            fb.put_str(panel_x, y, "n next   q quit", hint);
        } else {
            fb.put_str(panel_x, y, "q quit", hint);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Glyph and style for one grid cell.
#[derive(Debug, Clone, Copy)]
struct Tile {
    glyph: char,
    style: CellStyle,
    /// Repeat the glyph across the whole tile (walls) instead of
    /// left-aligning a single character.
    fill: bool,
}

const FLOOR_BG: Rgb = Rgb::new(24, 26, 33);

fn tile(glyph: char, fg: Rgb, bold: bool, dim: bool) -> Tile {
    Tile {
        glyph,
        style: CellStyle {
            fg,
            bg: FLOOR_BG,
            bold,
            dim,
        },
        fill: false,
    }
}

/// Choose what to show on a cell with possibly several occupants.
fn tile_for(puzzle: &Puzzle, cell: GridCell) -> Tile {
    let occupants = puzzle.occupants_at(cell);
    let shown = occupants.iter().copied().min_by_key(|k| match k {
        EntityKind::Actor => 0,
        EntityKind::Box => 1,
        EntityKind::Spike => 2,
        EntityKind::Switch => 3,
        EntityKind::Exit => 4,
        EntityKind::Wall => 5,
    });

    match shown {
        None => tile('·', Rgb::new(70, 75, 90), false, true),
        Some(EntityKind::Wall) => Tile {
            glyph: '█',
            style: CellStyle {
                fg: Rgb::new(95, 100, 115),
                bg: Rgb::new(40, 42, 52),
                bold: false,
                dim: false,
            },
            fill: true,
        },
        Some(EntityKind::Actor) => match puzzle.form() {
            Form::Solid => tile('K', Rgb::new(250, 240, 150), true, false),
            Form::Spectral => tile('K', Rgb::new(150, 235, 245), false, false),
        },
        Some(EntityKind::Box) => tile('▓', Rgb::new(235, 190, 90), false, false),
        Some(EntityKind::Spike) => tile('x', Rgb::new(225, 85, 85), false, false),
        Some(EntityKind::Switch) => tile('_', Rgb::new(130, 225, 150), false, false),
        Some(EntityKind::Exit) => {
            if puzzle.is_gate_open() {
                tile('O', Rgb::new(250, 130, 250), true, false)
            } else {
                tile('O', Rgb::new(130, 70, 130), false, true)
            }
        }
    }
}

fn digits(n: usize) -> u16 {
    let mut n = n.max(1);
    let mut count = 0;
    while n > 0 {
        count += 1;
        n /= 10;
    }
    count
}
