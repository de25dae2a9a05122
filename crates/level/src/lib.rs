//! Level parsing module - text grids in, typed layouts out
//!
//! Levels are authored as rectangular blocks of tag characters, one per
//! cell. The parser turns a block into a [`Level`]: grid dimensions plus a
//! flat entity layout ready for puzzle construction. Parsing validates
//! shape, vocabulary, and that exactly one actor tag appears; the remaining
//! placement rules (exclusive walls, stacked boxes, and so on) are the
//! puzzle constructor's business.
//!
//! # Tag characters
//!
//! | Tag | Meaning |
//! |-----|---------|
//! | `.` | wall |
//! | ` ` | empty floor |
//! | `k` | the actor (the kat) |
//! | `x` | spike |
//! | `b` | box |
//! | `z` | switch |
//! | `p` | exit portal |
//!
//! # Example
//!
//! ```
//! use tui_ninelives_level::Level;
//!
//! let level = Level::parse("tiny", &["....", ".k p", "...."]).unwrap();
//! assert_eq!(level.width, 4);
//! assert_eq!(level.height, 3);
//! assert_eq!(level.entities.len(), 11); // 9 walls, the actor, the exit
//! ```

use thiserror::Error;
use tui_ninelives_types::{Cell, EntityKind, EntitySpec, MAX_GRID_HEIGHT, MAX_GRID_WIDTH};

pub mod campaign;

pub use campaign::campaign;

/// Wall tile tag
pub const TAG_WALL: char = '.';
/// Empty floor tag
pub const TAG_EMPTY: char = ' ';
/// Actor start tag
pub const TAG_ACTOR: char = 'k';
/// Spike tag
pub const TAG_SPIKE: char = 'x';
/// Box tag
pub const TAG_BOX: char = 'b';
/// Switch tag
pub const TAG_SWITCH: char = 'z';
/// Exit portal tag
pub const TAG_EXIT: char = 'p';

/// Rejected level text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level '{name}' has no rows")]
    Empty { name: String },
    #[error("level '{name}' row {row} is {len} cells wide, expected {expected}")]
    Ragged {
        name: String,
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("level '{name}' is {width}x{height}, larger than {}x{}", MAX_GRID_WIDTH, MAX_GRID_HEIGHT)]
    TooLarge {
        name: String,
        width: usize,
        height: usize,
    },
    #[error("level '{name}' has unknown tag '{tag}' at ({x}, {y})")]
    UnknownTag {
        name: String,
        tag: char,
        x: usize,
        y: usize,
    },
    #[error("level '{name}' has no actor tag")]
    NoActor { name: String },
    #[error("level '{name}' has {count} actor tags, expected exactly one")]
    MultipleActors { name: String, count: usize },
}

/// A parsed level: a name, grid dimensions, and the starting layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub name: String,
    pub width: u8,
    pub height: u8,
    pub entities: Vec<EntitySpec>,
}

impl Level {
    /// Parse a rectangular block of tag characters
    ///
    /// Every row must have the same width, the grid must fit the supported
    /// size, and every character must be a known tag. Entities are emitted
    /// in row-major order.
    pub fn parse(name: &str, rows: &[&str]) -> Result<Self, LevelError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(LevelError::Empty {
                name: name.to_string(),
            });
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        if width > MAX_GRID_WIDTH as usize || height > MAX_GRID_HEIGHT as usize {
            return Err(LevelError::TooLarge {
                name: name.to_string(),
                width,
                height,
            });
        }

        let mut entities = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(LevelError::Ragged {
                    name: name.to_string(),
                    row: y,
                    len,
                    expected: width,
                });
            }
            for (x, tag) in row.chars().enumerate() {
                let kind = match tag {
                    TAG_WALL => Some(EntityKind::Wall),
                    TAG_EMPTY => None,
                    TAG_ACTOR => Some(EntityKind::Actor),
                    TAG_SPIKE => Some(EntityKind::Spike),
                    TAG_BOX => Some(EntityKind::Box),
                    TAG_SWITCH => Some(EntityKind::Switch),
                    TAG_EXIT => Some(EntityKind::Exit),
                    other => {
                        return Err(LevelError::UnknownTag {
                            name: name.to_string(),
                            tag: other,
                            x,
                            y,
                        })
                    }
                };
                if let Some(kind) = kind {
                    entities.push(EntitySpec::new(kind, Cell::new(x as i8, y as i8)));
                }
            }
        }

        let actors = entities
            .iter()
            .filter(|e| e.kind == EntityKind::Actor)
            .count();
        if actors == 0 {
            return Err(LevelError::NoActor {
                name: name.to_string(),
            });
        }
        if actors > 1 {
            return Err(LevelError::MultipleActors {
                name: name.to_string(),
                count: actors,
            });
        }

        Ok(Level {
            name: name.to_string(),
            width: width as u8,
            height: height as u8,
            entities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_tag_into_its_kind() {
        let level = Level::parse("tags", &["kxbzp. "]).expect("all tags are known");
        let kinds: Vec<EntityKind> = level.entities.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Actor,
                EntityKind::Spike,
                EntityKind::Box,
                EntityKind::Switch,
                EntityKind::Exit,
                EntityKind::Wall,
            ]
        );
        // The trailing space emits nothing.
        assert_eq!(level.width, 7);
        assert_eq!(level.entities.len(), 6);
    }

    #[test]
    fn entities_come_out_in_row_major_order() {
        let level = Level::parse("order", &["bk", " b"]).expect("valid");
        assert_eq!(
            level.entities,
            vec![
                EntitySpec::new(EntityKind::Box, Cell::new(0, 0)),
                EntitySpec::new(EntityKind::Actor, Cell::new(1, 0)),
                EntitySpec::new(EntityKind::Box, Cell::new(1, 1)),
            ]
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            Level::parse("none", &[]),
            Err(LevelError::Empty { .. })
        ));
        assert!(matches!(
            Level::parse("none", &[""]),
            Err(LevelError::Empty { .. })
        ));
    }

    #[test]
    fn rejects_actorless_and_crowded_grids() {
        assert_eq!(
            Level::parse("nobody", &["b p"]),
            Err(LevelError::NoActor {
                name: "nobody".to_string(),
            })
        );
        assert_eq!(
            Level::parse("crowd", &["k k", " k "]),
            Err(LevelError::MultipleActors {
                name: "crowd".to_string(),
                count: 3,
            })
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Level::parse("ragged", &["....", "..."]).unwrap_err();
        assert_eq!(
            err,
            LevelError::Ragged {
                name: "ragged".to_string(),
                row: 1,
                len: 3,
                expected: 4,
            }
        );
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = Level::parse("mystery", &["..", ".m"]).unwrap_err();
        assert_eq!(
            err,
            LevelError::UnknownTag {
                name: "mystery".to_string(),
                tag: 'm',
                x: 1,
                y: 1,
            }
        );
    }

    #[test]
    fn rejects_oversized_grids() {
        let wide = ".".repeat(MAX_GRID_WIDTH as usize + 1);
        assert!(matches!(
            Level::parse("wide", &[wide.as_str()]),
            Err(LevelError::TooLarge { .. })
        ));
    }
}
