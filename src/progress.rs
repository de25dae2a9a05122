//! Campaign progress store
//!
//! Remembers how far into the campaign the player has come, as a small JSON
//! file. Loading tolerates a missing, unreadable, or incompatible file by
//! starting over; saving writes a temp file and renames it into place so an
//! interrupted write never destroys the old save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tui_ninelives_types::{SAVE_FILE_DEFAULT, SAVE_PATH_ENV};

/// Save format version; bump when the schema changes shape.
const SAVE_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SaveFile {
    version: u32,
    /// Campaign levels completed, counted from the front.
    completed: u32,
}

/// Campaign progress, backed by a JSON file
///
/// Progress only moves forward: finishing level N marks levels 0..=N done,
/// and replaying an earlier level never loses the later ones.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
    completed: usize,
}

impl ProgressStore {
    /// Open the store at the default location
    ///
    /// The `NINELIVES_SAVE` environment variable overrides the path.
    pub fn open_default() -> Self {
        let path = std::env::var_os(SAVE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SAVE_FILE_DEFAULT));
        Self::open(path)
    }

    /// Open the store backed by `path`, starting fresh if it is unreadable
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let completed = read_save(&path).unwrap_or(0);
        ProgressStore { path, completed }
    }

    /// Number of campaign levels completed, counted from the front
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Index of the first level the player has not finished yet
    pub fn next_level(&self) -> usize {
        self.completed
    }

    /// Record that the level at `index` was completed, and persist
    ///
    /// Persisting is best-effort: a failed write keeps the in-memory
    /// progress and logs the error rather than interrupting play.
    pub fn record_completed(&mut self, index: usize) {
        let through = index + 1;
        if through <= self.completed {
            return;
        }
        self.completed = through;
        match self.write() {
            Ok(()) => debug!(completed = self.completed, "progress saved"),
            Err(err) => warn!(path = %self.path.display(), %err, "failed to save progress"),
        }
    }

    fn write(&self) -> io::Result<()> {
        let save = SaveFile {
            version: SAVE_VERSION,
            completed: self.completed as u32,
        };
        let json = serde_json::to_string_pretty(&save).map_err(io::Error::from)?;
        write_atomic(&self.path, &json)
    }
}

/// Parse the save file, if a compatible one exists
fn read_save(path: &Path) -> Option<usize> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read save file; starting over");
            return None;
        }
    };
    let save: SaveFile = match serde_json::from_str(&data) {
        Ok(save) => save,
        Err(err) => {
            warn!(path = %path.display(), %err, "save file is malformed; starting over");
            return None;
        }
    };
    if save.version != SAVE_VERSION {
        warn!(
            path = %path.display(),
            version = save.version,
            "save file has an unsupported version; starting over"
        );
        return None;
    }
    Some(save.completed as usize)
}

/// Write `text` to `path`, replacing it only once the write has succeeded
fn write_atomic(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, text)?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("save.tmp");
    let tmp_name = format!("{file_name}.tmp");
    match path.parent() {
        Some(parent) => parent.join(tmp_name),
        None => PathBuf::from(tmp_name),
    }
}
