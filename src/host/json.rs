use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::{normalize, DeckStore, OpenMode};
use crate::errors::HostError;
use crate::models::presentation::Presentation;

/// Decks stored as indented presentation JSON documents on the local
/// filesystem.
#[derive(Debug, Default, Clone)]
pub struct JsonFileStore;

impl JsonFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl DeckStore for JsonFileStore {
    fn open(&mut self, path: &Path, mode: OpenMode) -> Result<Presentation, HostError> {
        log::debug!("Opening {} ({:?})", path.display(), mode);
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&mut self, path: &Path, deck: &Presentation) -> Result<(), HostError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(deck)?;

        // Write next to the target and rename, so a crash never leaves a torn deck.
        let tmp = temp_path(path);
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// The real path of the deck. A file that does not exist yet is keyed by
    /// its resolved parent directory.
    fn key(&self, path: &Path) -> PathBuf {
        if let Ok(real) = fs::canonicalize(path) {
            return real;
        }
        let absolute = env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf());
        let normal = normalize(&absolute);
        if let Ok(real) = fs::canonicalize(&normal) {
            return real;
        }
        match (normal.parent().map(fs::canonicalize), normal.file_name()) {
            (Some(Ok(parent)), Some(name)) => parent.join(name),
            _ => normal,
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
