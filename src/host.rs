//! The presentation host: where decks are opened, saved and released.
//!
//! A [`DeckStore`] is the host environment itself (a directory of JSON deck
//! documents, or an in-memory map for tests). A [`HostSession`] is the single
//! owner of a store for the length of one run; it is the only way deck
//! operations reach the store, and it releases the store exactly once, even
//! when the run fails half-way.

pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::errors::{FillError, HostError, Result};
use crate::models::presentation::Presentation;

/// How a deck is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    ReadOnly,
    ReadWrite,
}

/// Storage operations the host environment provides.
pub trait DeckStore {
    /// Loads the deck stored at `path`.
    fn open(&mut self, path: &Path, mode: OpenMode) -> std::result::Result<Presentation, HostError>;

    /// Persists `deck` at `path`, replacing whatever was there.
    fn save(&mut self, path: &Path, deck: &Presentation) -> std::result::Result<(), HostError>;

    /// The identity of the deck at `path`. Two paths that reach the same
    /// deck must give the same key.
    fn key(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }

    /// Tears the host down. Called once per session.
    fn release(&mut self) -> std::result::Result<(), HostError> {
        Ok(())
    }
}

/// Scoped, single-owner access to a [`DeckStore`].
pub struct HostSession<S: DeckStore> {
    store: S,
    read_only: HashSet<PathBuf>,
    released: bool,
}

impl<S: DeckStore> HostSession<S> {
    pub fn new(store: S) -> Self {
        log::debug!("Host session acquired");
        Self {
            store,
            read_only: HashSet::new(),
            released: false,
        }
    }

    pub fn open(&mut self, path: &Path, mode: OpenMode) -> Result<Presentation> {
        self.ensure_live("open", path)?;
        let deck = self
            .store
            .open(path, mode)
            .map_err(|e| FillError::host("open", path, e))?;
        if mode == OpenMode::ReadOnly {
            self.read_only.insert(self.store.key(path));
        }
        Ok(deck)
    }

    pub fn save(&mut self, path: &Path, deck: &Presentation) -> Result<()> {
        self.ensure_live("save", path)?;
        if self.read_only.contains(&self.store.key(path)) {
            return Err(FillError::host("save", path, HostError::ReadOnly));
        }
        self.store
            .save(path, deck)
            .map_err(|e| FillError::host("save", path, e))
    }

    /// Forgets a read-only deck once the caller is done with it.
    pub fn close_read_only(&mut self, path: &Path) {
        let key = self.store.key(path);
        self.read_only.remove(&key);
    }

    /// Releases the host now and reports the outcome. Dropping the session
    /// does the same but can only log a failure.
    pub fn close(mut self) -> Result<()> {
        self.release_once()
    }

    fn release_once(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        self.read_only.clear();
        log::debug!("Host session released");
        self.store
            .release()
            .map_err(|e| FillError::host("release", PathBuf::new(), e))
    }

    fn ensure_live(&self, operation: &'static str, path: &Path) -> Result<()> {
        if self.released {
            Err(FillError::host(operation, path, HostError::Released))
        } else {
            Ok(())
        }
    }
}

impl<S: DeckStore> Drop for HostSession<S> {
    fn drop(&mut self) {
        if let Err(e) = self.release_once() {
            log::warn!("{}", e);
        }
    }
}

/// Resolves `.` and `..` components without touching the filesystem.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_resolves_dots_lexically() {
        assert_eq!(normalize(Path::new("a/./b/../c.json")), Path::new("a/c.json"));
        assert_eq!(normalize(Path::new("../a/../../b")), Path::new("../../b"));
        assert_eq!(normalize(Path::new("/../x")), Path::new("/x"));
    }

    #[test]
    fn session_releases_once_on_drop() {
        let store = MemoryStore::new();
        {
            let _session = HostSession::new(store.clone());
        }
        assert_eq!(store.release_count(), 1);
    }

    #[test]
    fn explicit_close_does_not_release_twice() {
        let store = MemoryStore::new();
        let session = HostSession::new(store.clone());
        session.close().unwrap();
        assert_eq!(store.release_count(), 1);
    }

    #[test]
    fn read_only_decks_cannot_be_saved_over() {
        let store = MemoryStore::new();
        store.insert("lib.json", Presentation::default());
        let mut session = HostSession::new(store.clone());

        let deck = session.open(Path::new("lib.json"), OpenMode::ReadOnly).unwrap();
        let err = session.save(Path::new("lib.json"), &deck).unwrap_err();
        assert!(matches!(
            err,
            FillError::Host {
                source: HostError::ReadOnly,
                ..
            }
        ));

        session.close_read_only(Path::new("lib.json"));
        session.save(Path::new("lib.json"), &deck).unwrap();
    }

    #[test]
    fn aliased_paths_share_the_read_only_guard() {
        let store = MemoryStore::new();
        store.insert("decks/lib.json", Presentation::default());
        let mut session = HostSession::new(store.clone());

        let deck = session
            .open(Path::new("decks/lib.json"), OpenMode::ReadOnly)
            .unwrap();
        let err = session
            .save(Path::new("decks/./sub/../lib.json"), &deck)
            .unwrap_err();
        assert!(matches!(
            err,
            FillError::Host {
                operation: "save",
                source: HostError::ReadOnly,
                ..
            }
        ));
        assert_eq!(store.save_count("decks/lib.json"), 0);
    }

    #[test]
    fn missing_decks_report_the_path() {
        let mut session = HostSession::new(MemoryStore::new());
        let err = session
            .open(Path::new("nowhere.json"), OpenMode::ReadWrite)
            .unwrap_err();
        assert!(err.to_string().contains("nowhere.json"));
        assert!(err.to_string().contains("open"));
    }
}
