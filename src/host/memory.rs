use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{normalize, DeckStore, OpenMode};
use crate::errors::HostError;
use crate::models::presentation::Presentation;

#[derive(Debug, Default)]
struct Inner {
    decks: HashMap<PathBuf, Presentation>,
    saves: HashMap<PathBuf, usize>,
    history: HashMap<PathBuf, Vec<Presentation>>,
    recording: bool,
    releases: usize,
}

/// An in-process host. Clones share the same decks, so a test can keep a
/// handle while the session owns another.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, deck: Presentation) {
        self.lock().decks.insert(normalize(&path.into()), deck);
    }

    /// The deck currently stored at `path`.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<Presentation> {
        self.lock().decks.get(&normalize(path.as_ref())).cloned()
    }

    /// Number of saves made to `path`.
    pub fn save_count(&self, path: impl AsRef<Path>) -> usize {
        self.lock()
            .saves
            .get(&normalize(path.as_ref()))
            .copied()
            .unwrap_or(0)
    }

    /// Every version saved to `path`, oldest first. Only recorded once
    /// [`MemoryStore::record_history`] is on.
    pub fn history(&self, path: impl AsRef<Path>) -> Vec<Presentation> {
        self.lock()
            .history
            .get(&normalize(path.as_ref()))
            .cloned()
            .unwrap_or_default()
    }

    /// Keeps a copy of every saved version from now on.
    pub fn record_history(&self) {
        self.lock().recording = true;
    }

    pub fn release_count(&self) -> usize {
        self.lock().releases
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeckStore for MemoryStore {
    fn open(&mut self, path: &Path, _mode: OpenMode) -> Result<Presentation, HostError> {
        self.lock()
            .decks
            .get(&normalize(path))
            .cloned()
            .ok_or(HostError::NotFound)
    }

    fn save(&mut self, path: &Path, deck: &Presentation) -> Result<(), HostError> {
        let key = normalize(path);
        let mut inner = self.lock();
        inner.decks.insert(key.clone(), deck.clone());
        *inner.saves.entry(key.clone()).or_insert(0) += 1;
        if inner.recording {
            inner.history.entry(key).or_default().push(deck.clone());
        }
        Ok(())
    }

    fn key(&self, path: &Path) -> PathBuf {
        normalize(path)
    }

    fn release(&mut self) -> Result<(), HostError> {
        self.lock().releases += 1;
        Ok(())
    }
}
