//! Library and output decks, and the slide copy between them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::errors::{FillError, Result};
use crate::host::{DeckStore, HostSession, OpenMode};
use crate::models::page::Page;
use crate::models::presentation::Presentation;

/// The read-only source of template slides.
#[derive(Debug, Clone)]
pub struct LibraryDeck {
    path: PathBuf,
    deck: Presentation,
}

impl LibraryDeck {
    pub fn open<S: DeckStore>(
        session: &mut HostSession<S>,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let deck = session.open(path, OpenMode::ReadOnly)?;
        log::debug!("Library {} has {} slides", path.display(), deck.slide_count());
        Ok(Self {
            path: path.to_path_buf(),
            deck,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.deck.slide_count()
    }

    /// Slide at 0-based `index`.
    pub fn slide(&self, index: usize) -> Result<&Page> {
        self.deck.slide(index).ok_or(FillError::SlideOutOfRange {
            index,
            count: self.slide_count(),
        })
    }

    pub fn close<S: DeckStore>(self, session: &mut HostSession<S>) {
        session.close_read_only(&self.path);
    }
}

/// The deck being assembled.
#[derive(Debug, Clone)]
pub struct OutputDeck {
    path: PathBuf,
    deck: Presentation,
}

impl OutputDeck {
    /// Saves a copy of the library with every slide removed at `output`.
    /// Masters, layouts and all other deck-level data are kept.
    pub fn create<S: DeckStore>(
        session: &mut HostSession<S>,
        library: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<Self> {
        let library = LibraryDeck::open(session, library)?;
        let mut deck = library.deck.clone();
        deck.slides_mut().clear();

        let output = Self {
            path: output.as_ref().to_path_buf(),
            deck,
        };
        let saved = output.save(session);
        library.close(session);
        saved?;
        Ok(output)
    }

    pub fn open<S: DeckStore>(
        session: &mut HostSession<S>,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let deck = session.open(path, OpenMode::ReadWrite)?;
        Ok(Self {
            path: path.to_path_buf(),
            deck,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn slide_count(&self) -> usize {
        self.deck.slide_count()
    }

    /// Appends a copy of library slide `index` (0-based) and returns its
    /// 1-based position in this deck. The copy gets a page id that no other
    /// slide of this deck uses.
    pub fn copy_from(&mut self, library: &LibraryDeck, index: usize) -> Result<usize> {
        let mut page = library.slide(index)?.clone();
        page.object_id = self.fresh_page_id(&page.object_id);
        let slides = self.deck.slides_mut();
        slides.push(page);
        Ok(slides.len())
    }

    /// Copies several library slides in order.
    pub fn copy_many(&mut self, library: &LibraryDeck, indices: &[usize]) -> Result<Vec<usize>> {
        indices
            .iter()
            .map(|&index| self.copy_from(library, index))
            .collect()
    }

    /// Slide at 1-based `position`.
    pub fn slide(&self, position: usize) -> Result<&Page> {
        let count = self.slide_count();
        position
            .checked_sub(1)
            .and_then(|i| self.deck.slide(i))
            .ok_or(FillError::NoSuchSlide { position, count })
    }

    pub fn slide_mut(&mut self, position: usize) -> Result<&mut Page> {
        let count = self.slide_count();
        position
            .checked_sub(1)
            .and_then(|i| self.deck.slide_mut(i))
            .ok_or(FillError::NoSuchSlide { position, count })
    }

    pub fn save<S: DeckStore>(&self, session: &mut HostSession<S>) -> Result<()> {
        session.save(&self.path, &self.deck)
    }

    /// Ends editing and hands back the document.
    pub fn close(self) -> Presentation {
        log::debug!("Closed {}", self.path.display());
        self.deck
    }

    fn fresh_page_id(&self, base: &str) -> String {
        let taken: HashSet<&str> = self
            .deck
            .slides
            .iter()
            .flatten()
            .map(|p| p.object_id.as_str())
            .collect();
        let mut n = self.slide_count() + 1;
        loop {
            let candidate = format!("{base}_{n}");
            if !taken.contains(candidate.as_str()) {
                return candidate;
            }
            n += 1;
        }
    }
}
