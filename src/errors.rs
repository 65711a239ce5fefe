use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that abort a deck assembly.
///
/// Missing or mismatched shapes are not errors: the field writers absorb them.
/// Everything here either invalidates the whole plan or leaves the host unable
/// to continue.
#[derive(Error, Debug)]
pub enum FillError {
    /// The content plan references a slide type no filler knows about.
    #[error("Unknown slide type: {0}")]
    UnknownTemplate(u32),

    /// The content plan is not valid JSON, even after trailing-comma cleanup.
    #[error("Failed to parse content plan: {0}")]
    PlanJson(#[source] serde_json::Error),

    /// The content plan parsed but cannot be built.
    #[error("Invalid content plan: {0}")]
    InvalidPlan(String),

    /// The template catalog could not be parsed.
    #[error("Failed to parse template catalog: {0}")]
    CatalogJson(#[source] serde_json::Error),

    /// The presentation host failed an operation on a deck.
    #[error("Host failed to {operation} '{}': {source}", .path.display())]
    Host {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: HostError,
    },

    /// A library slide index beyond the end of the library deck.
    #[error("Library slide {index} does not exist (library has {count} slides)")]
    SlideOutOfRange { index: usize, count: usize },

    /// An output slide position that is not in the output deck.
    #[error("Output slide {position} does not exist (deck has {count} slides)")]
    NoSuchSlide { position: usize, count: usize },

    /// An I/O error outside of host operations, e.g. reading a plan file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The assembly worker thread is gone.
    #[error("Assembly worker unavailable: {0}")]
    Worker(String),
}

/// Failure reported by a [`crate::host::DeckStore`] implementation.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deck document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no such deck")]
    NotFound,

    #[error("deck is open read-only")]
    ReadOnly,

    #[error("session already released")]
    Released,
}

impl FillError {
    pub fn host(operation: &'static str, path: impl Into<PathBuf>, source: HostError) -> Self {
        Self::Host {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// A type alias for `Result<T, FillError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, FillError>;
