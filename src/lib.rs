pub mod assembler;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod dispatch;
pub mod errors;
pub mod host;
pub mod inspect;
pub mod locator;
pub mod models;
pub mod plan;
pub mod worker;
pub mod writers;

pub use assembler::{rebuild_from_saved_plan, AssemblyReport, AssemblyState, DeckAssembler};
pub use config::BuilderConfig;
pub use dispatch::{Dispatcher, FillReport, Slots};
pub use errors::{FillError, Result};
pub use host::{DeckStore, HostSession, JsonFileStore, MemoryStore, OpenMode};
pub use models::presentation::Presentation;
pub use plan::ContentPlan;
pub use worker::AssemblyWorker;
