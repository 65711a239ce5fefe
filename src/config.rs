//! Paths the builder works with, taken from the environment.

use std::env;
use std::path::PathBuf;

pub const LIBRARY_VAR: &str = "SLIDEFILL_LIBRARY";
pub const OUTPUT_VAR: &str = "SLIDEFILL_OUTPUT";
pub const PLAN_VAR: &str = "SLIDEFILL_PLAN";
pub const CATALOG_VAR: &str = "SLIDEFILL_CATALOG";

pub const DEFAULT_LIBRARY: &str = "context/slides_library.json";
pub const DEFAULT_OUTPUT: &str = "output/output.json";
pub const DEFAULT_PLAN: &str = "output/response.txt";
pub const DEFAULT_CATALOG: &str = "context/slide_context.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Deck holding one slide per template, title slide first.
    pub library_path: PathBuf,
    /// Where the assembled deck is written.
    pub output_path: PathBuf,
    /// The last content plan, kept for rebuilds.
    pub plan_path: PathBuf,
    pub catalog_path: PathBuf,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl BuilderConfig {
    /// Reads the configuration from the process environment, after loading a
    /// `.env` file if there is one.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Ignoring .env file: {}", e);
            }
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from `lookup`, falling back to the defaults
    /// for unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |name: &str, default: &str| {
            PathBuf::from(
                lookup(name)
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| default.to_string()),
            )
        };
        Self {
            library_path: path(LIBRARY_VAR, DEFAULT_LIBRARY),
            output_path: path(OUTPUT_VAR, DEFAULT_OUTPUT),
            plan_path: path(PLAN_VAR, DEFAULT_PLAN),
            catalog_path: path(CATALOG_VAR, DEFAULT_CATALOG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_unset_and_blank_variables() {
        let config = BuilderConfig::from_lookup(|name| match name {
            OUTPUT_VAR => Some("decks/q1.json".into()),
            PLAN_VAR => Some("  ".into()),
            _ => None,
        });
        assert_eq!(config.output_path, PathBuf::from("decks/q1.json"));
        assert_eq!(config.plan_path, PathBuf::from(DEFAULT_PLAN));
        assert_eq!(config.library_path, PathBuf::from(DEFAULT_LIBRARY));
        assert_eq!(BuilderConfig::default().catalog_path, PathBuf::from(DEFAULT_CATALOG));
    }
}
