//! Serde model of a presentation document.
//!
//! The layout follows the Google Slides `presentations` resource: a deck holds
//! pages, pages hold page elements, and elements are shapes, tables or groups of
//! further elements. Only the parts the filler reads or writes are modelled; any
//! other key is kept verbatim in an `extra` map so a library deck survives a
//! load/save cycle untouched.

pub mod bullet;
pub mod elements;
pub mod group;
pub mod list;
pub mod page;
pub mod presentation;
pub mod shape;
pub mod table;
pub mod text;
pub mod text_element;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// Keys of a JSON object that have no dedicated field, in document order.
pub type Extra = IndexMap<String, JsonValue>;
