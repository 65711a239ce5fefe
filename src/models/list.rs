use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Contains properties describing the look and feel of bullets at a given level of nesting.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages/text#NestingLevel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestingLevel {
    /// The style of a bullet at this level of nesting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_style: Option<JsonValue>,
}

/// A List describes the look and feel of bullets belonging to paragraphs associated with a list ID.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages/text#List
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// The ID of the list.
    pub list_id: String,

    /// A map of nesting levels (0-8) to the properties of bullets at the associated level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nesting_level: Option<IndexMap<String, NestingLevel>>,
}

impl List {
    /// A single-level list using the host's default bullet glyph.
    pub fn single_level(list_id: impl Into<String>) -> Self {
        let mut levels = IndexMap::new();
        levels.insert("0".to_string(), NestingLevel::default());
        Self {
            list_id: list_id.into(),
            nesting_level: Some(levels),
        }
    }
}
