// src/models/text_element.rs

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::bullet::Bullet;
use crate::models::Extra;

/// Represents a segment of text with consistent styling within a paragraph.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages/text#TextRun
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    /// The text content of this run. A run closing a paragraph ends with '\n'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// The styling applied to this run, kept opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<JsonValue>,
}

/// Marks the beginning of a paragraph in the text element stream.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages/text#ParagraphMarker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphMarker {
    /// The paragraph's style, kept opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<JsonValue>,
    /// The bullet for this paragraph. If unset, the paragraph doesn't have a bullet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
}

/// Text that is dynamically replaced, such as the current slide number.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages/text#AutoText
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoText {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub auto_text_type: Option<String>,
    /// Output only. The rendered content of this auto text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<JsonValue>,
}

/// The union held by a [`TextElement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextElementKind {
    TextRun(TextRun),
    ParagraphMarker(ParagraphMarker),
    AutoText(AutoText),
}

/// A single logical element in the text stream of a Shape or TableCell.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages/text#TextElement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    /// Zero-based start index, in UTF-16 code units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i32>,
    /// Zero-based end index (exclusive), in UTF-16 code units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i32>,

    #[serde(flatten)]
    pub kind: TextElementKind,

    #[serde(flatten)]
    pub extra: Extra,
}

impl TextElement {
    pub fn new(kind: TextElementKind, start: i32, end: i32) -> Self {
        Self {
            start_index: Some(start),
            end_index: Some(end),
            kind,
            extra: Extra::new(),
        }
    }
}
