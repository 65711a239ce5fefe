use serde::{Deserialize, Serialize};

use crate::models::text::TextContent;
use crate::models::Extra;

/// A PageElement kind representing a generic shape. Every shape has a text
/// frame; lines, images and other graphics are separate element kinds.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages#Shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// The type of the shape (`TEXT_BOX`, `RECTANGLE`, ...). Kept as the raw enum
    /// name since library decks use far more geometries than the filler cares about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<String>,

    /// The text content of the shape. Absent while the shape is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,

    /// Shape properties, placeholder link and the rest.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Shape {
    /// Text content, created empty on first write.
    pub fn text_mut(&mut self) -> &mut TextContent {
        self.text.get_or_insert_with(TextContent::default)
    }
}
