use serde::{Deserialize, Serialize};

use crate::models::page::Page;
use crate::models::Extra;

/// A presentation document: the library deck or the deck being assembled.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// The ID of the presentation.
    #[serde(default)]
    pub presentation_id: String,

    /// The title of the presentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The slides in the presentation, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides: Option<Vec<Page>>,

    /// Masters, layouts, page size, locale and anything else this crate does not edit.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Presentation {
    /// Number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.slides.as_ref().map_or(0, |s| s.len())
    }

    /// Slide at a 0-based position.
    pub fn slide(&self, index: usize) -> Option<&Page> {
        self.slides.as_ref().and_then(|s| s.get(index))
    }

    /// Mutable slide at a 0-based position.
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.slides.as_mut().and_then(|s| s.get_mut(index))
    }

    /// Mutable access to the slide list, creating it when the document had none.
    pub fn slides_mut(&mut self) -> &mut Vec<Page> {
        self.slides.get_or_insert_with(Vec::new)
    }
}
