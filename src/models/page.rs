// src/models/page.rs

use serde::{Deserialize, Serialize};

use crate::models::elements::PageElement;
use crate::models::Extra;

/// A page in a presentation.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages#Page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// The object ID for this page. Object IDs used by Page and PageElement share
    /// the same namespace.
    pub object_id: String,

    /// The page elements rendered on the page, in z-order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_elements: Option<Vec<PageElement>>,

    /// Page type, properties, revision and other untouched keys.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Page {
    pub fn elements(&self) -> &[PageElement] {
        self.page_elements.as_deref().unwrap_or(&[])
    }

    pub fn elements_mut(&mut self) -> &mut [PageElement] {
        self.page_elements.as_deref_mut().unwrap_or(&mut [])
    }
}
