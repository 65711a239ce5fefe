use serde::{Deserialize, Serialize};

use crate::models::elements::PageElement;
use crate::models::Extra;

/// A PageElement kind representing a joined collection of PageElements.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages#Group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// The collection of elements in the group, in z-order.
    #[serde(default)]
    pub children: Vec<PageElement>,

    #[serde(flatten)]
    pub extra: Extra,
}
