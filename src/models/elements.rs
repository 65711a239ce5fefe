// src/models/elements.rs

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::group::Group;
use crate::models::shape::Shape;
use crate::models::table::Table;
use crate::models::Extra;

/// The specific kind of PageElement represented as an enum with associated data.
/// The JSON representation uses the field name as the key (e.g., "shape": {...}, "table": {...}).
/// Kinds the filler never edits are carried as raw JSON.
/// Derived from the union field `element_kind` in:
/// https://developers.google.com/slides/api/reference/rest/v1/presentations.pages#PageElement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageElementKind {
    /// A collection of page elements joined as a single unit.
    ElementGroup(Group),
    /// A generic shape, possibly holding text.
    Shape(Shape),
    /// A table page element.
    Table(Table),
    Image(JsonValue),
    Video(JsonValue),
    Line(JsonValue),
    WordArt(JsonValue),
    SheetsChart(JsonValue),
    SpeakerSpotlight(JsonValue),
}

/// A visual element rendered on a page.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages#PageElement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageElement {
    /// The object ID for this page element.
    pub object_id: String,

    /// The element title. Office hosts surface this as the shape name in the
    /// selection pane, which is what template bindings refer to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The description of the page element (alt text).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The specific kind of element and its properties.
    #[serde(flatten)]
    pub element_kind: PageElementKind,

    /// Size, transform and other untouched keys.
    #[serde(flatten)]
    pub extra: Extra,
}

impl PageElement {
    /// The display name bindings match against: the title, else the object id.
    pub fn name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.object_id)
    }

    pub fn as_shape_mut(&mut self) -> Option<&mut Shape> {
        match &mut self.element_kind {
            PageElementKind::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.element_kind {
            PageElementKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match &mut self.element_kind {
            PageElementKind::ElementGroup(group) => Some(group),
            _ => None,
        }
    }

    /// Current text of a shape element, `None` for every other kind.
    pub fn shape_text(&self) -> Option<String> {
        match &self.element_kind {
            PageElementKind::Shape(shape) => shape.text.as_ref().map(|t| t.plain_text()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_prefers_title_over_object_id() {
        let json = r#"{"objectId": "g12", "title": "Titre 1", "shape": {"shapeType": "TEXT_BOX"}}"#;
        let element: PageElement = serde_json::from_str(json).unwrap();
        assert_eq!(element.name(), "Titre 1");
        assert!(matches!(element.element_kind, PageElementKind::Shape(_)));

        let json = r#"{"objectId": "Google Shape;1738;p230", "shape": {}}"#;
        let element: PageElement = serde_json::from_str(json).unwrap();
        assert_eq!(element.name(), "Google Shape;1738;p230");
    }

    #[test]
    fn opaque_kinds_and_extra_keys_round_trip() {
        let json = r#"{
            "objectId": "img1",
            "size": {"width": {"magnitude": 10, "unit": "PT"}},
            "image": {"contentUrl": "https://example.invalid/a.png"}
        }"#;
        let element: PageElement = serde_json::from_str(json).unwrap();
        assert!(matches!(element.element_kind, PageElementKind::Image(_)));
        assert!(element.extra.contains_key("size"));

        let back = serde_json::to_value(&element).unwrap();
        assert_eq!(back["image"]["contentUrl"], "https://example.invalid/a.png");
        assert_eq!(back["size"]["width"]["unit"], "PT");
    }
}
