//! The template catalog: the descriptions a plan author picks templates from.
//!
//! The catalog is maintained separately from the binding table. It is only
//! read here to cross-check the two.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatch::Dispatcher;
use crate::errors::{FillError, Result};

/// Category whose templates are never offered for selection.
pub const EXCLUDED_CATEGORY: &str = "various";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_words: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateInfo {
    pub id: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slots: Vec<SlotInfo>,
}

impl TemplateInfo {
    pub fn is_selectable(&self) -> bool {
        !self.category.eq_ignore_ascii_case(EXCLUDED_CATEGORY)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<TemplateInfo>),
    Wrapped { templates: Vec<TemplateInfo> },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    templates: Vec<TemplateInfo>,
}

/// Disagreements between the catalog and the binding table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    /// Selectable ids with no bindings: a plan using them cannot be built.
    pub unbound: Vec<u32>,
    /// `(id, slot)` pairs the catalog declares but no binding reads.
    pub unread_slots: Vec<(u32, String)>,
}

impl CatalogReport {
    pub fn is_ok(&self) -> bool {
        self.unbound.is_empty()
    }
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(raw).map_err(FillError::CatalogJson)?;
        let templates = match document {
            CatalogDocument::List(templates) | CatalogDocument::Wrapped { templates } => templates,
        };
        Ok(Self { templates })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn templates(&self) -> &[TemplateInfo] {
        &self.templates
    }

    /// Templates a plan author may choose, in catalog order.
    pub fn selectable(&self) -> impl Iterator<Item = &TemplateInfo> {
        self.templates.iter().filter(|t| t.is_selectable())
    }

    pub fn get(&self, id: u32) -> Option<&TemplateInfo> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn check_against(&self, dispatcher: &Dispatcher) -> CatalogReport {
        let mut report = CatalogReport::default();
        for info in self.selectable() {
            let Some(template) = dispatcher.get(info.id) else {
                log::error!("Template {} is selectable but has no bindings", info.id);
                report.unbound.push(info.id);
                continue;
            };
            let read = template.slots();
            for slot in &info.slots {
                if !read.contains(&slot.name.as_str()) {
                    log::warn!(
                        "Template {} declares slot '{}' that nothing reads",
                        info.id,
                        slot.name
                    );
                    report.unread_slots.push((info.id, slot.name.clone()));
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {"id": 7, "category": "Title", "description": "Title only", "slots": []},
        {"id": 69, "category": "Comparison", "description": "Pros and cons", "slots": [
            {"name": "pro", "max_words": 20},
            {"name": "detail_1", "max_items": 5},
            {"name": "footnote"}
        ]},
        {"id": 3, "category": "Various", "description": "Agenda divider"},
        {"id": 2, "category": "Agenda", "description": "Agenda"}
    ]"#;

    #[test]
    fn both_document_shapes_load() {
        let list = Catalog::from_json(CATALOG).unwrap();
        let wrapped = Catalog::from_json(&format!(r#"{{"templates": {CATALOG}}}"#)).unwrap();
        assert_eq!(list, wrapped);
        assert_eq!(list.templates().len(), 4);
        assert_eq!(list.get(69).unwrap().slots[1].max_items, Some(5));
    }

    #[test]
    fn various_is_not_selectable() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let ids: Vec<u32> = catalog.selectable().map(|t| t.id).collect();
        assert_eq!(ids, vec![7, 69, 2]);
    }

    #[test]
    fn check_reports_unbound_ids_and_unread_slots() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let report = catalog.check_against(&Dispatcher::default());
        assert_eq!(report.unbound, vec![2]);
        assert_eq!(report.unread_slots, vec![(69, "footnote".to_string())]);
        assert!(!report.is_ok());
    }

    #[test]
    fn bad_catalogs_are_catalog_errors() {
        assert!(matches!(Catalog::from_json("{}"), Err(FillError::CatalogJson(_))));
    }
}
