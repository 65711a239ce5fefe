//! Template id to binding rules, and the filler that applies them.

pub mod rules;
pub mod table;

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::errors::{FillError, Result};
use crate::models::page::Page;
use crate::writers::{SlideEditor, WriteOutcome};
use rules::{Rule, Target, Template};

/// Slot name to text, in the order the plan lists them.
pub type Slots = IndexMap<String, String>;

/// What one fill did to one slide.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FillReport {
    /// Template id, `None` for the title slide.
    pub template: Option<u32>,
    pub written: usize,
    /// Writes that found no suitable shape.
    pub skipped: usize,
}

impl FillReport {
    pub(crate) fn record(&mut self, target: &Target, outcome: WriteOutcome) {
        if outcome.is_written() {
            self.written += 1;
        } else {
            self.skipped += 1;
        }
        if outcome != WriteOutcome::Written {
            log::debug!("{} -> {:?}", target, outcome);
        }
    }
}

/// Looks up templates by id and fills slides with them.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    templates: BTreeMap<u32, &'static Template>,
    title_rules: &'static [Rule],
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(table::TEMPLATES, table::TITLE_RULES)
    }
}

impl Dispatcher {
    /// Builds a dispatcher over `templates`. A later entry with the same id
    /// replaces an earlier one.
    pub fn new(templates: &'static [Template], title_rules: &'static [Rule]) -> Self {
        let templates = templates.iter().map(|t| (t.id, t)).collect();
        Self {
            templates,
            title_rules,
        }
    }

    pub fn get(&self, id: u32) -> Option<&'static Template> {
        self.templates.get(&id).copied()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.templates.contains_key(&id)
    }

    /// Known template ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.templates.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Fills the opening slide with the presentation title.
    pub fn fill_title(&self, page: &mut Page, title: &str) -> FillReport {
        let mut report = FillReport::default();
        apply(self.title_rules, page, title, &Slots::new(), &mut report);
        report
    }

    /// Fills `page`, a copy of library template `id`, with `title` and `slots`.
    /// Slots no rule reads are ignored; rules whose slots are absent do nothing.
    pub fn fill(&self, page: &mut Page, id: u32, title: &str, slots: &Slots) -> Result<FillReport> {
        let template = self.get(id).ok_or(FillError::UnknownTemplate(id))?;
        let mut report = FillReport {
            template: Some(id),
            ..Default::default()
        };
        apply(template.rules, page, title, slots, &mut report);
        Ok(report)
    }
}

fn apply(rules: &[Rule], page: &mut Page, title: &str, slots: &Slots, report: &mut FillReport) {
    let mut editor = SlideEditor::new(page);
    for rule in rules {
        rule.apply(&mut editor, title, slots, report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::page::Page;
    use std::collections::HashSet;

    fn page(json: serde_json::Value) -> Page {
        serde_json::from_value(json).unwrap()
    }

    fn slots(pairs: &[(&str, &str)]) -> Slots {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn library_covers_every_ported_template() {
        let dispatcher = Dispatcher::default();
        assert_eq!(dispatcher.len(), 112);
        assert_eq!(dispatcher.ids().next(), Some(4));
        assert_eq!(dispatcher.ids().last(), Some(152));
        for id in [1, 2, 3, 14, 23, 26, 46, 70, 82, 94, 97, 111, 114, 140, 153] {
            assert!(!dispatcher.contains(id), "{id} has no library slide binding");
        }

        let unique: HashSet<u32> = table::TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(unique.len(), table::TEMPLATES.len());
    }

    #[test]
    fn every_template_writes_a_title() {
        for template in table::TEMPLATES {
            assert!(
                template.rules.iter().any(|r| matches!(r, Rule::Title(_))),
                "template {} has no title binding",
                template.id
            );
        }
    }

    #[test]
    fn unknown_template_is_an_error() {
        let mut page = Page::default();
        let err = Dispatcher::default()
            .fill(&mut page, 9999, "x", &Slots::new())
            .unwrap_err();
        assert!(matches!(err, FillError::UnknownTemplate(9999)));
        assert!(err.to_string().contains("9999"));
    }

    #[test]
    fn title_slide_uses_title_1() {
        let mut page = page(serde_json::json!({"objectId": "p1", "pageElements": [
            {"objectId": "a", "title": "Title 1", "shape": {}}
        ]}));
        let report = Dispatcher::default().fill_title(&mut page, "Q1 Review");
        assert_eq!(report.written, 1);
        assert_eq!(page.elements()[0].shape_text().as_deref(), Some("Q1 Review"));
    }

    #[test]
    fn numbered_table_cells_are_composed() {
        let mut page = page(serde_json::json!({"objectId": "p", "pageElements": [
            {"objectId": "t", "title": "Titre 1", "shape": {}},
            {"objectId": "tbl", "title": "Tableau 18", "table": {"rows": 3, "columns": 3, "tableRows": [
                {"tableCells": [{}, {}, {}]},
                {"tableCells": [{}, {}, {}]},
                {"tableCells": [{}, {}, {}]}
            ]}}
        ]}));
        let slots = slots(&[
            ("idea_1", "Reduce cost"),
            ("description_1", "via automation"),
            ("pro_1", "cheaper"),
        ]);
        let report = Dispatcher::default().fill(&mut page, 107, "Options", &slots).unwrap();
        assert_eq!(report.template, Some(107));

        let crate::models::elements::PageElementKind::Table(table) = &page.elements()[1].element_kind
        else {
            panic!("not a table");
        };
        assert_eq!(table.cell_text(2, 1).unwrap(), "1. Reduce cost\nvia automation");
        assert_eq!(table.cell_text(2, 2).unwrap(), "cheaper");
        assert_eq!(table.cell_text(3, 1).unwrap(), "");
    }

    #[test]
    fn fill_is_idempotent_and_omission_is_a_no_op() {
        let fresh = page(serde_json::json!({"objectId": "p", "pageElements": [
            {"objectId": "t", "title": "Title 5", "shape": {}},
            {"objectId": "pro", "title": "ZoneTexte 71", "shape": {"text": {"textElements": [
                {"endIndex": 4, "paragraphMarker": {}},
                {"endIndex": 4, "textRun": {"content": "Pro\n"}}
            ]}}},
            {"objectId": "con", "title": "ZoneTexte 72", "shape": {}}
        ]}));
        let dispatcher = Dispatcher::default();
        let slots = slots(&[("con", "Slower")]);

        let mut once = fresh.clone();
        dispatcher.fill(&mut once, 69, "Trade-offs", &slots).unwrap();
        let mut twice = once.clone();
        dispatcher.fill(&mut twice, 69, "Trade-offs", &slots).unwrap();
        assert_eq!(once, twice);

        assert_eq!(once.elements()[1], fresh.elements()[1]);
        assert_eq!(once.elements()[2].shape_text().as_deref(), Some("Slower"));
    }
}
