//! The content plan: presentation title plus the ordered slides to build.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::dispatch::{Dispatcher, Slots};
use crate::errors::{FillError, Result};

/// Index of the title slide in the library deck.
pub const TITLE_LIBRARY_INDEX: usize = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPlan {
    pub presentation_title: String,
    pub slides: Vec<SlideSpec>,
}

/// One content slide: which template to copy and what to put in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// 1-based template id, which is also the library slide position.
    pub slide_index: u32,
    pub slide_title: String,
    #[serde(default, deserialize_with = "slot_values")]
    pub slots: Slots,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_section: Option<String>,
}

impl SlideSpec {
    /// 0-based position of this slide's template in the library deck.
    pub fn library_index(&self) -> usize {
        (self.slide_index as usize).saturating_sub(1)
    }
}

impl ContentPlan {
    /// Parses a plan, tolerating trailing commas before `}` and `]`.
    pub fn from_json(raw: &str) -> Result<Self> {
        let cleaned = normalize_trailing_commas(raw);
        serde_json::from_str(&cleaned).map_err(FillError::PlanJson)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Stores the raw plan text, as received, so a later run can rebuild from it.
    pub fn persist_raw(raw: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, raw)?;
        Ok(())
    }

    /// Checks that every slide can be built before anything is copied.
    pub fn validate(&self, dispatcher: &Dispatcher, library_slide_count: usize) -> Result<()> {
        if library_slide_count <= TITLE_LIBRARY_INDEX {
            return Err(FillError::SlideOutOfRange {
                index: TITLE_LIBRARY_INDEX,
                count: library_slide_count,
            });
        }
        for (position, slide) in self.slides.iter().enumerate() {
            if slide.slide_index == 0 {
                return Err(FillError::InvalidPlan(format!(
                    "slide {} has slide_index 0; template ids start at 1",
                    position + 1
                )));
            }
            if !dispatcher.contains(slide.slide_index) {
                return Err(FillError::UnknownTemplate(slide.slide_index));
            }
            if slide.library_index() >= library_slide_count {
                return Err(FillError::SlideOutOfRange {
                    index: slide.library_index(),
                    count: library_slide_count,
                });
            }
        }
        Ok(())
    }

    /// Library slides to copy, in output order: the title slide, then one per plan entry.
    pub fn library_indices(&self) -> Vec<usize> {
        std::iter::once(TITLE_LIBRARY_INDEX)
            .chain(self.slides.iter().map(SlideSpec::library_index))
            .collect()
    }
}

/// Removes commas that are followed only by whitespace and a closing `}` or
/// `]`. Commas inside string literals are left alone.
pub fn normalize_trailing_commas(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let mut dangling = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, &byte) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b',' => {
                let next = bytes[i + 1..].iter().find(|b| !b.is_ascii_whitespace());
                if matches!(next, Some(b'}' | b']')) {
                    dangling.push(i);
                }
            }
            _ => {}
        }
    }

    if dangling.is_empty() {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len());
    let mut from = 0;
    for i in dangling {
        out.push_str(&input[from..i]);
        from = i + 1;
    }
    out.push_str(&input[from..]);
    Cow::Owned(out)
}

/// Slot values as text. Numbers and booleans are stringified, lists become
/// one line per item, and `null` means the slot is absent.
fn slot_values<'de, D>(deserializer: D) -> std::result::Result<Slots, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, JsonValue>::deserialize(deserializer)?;
    let mut slots = Slots::with_capacity(raw.len());
    for (key, value) in raw {
        if let Some(text) = slot_text(&value).map_err(|kind| {
            serde::de::Error::custom(format!("slot '{key}' holds {kind}, expected text"))
        })? {
            slots.insert(key, text);
        }
    }
    Ok(slots)
}

fn slot_text(value: &JsonValue) -> std::result::Result<Option<String>, &'static str> {
    match value {
        JsonValue::Null => Ok(None),
        JsonValue::String(s) => Ok(Some(s.clone())),
        JsonValue::Number(n) => Ok(Some(n.to_string())),
        JsonValue::Bool(b) => Ok(Some(b.to_string())),
        JsonValue::Array(items) => {
            let mut lines = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    JsonValue::Array(_) | JsonValue::Object(_) => return Err("a nested list"),
                    other => lines.extend(slot_text(other)?),
                }
            }
            Ok(Some(lines.join("\n")))
        }
        JsonValue::Object(_) => Err("an object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_commas_are_removed() {
        assert_eq!(normalize_trailing_commas(r#"{"a": 1,}"#), r#"{"a": 1}"#);
        assert_eq!(normalize_trailing_commas("[1, 2,\n\t ]"), "[1, 2\n\t ]");
        let parsed: JsonValue =
            serde_json::from_str(&normalize_trailing_commas(r#"{"a": 1,}"#)).unwrap();
        assert_eq!(parsed, serde_json::json!({"a": 1}));
    }

    #[test]
    fn commas_inside_strings_are_kept() {
        let raw = r#"{"text": "a,}", "quote": "say \",]\"",}"#;
        let cleaned = normalize_trailing_commas(raw);
        assert_eq!(cleaned, r#"{"text": "a,}", "quote": "say \",]\""}"#);
    }

    #[test]
    fn clean_input_is_borrowed() {
        let raw = r#"{"a": [1, 2]}"#;
        assert!(matches!(normalize_trailing_commas(raw), Cow::Borrowed(_)));
    }

    #[test]
    fn plans_parse_with_producer_quirks() {
        let raw = r#"{
            "presentation_title": "Q1 Review",
            "slides": [
                {
                    "slide_index": 69,
                    "slide_title": "Trade-offs",
                    "slots": {"pro": "Fast", "con": null, "count": 3, "detail_1": ["A", "B"],},
                    "source_section": "2.1",
                },
                {"slide_index": 7, "slide_title": "Overview"},
            ],
        }"#;
        let plan = ContentPlan::from_json(raw).unwrap();
        assert_eq!(plan.slides.len(), 2);

        let slots = &plan.slides[0].slots;
        assert_eq!(slots.keys().collect::<Vec<_>>(), vec!["pro", "count", "detail_1"]);
        assert_eq!(slots["count"], "3");
        assert_eq!(slots["detail_1"], "A\nB");
        assert!(plan.slides[1].slots.is_empty());
        assert_eq!(plan.library_indices(), vec![0, 68, 6]);
    }

    #[test]
    fn malformed_plans_are_rejected() {
        assert!(matches!(
            ContentPlan::from_json(r#"{"presentation_title": "x""#),
            Err(FillError::PlanJson(_))
        ));
        assert!(matches!(
            ContentPlan::from_json(r#"{"presentation_title": "x", "slides": [{"slide_index": 7}]}"#),
            Err(FillError::PlanJson(_))
        ));
        let err = ContentPlan::from_json(
            r#"{"presentation_title": "x", "slides": [
                {"slide_index": 7, "slide_title": "t", "slots": {"a": {"b": 1}}}
            ]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("slot 'a'"));
    }

    #[test]
    fn validation_checks_ids_and_library_range() {
        let dispatcher = Dispatcher::default();
        let plan = |id: u32| ContentPlan {
            presentation_title: "x".into(),
            slides: vec![SlideSpec {
                slide_index: id,
                slide_title: "t".into(),
                slots: Slots::new(),
                source_section: None,
            }],
        };

        plan(7).validate(&dispatcher, 10).unwrap();
        assert!(matches!(
            plan(9999).validate(&dispatcher, 200),
            Err(FillError::UnknownTemplate(9999))
        ));
        assert!(matches!(
            plan(12).validate(&dispatcher, 10),
            Err(FillError::SlideOutOfRange { index: 11, count: 10 })
        ));
        assert!(matches!(plan(0).validate(&dispatcher, 10), Err(FillError::InvalidPlan(_))));
        assert!(matches!(
            plan(7).validate(&dispatcher, 0),
            Err(FillError::SlideOutOfRange { index: 0, count: 0 })
        ));
    }

    #[test]
    fn raw_plans_are_persisted_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("response.txt");
        let raw = r#"{"presentation_title": "Q1", "slides": [],}"#;
        ContentPlan::persist_raw(raw, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), raw);
        assert_eq!(ContentPlan::load(&path).unwrap().presentation_title, "Q1");
    }
}
