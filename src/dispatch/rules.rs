//! Binding rules and the engine that applies them to a slide.

use std::fmt;

use super::{FillReport, Slots};
use crate::writers::{SlideEditor, WriteOutcome};

/// Where a piece of text goes on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A top-level text shape.
    Shape(&'static str),
    /// A cell of a table shape, 1-based row then column.
    Cell(&'static str, usize, usize),
    /// A text shape that is an immediate child of a group.
    Grouped(&'static str, &'static str),
    /// A text shape whose lines become bullet paragraphs.
    Bulleted(&'static str),
}

/// One fragment of composed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Lit(&'static str),
    /// The value of a slot.
    Val(&'static str),
}

/// Fragments added to a composed text when every slot in `when` is present.
#[derive(Debug, Clone, Copy)]
pub struct Clause {
    pub when: &'static [&'static str],
    pub parts: &'static [Piece],
}

/// A single binding, applied in table order.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Writes the slide title.
    Title(Target),
    /// Writes one slot value as is.
    Put(&'static str, Target),
    /// Builds one text out of literal and slot fragments.
    Compose(Target, &'static [Clause]),
    /// Writes successive lines of one slot to successive shapes.
    FanOut(&'static str, &'static [&'static str]),
}

/// The bindings of one library slide.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub id: u32,
    pub rules: &'static [Rule],
}

impl Target {
    pub fn write(&self, editor: &mut SlideEditor<'_>, text: &str) -> WriteOutcome {
        match *self {
            Target::Shape(name) => editor.set_text(name, text),
            Target::Cell(table, row, col) => editor.set_table_cell(table, row, col, text),
            Target::Grouped(group, child) => editor.set_group_text(group, child, text),
            Target::Bulleted(name) => {
                let items: Vec<&str> = text.lines().collect();
                editor.set_bullets(name, &items)
            }
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Shape(name) | Target::Bulleted(name) => write!(f, "'{name}'"),
            Target::Cell(table, row, col) => write!(f, "'{table}'[{row},{col}]"),
            Target::Grouped(group, child) => write!(f, "'{group}'/'{child}'"),
        }
    }
}

impl Clause {
    fn applies(&self, slots: &Slots) -> bool {
        self.when.iter().all(|key| slots.contains_key(*key))
    }

    /// Appends this clause's text to `out`, or returns the first slot it
    /// reads that is absent. `out` is left untouched in that case.
    fn render(&self, slots: &Slots, out: &mut String) -> Result<(), &'static str> {
        let mut text = String::new();
        for part in self.parts {
            match *part {
                Piece::Lit(lit) => text.push_str(lit),
                Piece::Val(key) => text.push_str(slots.get(key).ok_or(key)?),
            }
        }
        out.push_str(&text);
        Ok(())
    }
}

impl Rule {
    pub fn apply(
        &self,
        editor: &mut SlideEditor<'_>,
        title: &str,
        slots: &Slots,
        report: &mut FillReport,
    ) {
        match self {
            Rule::Title(target) => report.record(target, target.write(editor, title)),
            Rule::Put(key, target) => {
                if let Some(value) = slots.get(*key) {
                    report.record(target, target.write(editor, value));
                }
            }
            Rule::Compose(target, clauses) => {
                let mut text = String::new();
                let mut contributed = false;
                for clause in clauses.iter().filter(|c| c.applies(slots)) {
                    match clause.render(slots, &mut text) {
                        Ok(()) => contributed = true,
                        Err(missing) => log::warn!(
                            "Dropped part of {} guarded by {:?}: slot '{}' is absent",
                            target,
                            clause.when,
                            missing
                        ),
                    }
                }
                if contributed {
                    report.record(target, target.write(editor, &text));
                }
            }
            Rule::FanOut(key, shapes) => {
                let Some(value) = slots.get(*key) else {
                    return;
                };
                let lines = split_lines(value);
                if lines.len() > shapes.len() {
                    log::warn!(
                        "Slot '{}' has {} lines but only {} shapes; {} clipped",
                        key,
                        lines.len(),
                        shapes.len(),
                        lines.len() - shapes.len()
                    );
                }
                for (line, shape) in lines.iter().zip(shapes.iter()) {
                    let target = Target::Shape(*shape);
                    report.record(&target, target.write(editor, line));
                }
            }
        }
    }

    /// Slots this rule may read.
    pub fn slots(&self) -> Vec<&'static str> {
        match self {
            Rule::Title(_) => Vec::new(),
            Rule::Put(key, _) | Rule::FanOut(key, _) => vec![*key],
            Rule::Compose(_, clauses) => {
                let mut keys = Vec::new();
                for clause in clauses.iter() {
                    let read = clause.parts.iter().filter_map(|p| match p {
                        Piece::Val(key) => Some(*key),
                        Piece::Lit(_) => None,
                    });
                    for key in clause.when.iter().copied().chain(read) {
                        if !keys.contains(&key) {
                            keys.push(key);
                        }
                    }
                }
                keys
            }
        }
    }
}

/// Splits on every line boundary: `\n`, `\r\n`, a lone `\r`, the vertical
/// tab, form feed, file/group/record separators, NEL and the Unicode line and
/// paragraph separators. A trailing break does not start an empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let end = match c {
            '\r' if matches!(chars.peek(), Some((_, '\n'))) => {
                chars.next();
                i + 2
            }
            '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}' => i + c.len_utf8(),
            _ => continue,
        };
        lines.push(&text[start..i]);
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

impl Template {
    /// Every slot the template reads, in first-use order.
    pub fn slots(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        for key in self.rules.iter().flat_map(Rule::slots) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::Piece::{Lit, Val};
    use super::*;
    use crate::models::page::Page;

    fn page(names: &[&str]) -> Page {
        let elements: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                serde_json::json!({"objectId": format!("e{i}"), "title": name, "shape": {}})
            })
            .collect();
        serde_json::from_value(serde_json::json!({"objectId": "p", "pageElements": elements}))
            .unwrap()
    }

    fn slots(pairs: &[(&str, &str)]) -> Slots {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn text(page: &Page, index: usize) -> Option<String> {
        page.elements()[index].shape_text()
    }

    static NUMBERED: Rule = Rule::Compose(
        Target::Shape("Box"),
        &[
            Clause { when: &["idea_1"], parts: &[Lit("1. "), Val("idea_1"), Lit("\n")] },
            Clause { when: &["description_1"], parts: &[Val("description_1")] },
        ],
    );

    #[test]
    fn numbered_prefix_composes_idea_and_description() {
        let mut page = page(&["Box"]);
        let mut report = FillReport::default();
        let slots = slots(&[("idea_1", "Reduce cost"), ("description_1", "via automation")]);
        NUMBERED.apply(&mut SlideEditor::new(&mut page), "", &slots, &mut report);
        assert_eq!(text(&page, 0).as_deref(), Some("1. Reduce cost\nvia automation"));
        assert_eq!(report.written, 1);
    }

    #[test]
    fn compose_without_any_slot_leaves_the_shape_alone() {
        let mut page = page(&["Box"]);
        let mut report = FillReport::default();
        NUMBERED.apply(&mut SlideEditor::new(&mut page), "", &Slots::new(), &mut report);
        assert_eq!(text(&page, 0), None);
        assert_eq!(report.written, 0);
    }

    #[test]
    fn clause_reading_an_absent_slot_is_dropped() {
        static MISREAD: Rule = Rule::Compose(
            Target::Shape("Box"),
            &[
                Clause { when: &["role_5"], parts: &[Val("role_5"), Lit("\n")] },
                Clause { when: &["role_5"], parts: &[Val("rol5_4")] },
            ],
        );
        let mut page = page(&["Box"]);
        let mut report = FillReport::default();
        let slots = slots(&[("role_5", "Lead")]);
        MISREAD.apply(&mut SlideEditor::new(&mut page), "", &slots, &mut report);
        assert_eq!(text(&page, 0).as_deref(), Some("Lead\n"));
    }

    #[test]
    fn fan_out_writes_the_first_lines_only() {
        static FAN: Rule = Rule::FanOut("detail", &["Z1", "Z2", "Z3", "Z4", "Z5"]);
        let mut page = page(&["Z1", "Z2", "Z3", "Z4", "Z5"]);
        let mut report = FillReport::default();
        let slots = slots(&[("detail", "A\nB\nC")]);
        FAN.apply(&mut SlideEditor::new(&mut page), "", &slots, &mut report);

        let texts: Vec<_> = (0..5).map(|i| text(&page, i)).collect();
        assert_eq!(
            texts,
            vec![Some("A".into()), Some("B".into()), Some("C".into()), None, None]
        );
        assert_eq!(report.written, 3);
    }

    #[test]
    fn fan_out_clips_surplus_lines() {
        static FAN: Rule = Rule::FanOut("detail", &["Z1", "Z2"]);
        let mut page = page(&["Z1", "Z2"]);
        let mut report = FillReport::default();
        let slots = slots(&[("detail", "A\nB\nC\nD")]);
        FAN.apply(&mut SlideEditor::new(&mut page), "", &slots, &mut report);
        assert_eq!(text(&page, 1).as_deref(), Some("B"));
        assert_eq!(report.written, 2);
    }

    #[test]
    fn fan_out_splits_on_every_line_boundary() {
        static FAN: Rule = Rule::FanOut("detail", &["Z1", "Z2", "Z3", "Z4", "Z5"]);
        let mut page = page(&["Z1", "Z2", "Z3", "Z4", "Z5"]);
        let mut report = FillReport::default();
        let slots = slots(&[("detail", "A\rB\r\nC\x0cD\u{2028}E\n")]);
        FAN.apply(&mut SlideEditor::new(&mut page), "", &slots, &mut report);

        let texts: Vec<_> = (0..5).map(|i| text(&page, i).unwrap()).collect();
        assert_eq!(texts, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn split_lines_keeps_blank_lines_but_not_a_trailing_break() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\x0b"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn bulleted_target_splits_lines() {
        let mut page = page(&["List"]);
        let mut editor = SlideEditor::new(&mut page);
        let outcome = Target::Bulleted("list").write(&mut editor, "one\ntwo");
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(text(&page, 0).as_deref(), Some("one\ntwo"));
    }

    #[test]
    fn slots_are_listed_once_in_first_use_order() {
        static RULES: &[Rule] = &[
            Rule::Title(Target::Shape("T")),
            Rule::Put("b", Target::Shape("X")),
            Rule::Compose(
                Target::Shape("Y"),
                &[Clause { when: &["a"], parts: &[Val("a"), Val("b")] }],
            ),
        ];
        let template = Template { id: 1, rules: RULES };
        assert_eq!(template.slots(), vec!["b", "a"]);
    }
}
