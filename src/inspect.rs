//! Reading library slides back out: a markdown outline of named shapes, and
//! a first-draft binding entry for a new template slide.

use std::fmt::{self, Write};

use crate::errors::{FillError, Result};
use crate::models::elements::{PageElement, PageElementKind};
use crate::models::page::Page;
use crate::models::presentation::Presentation;
use crate::models::table::Table;

/// Prefixes that mark a shape as the slide title.
const TITLE_PREFIXES: &[&str] = &["title", "titre"];

/// Lists every slide with its named shapes, their kind and current text.
pub fn outline(presentation: &Presentation) -> String {
    let mut out = String::new();
    write_outline(&mut out, presentation).expect("Writing to String failed");
    out
}

/// Drafts a binding entry for `page` as template `id`: one slot per
/// text-bearing shape, table cell and group child, named after the shape.
pub fn scaffold(page: &Page, id: u32) -> String {
    let mut out = String::new();
    write_scaffold(&mut out, page, id).expect("Writing to String failed");
    out
}

/// Drafts the binding entry for template `id` from its slide in `library`.
/// Template ids start at 1.
pub fn scaffold_template(library: &Presentation, id: u32) -> Result<String> {
    let index = (id as usize)
        .checked_sub(1)
        .ok_or(FillError::UnknownTemplate(id))?;
    let page = library.slide(index).ok_or(FillError::SlideOutOfRange {
        index,
        count: library.slide_count(),
    })?;
    Ok(scaffold(page, id))
}

/// `"ZoneTexte 8"` -> `"zonetexte_8"`.
pub fn slot_name(shape_name: &str) -> String {
    let mut slug = String::with_capacity(shape_name.len());
    for c in shape_name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}

fn write_outline(out: &mut String, presentation: &Presentation) -> fmt::Result {
    writeln!(out, "# {}", presentation.title.as_deref().unwrap_or("Presentation"))?;
    for (index, slide) in presentation.slides.iter().flatten().enumerate() {
        writeln!(out, "\n## Slide {} (`{}`)\n", index + 1, slide.object_id)?;
        for element in slide.elements() {
            write_element(out, element, 0)?;
        }
    }
    Ok(())
}

fn write_element(out: &mut String, element: &PageElement, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    let name = element.name();
    match &element.element_kind {
        PageElementKind::Shape(shape) => {
            let text = shape.text.as_ref().map(|t| t.plain_text()).unwrap_or_default();
            writeln!(out, "{indent}- `{name}` text: {}", one_line(&text))?;
        }
        PageElementKind::Table(table) => {
            writeln!(out, "{indent}- `{name}` table {}x{}", table.rows, table.columns)?;
            for (row, col) in cells(table) {
                let text = table.cell_text(row, col).unwrap_or_default();
                if !text.is_empty() {
                    writeln!(out, "{indent}  - [{row},{col}] {}", one_line(&text))?;
                }
            }
        }
        PageElementKind::ElementGroup(group) => {
            writeln!(out, "{indent}- `{name}` group of {}", group.children.len())?;
            for child in &group.children {
                write_element(out, child, depth + 1)?;
            }
        }
        _ => writeln!(out, "{indent}- `{name}` other")?,
    }
    Ok(())
}

fn write_scaffold(out: &mut String, page: &Page, id: u32) -> fmt::Result {
    writeln!(out, "    Template {{")?;
    writeln!(out, "        id: {id},")?;
    writeln!(out, "        rules: &[")?;

    let mut titled = false;
    for element in page.elements() {
        let name = element.name();
        match &element.element_kind {
            PageElementKind::Shape(_) if !titled && is_title(name) => {
                titled = true;
                writeln!(out, "            Title(Shape({name:?})),")?;
            }
            PageElementKind::Shape(_) => {
                writeln!(out, "            Put({:?}, Shape({name:?})),", slot_name(name))?;
            }
            PageElementKind::Table(table) => {
                for (row, col) in cells(table) {
                    let slot = format!("{}_r{row}_c{col}", slot_name(name));
                    writeln!(out, "            Put({slot:?}, Cell({name:?}, {row}, {col})),")?;
                }
            }
            PageElementKind::ElementGroup(group) => {
                for child in &group.children {
                    if let PageElementKind::Shape(_) = child.element_kind {
                        let child_name = child.name();
                        let slot = format!("{}_{}", slot_name(name), slot_name(child_name));
                        writeln!(
                            out,
                            "            Put({slot:?}, Grouped({name:?}, {child_name:?})),"
                        )?;
                    }
                }
            }
            _ => {}
        }
    }
    if !titled {
        log::warn!("No title shape found on slide {}", page.object_id);
    }

    writeln!(out, "        ],")?;
    writeln!(out, "    }},")
}

fn is_title(name: &str) -> bool {
    let name = name.to_lowercase();
    TITLE_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Addressable 1-based (row, column) pairs of a table.
fn cells(table: &Table) -> Vec<(usize, usize)> {
    let rows = table.rows.max(0) as usize;
    let columns = table.columns.max(0) as usize;
    (1..=rows)
        .flat_map(|row| (1..=columns).map(move |col| (row, col)))
        .filter(|&(row, col)| table.cell(row, col).is_some())
        .collect()
}

fn one_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        serde_json::from_value(serde_json::json!({
            "objectId": "p12",
            "pageElements": [
                {"objectId": "a", "title": "Titre 1", "shape": {"text": {"textElements": [
                    {"endIndex": 8, "paragraphMarker": {}},
                    {"endIndex": 8, "textRun": {"content": "Heading\n"}}
                ]}}},
                {"objectId": "b", "title": "ZoneTexte 8", "shape": {}},
                {"objectId": "c", "title": "Table 7", "table": {"rows": 1, "columns": 2, "tableRows": [
                    {"tableCells": [{}, {}]}
                ]}},
                {"objectId": "d", "title": "Groupe 21", "elementGroup": {"children": [
                    {"objectId": "d1", "title": "TextBox 65", "shape": {}},
                    {"objectId": "d2", "image": {}}
                ]}},
                {"objectId": "e", "image": {}}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn slot_names_are_slugs() {
        assert_eq!(slot_name("ZoneTexte 8"), "zonetexte_8");
        assert_eq!(slot_name("ZoneTexte 86-2"), "zonetexte_86_2");
        assert_eq!(slot_name("Google Shape;1738;p230"), "google_shape_1738_p230");
        assert_eq!(slot_name("  Title  "), "title");
    }

    #[test]
    fn scaffold_drafts_one_rule_per_slot() {
        let draft = scaffold(&page(), 42);
        let expected = [
            "    Template {",
            "        id: 42,",
            "        rules: &[",
            "            Title(Shape(\"Titre 1\")),",
            "            Put(\"zonetexte_8\", Shape(\"ZoneTexte 8\")),",
            "            Put(\"table_7_r1_c1\", Cell(\"Table 7\", 1, 1)),",
            "            Put(\"table_7_r1_c2\", Cell(\"Table 7\", 1, 2)),",
            "            Put(\"groupe_21_textbox_65\", Grouped(\"Groupe 21\", \"TextBox 65\")),",
            "        ],",
            "    },",
        ];
        assert_eq!(draft.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn scaffold_template_rejects_ids_outside_the_library() {
        let deck = Presentation {
            slides: Some(vec![page()]),
            ..Default::default()
        };
        assert!(scaffold_template(&deck, 1).unwrap().contains("id: 1,"));
        assert!(matches!(
            scaffold_template(&deck, 0),
            Err(FillError::UnknownTemplate(0))
        ));
        assert!(matches!(
            scaffold_template(&deck, 2),
            Err(FillError::SlideOutOfRange { index: 1, count: 1 })
        ));
    }

    #[test]
    fn outline_lists_shapes_by_kind() {
        let deck = Presentation {
            title: Some("Library".into()),
            slides: Some(vec![page()]),
            ..Default::default()
        };
        let text = outline(&deck);
        assert!(text.starts_with("# Library\n"));
        assert!(text.contains("## Slide 1 (`p12`)"));
        assert!(text.contains("- `Titre 1` text: Heading"));
        assert!(text.contains("- `Table 7` table 1x2"));
        assert!(text.contains("- `Groupe 21` group of 2"));
        assert!(text.contains("  - `TextBox 65` text: "));
        assert!(text.contains("- `e` other"));
    }
}
