//! Primitive text writes against named shapes of one slide.
//!
//! None of these fail. A shape that is missing or of the wrong kind simply
//! does not receive the write, and the [`WriteOutcome`] says why.

use crate::locator::{find_child_mut, ShapeLocator};
use crate::models::elements::{PageElement, PageElementKind};
use crate::models::page::Page;

/// What happened to a single write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// No shape (or group child) of that name on the slide.
    Missing,
    /// The shape exists but cannot hold this kind of content.
    WrongKind,
    /// The table has no cell at the requested row and column.
    OutOfRange,
    /// Text was written but bullet formatting could not be applied.
    FormatSkipped,
}

impl WriteOutcome {
    /// Whether the target text changed.
    pub fn is_written(self) -> bool {
        matches!(self, WriteOutcome::Written | WriteOutcome::FormatSkipped)
    }
}

/// A slide opened for editing, with its name index built.
///
/// Creating an editor is the only way to get a locator for a page, so a
/// stale index from another slide can never be used.
pub struct SlideEditor<'a> {
    page: &'a mut Page,
    locator: ShapeLocator,
}

impl<'a> SlideEditor<'a> {
    pub fn new(page: &'a mut Page) -> Self {
        let locator = ShapeLocator::build(page);
        Self { page, locator }
    }

    pub fn page(&self) -> &Page {
        &*self.page
    }

    /// Replaces the whole text of shape `name` with `text`, verbatim.
    pub fn set_text(&mut self, name: &str, text: &str) -> WriteOutcome {
        match self.locator.find_mut(self.page, name) {
            Some(element) => write_text(element, text),
            None => WriteOutcome::Missing,
        }
    }

    /// Writes `items` as one paragraph each, then marks every paragraph as a
    /// bullet. The text stays written when the formatting cannot be applied.
    pub fn set_bullets<S: AsRef<str>>(&mut self, name: &str, items: &[S]) -> WriteOutcome {
        let text = items
            .iter()
            .map(|item| item.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        let Some(element) = self.locator.find_mut(self.page, name) else {
            return WriteOutcome::Missing;
        };
        let list_id = format!("{}_bullets", element.object_id);
        let Some(shape) = element.as_shape_mut() else {
            return WriteOutcome::WrongKind;
        };
        let content = shape.text_mut();
        content.set_plain_text(&text);
        match content.apply_bullets(&list_id) {
            Ok(()) => WriteOutcome::Written,
            Err(e) => {
                log::debug!("Bullets skipped on '{}': {}", name, e);
                WriteOutcome::FormatSkipped
            }
        }
    }

    /// Replaces the text of the cell at 1-based `row` and `col` of table `name`.
    pub fn set_table_cell(
        &mut self,
        name: &str,
        row: usize,
        col: usize,
        text: &str,
    ) -> WriteOutcome {
        let Some(element) = self.locator.find_mut(self.page, name) else {
            return WriteOutcome::Missing;
        };
        let Some(table) = element.as_table_mut() else {
            return WriteOutcome::WrongKind;
        };
        match table.cell_mut(row, col) {
            Some(cell) => {
                cell.text.get_or_insert_with(Default::default).set_plain_text(text);
                WriteOutcome::Written
            }
            None => WriteOutcome::OutOfRange,
        }
    }

    /// Replaces the text of child `child` inside group `group`. Only the
    /// first child with a matching name is considered.
    pub fn set_group_text(&mut self, group: &str, child: &str, text: &str) -> WriteOutcome {
        let Some(element) = self.locator.find_mut(self.page, group) else {
            return WriteOutcome::Missing;
        };
        let Some(group) = element.as_group_mut() else {
            return WriteOutcome::WrongKind;
        };
        match find_child_mut(group, child) {
            Some(element) => write_text(element, text),
            None => WriteOutcome::Missing,
        }
    }
}

fn write_text(element: &mut PageElement, text: &str) -> WriteOutcome {
    match &mut element.element_kind {
        PageElementKind::Shape(shape) => {
            shape.text_mut().set_plain_text(text);
            WriteOutcome::Written
        }
        _ => WriteOutcome::WrongKind,
    }
}
