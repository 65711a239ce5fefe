// src/models/text.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::bullet::Bullet;
use crate::models::list::List;
use crate::models::text_element::{ParagraphMarker, TextElement, TextElementKind, TextRun};

/// Represents the textual content of a Shape or TableCell.
/// Derived from: https://developers.google.com/slides/api/reference/rest/v1/presentations.pages/text#TextContent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    /// The text broken down into paragraph markers, runs and auto text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_elements: Option<Vec<TextElement>>,

    /// The bulleted lists used in this text, keyed by list ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists: Option<IndexMap<String, List>>,
}

/// Raised when bullet formatting cannot be applied.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BulletError {
    #[error("text has no paragraphs to format")]
    NoParagraphs,
}

impl TextContent {
    /// The text as an office host reports it: all runs joined, without the
    /// terminator of the last paragraph.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for element in self.text_elements.iter().flatten() {
            match &element.kind {
                TextElementKind::TextRun(run) => text.push_str(run.content.as_deref().unwrap_or("")),
                TextElementKind::AutoText(auto) => {
                    text.push_str(auto.content.as_deref().unwrap_or(""))
                }
                TextElementKind::ParagraphMarker(_) => {}
            }
        }
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }

    /// Replaces the whole text with `text`, one paragraph per `\n`-separated line.
    ///
    /// The style of the first paragraph and of the first run is carried over to
    /// every new paragraph, and existing bullets are dropped.
    pub fn set_plain_text(&mut self, text: &str) {
        let (paragraph_style, run_style) = self.leading_styles();

        let mut elements = Vec::new();
        let mut offset = 0i32;
        for line in text.split('\n') {
            let content = format!("{line}\n");
            let len = content.encode_utf16().count() as i32;
            elements.push(TextElement::new(
                TextElementKind::ParagraphMarker(ParagraphMarker {
                    style: paragraph_style.clone(),
                    bullet: None,
                }),
                offset,
                offset + len,
            ));
            elements.push(TextElement::new(
                TextElementKind::TextRun(TextRun {
                    content: Some(content),
                    style: run_style.clone(),
                }),
                offset,
                offset + len,
            ));
            offset += len;
        }
        self.text_elements = Some(elements);
        self.lists = None;
    }

    /// Puts every paragraph into a single-level bulleted list.
    pub fn apply_bullets(&mut self, list_id: &str) -> Result<(), BulletError> {
        let mut markers = self
            .text_elements
            .iter_mut()
            .flatten()
            .filter_map(|element| match &mut element.kind {
                TextElementKind::ParagraphMarker(marker) => Some(marker),
                _ => None,
            })
            .peekable();
        if markers.peek().is_none() {
            return Err(BulletError::NoParagraphs);
        }
        for marker in markers {
            marker.bullet = Some(Bullet {
                list_id: Some(list_id.to_string()),
                nesting_level: Some(0),
                glyph: None,
                bullet_style: None,
            });
        }
        self.lists
            .get_or_insert_with(IndexMap::new)
            .insert(list_id.to_string(), List::single_level(list_id));
        Ok(())
    }

    /// Whether every paragraph carries a bullet.
    pub fn is_bulleted(&self) -> bool {
        let mut markers = self
            .text_elements
            .iter()
            .flatten()
            .filter_map(|element| match &element.kind {
                TextElementKind::ParagraphMarker(marker) => Some(marker),
                _ => None,
            })
            .peekable();
        markers.peek().is_some() && markers.all(|marker| marker.bullet.is_some())
    }

    fn leading_styles(&self) -> (Option<serde_json::Value>, Option<serde_json::Value>) {
        let mut paragraph_style = None;
        let mut run_style = None;
        for element in self.text_elements.iter().flatten() {
            match &element.kind {
                TextElementKind::ParagraphMarker(marker) if paragraph_style.is_none() => {
                    paragraph_style = Some(marker.style.clone());
                }
                TextElementKind::TextRun(run) if run_style.is_none() => {
                    run_style = Some(run.style.clone());
                }
                _ => {}
            }
        }
        (paragraph_style.flatten(), run_style.flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_round_trips_through_paragraphs() {
        for text in ["", "one line", "A\nB\nC", "Summary:\nall good\n", "\n\n"] {
            let mut content = TextContent::default();
            content.set_plain_text(text);
            assert_eq!(content.plain_text(), text);
        }
    }

    #[test]
    fn leading_styles_are_kept() {
        let mut content: TextContent = serde_json::from_str(
            r#"{"textElements": [
                {"endIndex": 6, "paragraphMarker": {"style": {"alignment": "CENTER"}}},
                {"endIndex": 6, "textRun": {"content": "Hello\n", "style": {"bold": true}}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(content.plain_text(), "Hello");

        content.set_plain_text("New\nLines");
        let elements = content.text_elements.as_ref().unwrap();
        assert_eq!(elements.len(), 4);
        for element in elements {
            match &element.kind {
                TextElementKind::ParagraphMarker(m) => {
                    assert_eq!(m.style.as_ref().unwrap()["alignment"], "CENTER")
                }
                TextElementKind::TextRun(r) => assert_eq!(r.style.as_ref().unwrap()["bold"], true),
                TextElementKind::AutoText(_) => unreachable!(),
            }
        }
        assert_eq!(elements[3].end_index, Some(10));
    }

    #[test]
    fn bullets_need_paragraphs() {
        let mut content = TextContent::default();
        assert_eq!(content.apply_bullets("l1"), Err(BulletError::NoParagraphs));

        content.set_plain_text("a\nb");
        content.apply_bullets("l1").unwrap();
        assert!(content.is_bulleted());
        assert!(content.lists.as_ref().unwrap().contains_key("l1"));
    }
}
