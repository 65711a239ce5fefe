//! Name-based shape lookup on a single slide.

use std::collections::HashMap;

use crate::models::elements::PageElement;
use crate::models::group::Group;
use crate::models::page::Page;

/// Lowercase name of a shape, the key every lookup goes through.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Index from shape name to position in one page's element list.
///
/// The index borrows nothing, but it is only valid for the page it was built
/// from; callers build a fresh one whenever they move to another slide.
#[derive(Debug, Default, Clone)]
pub struct ShapeLocator {
    index: HashMap<String, usize>,
}

impl ShapeLocator {
    /// Indexes the top-level elements of `page`. When two elements share a
    /// name the one earlier in page order wins.
    pub fn build(page: &Page) -> Self {
        let mut index = HashMap::new();
        for (position, element) in page.elements().iter().enumerate() {
            index.entry(name_key(element.name())).or_insert(position);
        }
        Self { index }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&name_key(name)).copied()
    }

    pub fn find<'p>(&self, page: &'p Page, name: &str) -> Option<&'p PageElement> {
        page.elements().get(self.position(name)?)
    }

    pub fn find_mut<'p>(&self, page: &'p mut Page, name: &str) -> Option<&'p mut PageElement> {
        let position = self.position(name)?;
        page.elements_mut().get_mut(position)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// First immediate child of `group` named `name`. Nested groups are not searched.
pub fn find_child_mut<'g>(group: &'g mut Group, name: &str) -> Option<&'g mut PageElement> {
    let key = name_key(name);
    group
        .children
        .iter_mut()
        .find(|child| name_key(child.name()) == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        serde_json::from_str(
            r#"{
                "objectId": "p1",
                "pageElements": [
                    {"objectId": "a", "title": "Titre 1", "shape": {}},
                    {"objectId": "b", "title": "TITRE 1", "shape": {}},
                    {"objectId": "g", "title": "Groupe 115", "elementGroup": {"children": [
                        {"objectId": "c1", "title": "ZoneTexte 109", "shape": {}},
                        {"objectId": "inner", "title": "Inner", "elementGroup": {"children": [
                            {"objectId": "c2", "title": "Deep", "shape": {}}
                        ]}}
                    ]}}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive_and_first_wins() {
        let page = page();
        let locator = ShapeLocator::build(&page);
        assert_eq!(locator.len(), 2);
        assert_eq!(locator.find(&page, "titre 1").unwrap().object_id, "a");
        assert_eq!(locator.find(&page, "GROUPE 115").unwrap().object_id, "g");
        assert!(locator.find(&page, "ZoneTexte 109").is_none());
    }

    #[test]
    fn group_children_are_one_level_deep() {
        let mut page = page();
        let locator = ShapeLocator::build(&page);
        let group = locator
            .find_mut(&mut page, "Groupe 115")
            .and_then(|e| e.as_group_mut())
            .unwrap();
        assert_eq!(find_child_mut(group, "zonetexte 109").unwrap().object_id, "c1");
        assert!(find_child_mut(group, "Deep").is_none());
    }
}
