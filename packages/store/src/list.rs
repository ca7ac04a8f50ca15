//! Ordered item lists: identity, normalization and the reorder protocol.
//!
//! Dragging item `active` over item `over` moves `active` to the index `over`
//! currently holds. It is a single-element move, not a swap: the items between
//! the two positions shift by one.

use std::collections::HashMap;

use crate::format::{format_link, format_slug};
use crate::models::{Connect, ProjectArtwork, ProjectLink, WorkExperience};

/// An entry of an editable section list.
pub trait ListItem: Clone {
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Re-establish derived fields before the item is stored.
    fn normalize(&mut self) {}
}

impl ListItem for ProjectLink {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn normalize(&mut self) {
        self.slug = format_slug(&self.title);
    }
}

impl ListItem for ProjectArtwork {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl ListItem for WorkExperience {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl ListItem for Connect {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn normalize(&mut self) {
        self.link = format_link(&self.link, self.icon);
    }
}

/// Index of the item with the given id.
pub fn position<T: ListItem>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Move the element at `from` to `to`, shifting the ones in between.
/// Out-of-range indices leave the list untouched.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Apply a drag of `active_id` over `over_id`.
///
/// Returns the new ordering, or `None` when either id is unknown or both point
/// to the same position.
pub fn drag_move<T: ListItem>(items: &[T], active_id: &str, over_id: &str) -> Option<Vec<T>> {
    let from = position(items, active_id)?;
    let to = position(items, over_id)?;
    if from == to {
        return None;
    }
    let mut reordered = items.to_vec();
    move_item(&mut reordered, from, to);
    Some(reordered)
}

/// Whether `candidate` holds exactly the same ids as `current`, in any order.
pub fn is_permutation<T: ListItem>(current: &[T], candidate: &[T]) -> bool {
    if current.len() != candidate.len() {
        return false;
    }
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for item in current {
        *counts.entry(item.id()).or_default() += 1;
    }
    for item in candidate {
        *counts.entry(item.id()).or_default() -= 1;
    }
    counts.values().all(|c| *c == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn works(ids: &[&str]) -> Vec<WorkExperience> {
        ids.iter()
            .map(|id| WorkExperience {
                id: id.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn ids(items: &[WorkExperience]) -> Vec<&str> {
        items.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn test_move_first_to_last() {
        let mut items = works(&["item0", "item1", "item2"]);
        move_item(&mut items, 0, 2);
        assert_eq!(ids(&items), ["item1", "item2", "item0"]);
    }

    #[test]
    fn test_move_last_to_first() {
        let mut items = works(&["a", "b", "c", "d"]);
        move_item(&mut items, 3, 1);
        assert_eq!(ids(&items), ["a", "d", "b", "c"]);
    }

    #[test]
    fn test_move_same_index_is_noop() {
        let mut items = works(&["a", "b", "c"]);
        move_item(&mut items, 1, 1);
        assert_eq!(ids(&items), ["a", "b", "c"]);
    }

    #[test]
    fn test_move_out_of_range_is_noop() {
        let mut items = works(&["a", "b"]);
        move_item(&mut items, 0, 5);
        assert_eq!(ids(&items), ["a", "b"]);
    }

    #[test]
    fn test_drag_move_by_identity() {
        let items = works(&["item0", "item1", "item2"]);
        let reordered = drag_move(&items, "item0", "item2").unwrap();
        assert_eq!(ids(&reordered), ["item1", "item2", "item0"]);
        assert!(is_permutation(&items, &reordered));
    }

    #[test]
    fn test_drag_move_ignores_unknown_or_same_target() {
        let items = works(&["a", "b"]);
        assert!(drag_move(&items, "a", "zzz").is_none());
        assert!(drag_move(&items, "zzz", "a").is_none());
        assert!(drag_move(&items, "a", "a").is_none());
    }

    #[test]
    fn test_drag_move_preserves_ids_for_every_pair() {
        let items = works(&["a", "b", "c", "d", "e"]);
        for from in &items {
            for to in &items {
                if let Some(reordered) = drag_move(&items, &from.id, &to.id) {
                    assert_eq!(reordered.len(), items.len());
                    assert!(is_permutation(&items, &reordered));
                    assert_eq!(position(&reordered, &from.id), position(&items, &to.id));
                }
            }
        }
    }

    #[test]
    fn test_is_permutation_rejects_changed_sets() {
        let items = works(&["a", "b", "c"]);
        assert!(!is_permutation(&items, &works(&["a", "b"])));
        assert!(!is_permutation(&items, &works(&["a", "b", "x"])));
        assert!(!is_permutation(&items, &works(&["a", "a", "b"])));
        assert!(is_permutation(&items, &works(&["c", "a", "b"])));
    }

    #[test]
    fn test_normalize_connect_and_link() {
        let mut connect = Connect {
            icon: Some(crate::icons::IconKey::Gmail),
            link: "test@test.com".to_string(),
            ..Default::default()
        };
        connect.normalize();
        assert_eq!(connect.link, "mailto:test@test.com");

        let mut link = ProjectLink {
            title: "Café del Mar".to_string(),
            slug: "stale".to_string(),
            ..Default::default()
        };
        link.normalize();
        assert_eq!(link.slug, "cafe-del-mar");
    }
}
