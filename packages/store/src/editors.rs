//! # Section editors
//!
//! Section-scoped operations over the working copy of an [`EditSession`]. Every
//! editor borrows the session mutably for the duration of one user action and
//! writes through [`EditSession::set_temp_user_with_flag`], so the dirty flag is
//! always in step with the last mutation.
//!
//! | Editor | Section | Operations |
//! |--------|---------|-----------|
//! | [`AboutEditor`] | `about` | `toggle_visibility`, `set_text` |
//! | [`ConnectEditor`] | `connect` | `toggle_visibility`, `add`, `save`, `delete`, `reorder`, `move_item` |
//! | [`WorkEditor`] | `workExp` | same as connect |
//! | [`ProjectsEditor`] | `projects` | `toggle_visibility`, `set_type`, plus [`links`](ProjectsEditor::links) and [`artwork`](ProjectsEditor::artwork) list editors |
//!
//! Building an editor for a section the working copy lacks returns
//! [`StoreError::SectionNotFound`].
//!
//! Saving or deleting an unknown id, dragging onto an unknown item and reordering
//! with a list that is not a permutation of the current one are ignored.

use std::marker::PhantomData;

use crate::error::StoreError;
use crate::list::{self, ListItem};
use crate::models::{
    new_id, Connect, ProjectArtwork, ProjectLink, Projects, ProjectsMode, SectionData, SectionId,
    WorkExperience,
};
use crate::notify::{Notifier, NotifyKind};
use crate::session::EditSession;

/// Locates one item list inside a section payload.
pub trait ListSlot {
    type Item: ListItem;
    const SECTION: SectionId;
    const NAME: &'static str;

    fn items(data: &SectionData) -> Option<&Vec<Self::Item>>;
    fn items_mut(data: &mut SectionData) -> Option<&mut Vec<Self::Item>>;
}

pub struct Connects;
pub struct Works;
pub struct ProjectLinks;
pub struct Artworks;

impl ListSlot for Connects {
    type Item = Connect;
    const SECTION: SectionId = SectionId::Connect;
    const NAME: &'static str = "connect";

    fn items(data: &SectionData) -> Option<&Vec<Connect>> {
        match data {
            SectionData::Connect(items) => Some(items),
            _ => None,
        }
    }

    fn items_mut(data: &mut SectionData) -> Option<&mut Vec<Connect>> {
        match data {
            SectionData::Connect(items) => Some(items),
            _ => None,
        }
    }
}

impl ListSlot for Works {
    type Item = WorkExperience;
    const SECTION: SectionId = SectionId::WorkExp;
    const NAME: &'static str = "work";

    fn items(data: &SectionData) -> Option<&Vec<WorkExperience>> {
        match data {
            SectionData::WorkExp(items) => Some(items),
            _ => None,
        }
    }

    fn items_mut(data: &mut SectionData) -> Option<&mut Vec<WorkExperience>> {
        match data {
            SectionData::WorkExp(items) => Some(items),
            _ => None,
        }
    }
}

impl ListSlot for ProjectLinks {
    type Item = ProjectLink;
    const SECTION: SectionId = SectionId::Projects;
    const NAME: &'static str = "project link";

    fn items(data: &SectionData) -> Option<&Vec<ProjectLink>> {
        match data {
            SectionData::Projects(p) => Some(&p.links),
            _ => None,
        }
    }

    fn items_mut(data: &mut SectionData) -> Option<&mut Vec<ProjectLink>> {
        match data {
            SectionData::Projects(p) => Some(&mut p.links),
            _ => None,
        }
    }
}

impl ListSlot for Artworks {
    type Item = ProjectArtwork;
    const SECTION: SectionId = SectionId::Projects;
    const NAME: &'static str = "artwork";

    fn items(data: &SectionData) -> Option<&Vec<ProjectArtwork>> {
        match data {
            SectionData::Projects(p) => Some(&p.artwork),
            _ => None,
        }
    }

    fn items_mut(data: &mut SectionData) -> Option<&mut Vec<ProjectArtwork>> {
        match data {
            SectionData::Projects(p) => Some(&mut p.artwork),
            _ => None,
        }
    }
}

fn require_section(session: &EditSession, id: SectionId) -> Result<(), StoreError> {
    match session.get_temp_section(id) {
        Some(_) => Ok(()),
        None => Err(StoreError::SectionNotFound(id)),
    }
}

/// Flip a section's visibility in the working copy and tell the user about it.
/// Returns the new visibility.
fn toggle_section(session: &mut EditSession, notifier: &dyn Notifier, id: SectionId) -> bool {
    let mut visible = false;
    let mut label = String::new();
    session.update_temp_user(|user| {
        if let Some(section) = user.section_mut(id) {
            section.visible = !section.visible;
            visible = section.visible;
            label = section.label.clone();
        }
    });
    tracing::debug!(section = %id, visible, "section visibility toggled");

    if visible {
        notifier.notify(&format!("{label} is now visible"), NotifyKind::Success);
    } else {
        notifier.notify(&format!("{label} is now hidden"), NotifyKind::Info);
    }
    visible
}

/// CRUD and reordering over one item list of the working copy.
pub struct ListEditor<'a, S: ListSlot> {
    session: &'a mut EditSession,
    notifier: &'a dyn Notifier,
    _slot: PhantomData<S>,
}

pub type ConnectEditor<'a> = ListEditor<'a, Connects>;
pub type WorkEditor<'a> = ListEditor<'a, Works>;

impl<'a, S: ListSlot> ListEditor<'a, S> {
    pub fn new(session: &'a mut EditSession, notifier: &'a dyn Notifier) -> Result<Self, StoreError> {
        let has_list = session
            .get_temp_section(S::SECTION)
            .is_some_and(|s| S::items(&s.data).is_some());
        if !has_list {
            return Err(StoreError::SectionNotFound(S::SECTION));
        }
        Ok(Self {
            session,
            notifier,
            _slot: PhantomData,
        })
    }

    /// Current items of the working copy.
    pub fn items(&self) -> &[S::Item] {
        self.session
            .get_temp_section(S::SECTION)
            .and_then(|s| S::items(&s.data))
            .map(|items| items.as_slice())
            .unwrap_or(&[])
    }

    pub fn visible(&self) -> bool {
        self.session
            .get_temp_section(S::SECTION)
            .is_some_and(|s| s.visible)
    }

    pub fn toggle_visibility(&mut self) -> bool {
        toggle_section(self.session, self.notifier, S::SECTION)
    }

    /// Append an item. A missing or already used id is replaced by a fresh one.
    /// Returns the id the item was stored under.
    pub fn add(&mut self, mut item: S::Item) -> String {
        let mut items = self.items().to_vec();
        if item.id().is_empty() || list::position(&items, item.id()).is_some() {
            item.set_id(new_id());
        }
        item.normalize();
        let id = item.id().to_string();
        items.push(item);
        self.store(items);
        tracing::debug!(list = S::NAME, %id, "item added");
        id
    }

    /// Replace the item with the same id.
    pub fn save(&mut self, mut item: S::Item) {
        let mut items = self.items().to_vec();
        let Some(index) = list::position(&items, item.id()) else {
            tracing::warn!(list = S::NAME, id = item.id(), "save ignored: unknown id");
            return;
        };
        item.normalize();
        items[index] = item;
        self.store(items);
    }

    pub fn delete(&mut self, id: &str) {
        let mut items = self.items().to_vec();
        let Some(index) = list::position(&items, id) else {
            tracing::warn!(list = S::NAME, id, "delete ignored: unknown id");
            return;
        };
        items.remove(index);
        self.store(items);
        tracing::debug!(list = S::NAME, id, "item deleted");
    }

    /// Replace the list with a caller-computed ordering of the same items.
    pub fn reorder(&mut self, new_order: Vec<S::Item>) {
        if !list::is_permutation(self.items(), &new_order) {
            tracing::warn!(list = S::NAME, "reorder ignored: not a permutation of the current items");
            return;
        }
        if new_order.iter().map(ListItem::id).eq(self.items().iter().map(ListItem::id)) {
            return;
        }
        self.store(new_order);
    }

    /// Drag `active_id` onto the position of `over_id`. Returns whether the list changed.
    pub fn move_item(&mut self, active_id: &str, over_id: &str) -> bool {
        match list::drag_move(self.items(), active_id, over_id) {
            Some(reordered) => {
                self.store(reordered);
                true
            }
            None => false,
        }
    }

    fn store(&mut self, items: Vec<S::Item>) {
        self.session.update_temp_user(|user| {
            if let Some(slot) = user
                .section_mut(S::SECTION)
                .and_then(|s| S::items_mut(&mut s.data))
            {
                *slot = items;
            }
        });
    }
}

pub struct AboutEditor<'a> {
    session: &'a mut EditSession,
    notifier: &'a dyn Notifier,
}

impl<'a> AboutEditor<'a> {
    pub fn new(session: &'a mut EditSession, notifier: &'a dyn Notifier) -> Result<Self, StoreError> {
        require_section(session, SectionId::About)?;
        Ok(Self { session, notifier })
    }

    pub fn text(&self) -> &str {
        match self.session.get_temp_section(SectionId::About).map(|s| &s.data) {
            Some(SectionData::About(text)) => text,
            _ => "",
        }
    }

    pub fn toggle_visibility(&mut self) -> bool {
        toggle_section(self.session, self.notifier, SectionId::About)
    }

    pub fn set_text(&mut self, text: &str) {
        self.session.update_temp_user(|user| {
            if let Some(section) = user.section_mut(SectionId::About) {
                section.data = SectionData::About(text.to_string());
            }
        });
    }
}

pub struct ProjectsEditor<'a> {
    session: &'a mut EditSession,
    notifier: &'a dyn Notifier,
}

impl<'a> ProjectsEditor<'a> {
    pub fn new(session: &'a mut EditSession, notifier: &'a dyn Notifier) -> Result<Self, StoreError> {
        require_section(session, SectionId::Projects)?;
        Ok(Self { session, notifier })
    }

    pub fn projects(&self) -> Option<&Projects> {
        match &self.session.get_temp_section(SectionId::Projects)?.data {
            SectionData::Projects(p) => Some(p),
            _ => None,
        }
    }

    pub fn mode(&self) -> ProjectsMode {
        self.projects().map(|p| p.mode).unwrap_or_default()
    }

    pub fn toggle_visibility(&mut self) -> bool {
        toggle_section(self.session, self.notifier, SectionId::Projects)
    }

    /// Switch between showing links, artwork or both.
    pub fn set_type(&mut self, mode: ProjectsMode) {
        self.session.update_temp_user(|user| {
            if let Some(SectionData::Projects(p)) =
                user.section_mut(SectionId::Projects).map(|s| &mut s.data)
            {
                p.mode = mode;
            }
        });
    }

    pub fn links(&mut self) -> Result<ListEditor<'_, ProjectLinks>, StoreError> {
        ListEditor::new(self.session, self.notifier)
    }

    pub fn artwork(&mut self) -> Result<ListEditor<'_, Artworks>, StoreError> {
        ListEditor::new(self.session, self.notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconKey;
    use crate::models::{Section, User, WorkType};
    use crate::notify::{NotificationLog, Silent};
    use crate::seed::example_user;

    fn editing_session() -> EditSession {
        let mut session = EditSession::new(example_user());
        session.begin_edit();
        session
    }

    fn connect_ids(session: &EditSession) -> Vec<String> {
        match &session.get_temp_section(SectionId::Connect).unwrap().data {
            SectionData::Connect(items) => items.iter().map(|c| c.id.clone()).collect(),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_missing_section_fails_construction() {
        let user = User {
            id: "u".to_string(),
            name: "U".to_string(),
            sub_title: String::new(),
            avatar: String::new(),
            sections: vec![Section::new("About", SectionData::About(String::new()))],
        };
        let mut session = EditSession::new(user);
        let err = ConnectEditor::new(&mut session, &Silent).err().unwrap();
        assert!(matches!(err, StoreError::SectionNotFound(SectionId::Connect)));
        assert!(ProjectsEditor::new(&mut session, &Silent).is_err());
        assert!(AboutEditor::new(&mut session, &Silent).is_ok());
    }

    #[test]
    fn test_toggle_visibility_twice_restores() {
        let mut session = editing_session();
        let log = NotificationLog::new();
        let before: Vec<bool> = session.temp_user().sections.iter().map(|s| s.visible).collect();

        let mut editor = WorkEditor::new(&mut session, &log).unwrap();
        assert!(!editor.toggle_visibility());
        let after_one: Vec<bool> = session.temp_user().sections.iter().map(|s| s.visible).collect();
        let flipped = before.iter().zip(&after_one).filter(|(a, b)| a != b).count();
        assert_eq!(flipped, 1);

        let mut editor = WorkEditor::new(&mut session, &log).unwrap();
        assert!(editor.toggle_visibility());
        let after_two: Vec<bool> = session.temp_user().sections.iter().map(|s| s.visible).collect();
        assert_eq!(before, after_two);

        let kinds: Vec<NotifyKind> = log.entries().into_iter().map(|(_, k)| k).collect();
        assert_eq!(kinds, [NotifyKind::Info, NotifyKind::Success]);
        assert!(session.has_changes());
    }

    #[test]
    fn test_toggle_each_section() {
        let mut session = editing_session();
        assert!(!AboutEditor::new(&mut session, &Silent).unwrap().toggle_visibility());
        assert!(!ProjectsEditor::new(&mut session, &Silent).unwrap().toggle_visibility());
        assert!(!ConnectEditor::new(&mut session, &Silent).unwrap().toggle_visibility());
        assert!(session.temp_user().sections.iter().filter(|s| !s.visible).count() == 3);
        assert!(session.user().sections.iter().all(|s| s.visible));
    }

    #[test]
    fn test_add_then_delete_restores_list() {
        let mut session = editing_session();
        let before = connect_ids(&session);

        let mut editor = ConnectEditor::new(&mut session, &Silent).unwrap();
        let id = editor.add(Connect {
            media_name: "Discord".to_string(),
            icon: Some(IconKey::Discord),
            link: "discord.gg/abc".to_string(),
            ..Default::default()
        });
        assert_eq!(editor.items().len(), before.len() + 1);
        assert_eq!(editor.items().last().unwrap().link, "https://discord.gg/abc");

        editor.delete(&id);
        assert_eq!(connect_ids(&session), before);
    }

    fn slot_ids<S: ListSlot>(session: &mut EditSession) -> Vec<String> {
        ListEditor::<S>::new(session, &Silent)
            .unwrap()
            .items()
            .iter()
            .map(|item| item.id().to_string())
            .collect()
    }

    fn check_add_delete_and_reorder<S: ListSlot>()
    where
        S::Item: Default + PartialEq + std::fmt::Debug,
    {
        let mut session = editing_session();
        let before = slot_ids::<S>(&mut session);
        {
            let mut editor = ListEditor::<S>::new(&mut session, &Silent).unwrap();
            let id = editor.add(S::Item::default());
            assert_eq!(editor.items().len(), before.len() + 1, "{}", S::NAME);
            assert_eq!(editor.items().last().map(|item| item.id()), Some(id.as_str()));
            editor.delete(&id);
        }
        assert_eq!(slot_ids::<S>(&mut session), before, "{}", S::NAME);

        let mut editor = ListEditor::<S>::new(&mut session, &Silent).unwrap();
        let mut reversed = editor.items().to_vec();
        reversed.reverse();
        editor.reorder(reversed.clone());
        assert_eq!(editor.items(), reversed.as_slice(), "{}", S::NAME);
    }

    #[test]
    fn test_every_list_slot_adds_deletes_and_reorders() {
        check_add_delete_and_reorder::<Connects>();
        check_add_delete_and_reorder::<Works>();
        check_add_delete_and_reorder::<ProjectLinks>();
        check_add_delete_and_reorder::<Artworks>();
    }

    #[test]
    fn test_add_replaces_colliding_id() {
        let mut session = editing_session();
        let existing = connect_ids(&session)[0].clone();
        let mut editor = ConnectEditor::new(&mut session, &Silent).unwrap();
        let id = editor.add(Connect {
            id: existing.clone(),
            media_name: "Dup".to_string(),
            link: "dup.example".to_string(),
            ..Default::default()
        });
        assert_ne!(id, existing);
        assert!(!id.is_empty());
    }

    #[test]
    fn test_save_replaces_matching_and_ignores_unknown() {
        let mut session = editing_session();
        let mut editor = WorkEditor::new(&mut session, &Silent).unwrap();
        let mut work = editor.items()[0].clone();
        work.title = "Staff Engineer".to_string();
        work.work_type = Some(WorkType::Hybrid);
        editor.save(work);
        assert_eq!(editor.items()[0].title, "Staff Engineer");

        let snapshot = editor.items().to_vec();
        editor.save(WorkExperience {
            id: "ghost".to_string(),
            ..Default::default()
        });
        assert_eq!(editor.items(), snapshot.as_slice());
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut session = editing_session();
        let before = connect_ids(&session);
        ConnectEditor::new(&mut session, &Silent).unwrap().delete("ghost");
        assert_eq!(connect_ids(&session), before);
    }

    #[test]
    fn test_reorder_accepts_permutation_only() {
        let mut session = editing_session();
        let mut editor = ConnectEditor::new(&mut session, &Silent).unwrap();
        let mut reversed = editor.items().to_vec();
        reversed.reverse();
        editor.reorder(reversed.clone());
        assert_eq!(editor.items(), reversed.as_slice());

        let mut truncated = reversed.clone();
        truncated.pop();
        editor.reorder(truncated);
        assert_eq!(editor.items(), reversed.as_slice());
    }

    #[test]
    fn test_reorder_same_order_keeps_session_clean() {
        let mut session = editing_session();
        let current = ConnectEditor::new(&mut session, &Silent).unwrap().items().to_vec();
        ConnectEditor::new(&mut session, &Silent).unwrap().reorder(current);
        assert!(!session.has_changes());
    }

    #[test]
    fn test_move_item_follows_drag_protocol() {
        let mut session = editing_session();
        let ids = connect_ids(&session);
        let mut editor = ConnectEditor::new(&mut session, &Silent).unwrap();

        assert!(editor.move_item(&ids[0], &ids[2]));
        assert!(!editor.move_item(&ids[1], &ids[1]));
        assert!(!editor.move_item(&ids[1], "ghost"));

        let now = connect_ids(&session);
        assert_eq!(now[..3], [ids[1].clone(), ids[2].clone(), ids[0].clone()]);
        assert_eq!(now.len(), ids.len());
    }

    #[test]
    fn test_projects_set_type_and_lists() {
        let mut session = editing_session();
        let mut editor = ProjectsEditor::new(&mut session, &Silent).unwrap();
        editor.set_type(ProjectsMode::All);
        assert_eq!(editor.mode(), ProjectsMode::All);

        let art_count = editor.projects().unwrap().artwork.len();
        let link_id = editor.links().unwrap().add(ProjectLink {
            title: "Café del Mar".to_string(),
            link: "cafe.example".to_string(),
            ..Default::default()
        });
        let stored = editor
            .projects()
            .unwrap()
            .links
            .iter()
            .find(|l| l.id == link_id)
            .cloned()
            .unwrap();
        assert_eq!(stored.slug, "cafe-del-mar");
        assert_eq!(stored.link, "cafe.example", "project links are normalized by the form");
        assert_eq!(editor.projects().unwrap().artwork.len(), art_count);

        let first_art = editor.projects().unwrap().artwork[0].id.clone();
        editor.artwork().unwrap().delete(&first_art);
        assert_eq!(editor.projects().unwrap().artwork.len(), art_count - 1);

        // The committed user only changes on save.
        assert!(session.find_link_by_slug("cafe-del-mar").is_none());
        session.save_temp_user();
        assert!(session.find_link_by_slug("cafe-del-mar").is_some());
    }

    #[test]
    fn test_saving_link_recomputes_slug() {
        let mut session = editing_session();
        let mut editor = ProjectsEditor::new(&mut session, &Silent).unwrap();
        let mut links = editor.links().unwrap();
        let mut link = links.items()[0].clone();
        link.title = "Poke Catch Deluxe".to_string();
        links.save(link);
        assert_eq!(links.items()[0].slug, "poke-catch-deluxe");
    }

    #[test]
    fn test_about_set_text() {
        let mut session = editing_session();
        let mut editor = AboutEditor::new(&mut session, &Silent).unwrap();
        editor.set_text("Hello there");
        assert_eq!(editor.text(), "Hello there");
        assert!(session.has_changes());
    }
}
