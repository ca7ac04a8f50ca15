//! # Edit session: committed user plus working copy
//!
//! [`EditSession`] owns the portfolio state of one browsing session. Display mode
//! reads [`user`](EditSession::user); edit mode reads and writes
//! [`temp_user`](EditSession::temp_user), usually through the section editors in
//! [`crate::editors`].
//!
//! ## Dirty tracking
//!
//! Instead of comparing the working copy against the committed user on every
//! change, the session keeps a revision counter. Every flagged replacement
//! ([`set_temp_user_with_flag`](EditSession::set_temp_user_with_flag)) bumps it;
//! committing or cancelling records the current revision as the clean one.
//! [`has_changes`](EditSession::has_changes) is a single integer comparison and is
//! always up to date with the latest replacement.
//!
//! The counter never compares content: a change undone by hand (a section
//! toggled twice, a field typed back to its old value) still reports
//! `has_changes() == true` until the next commit or cancel.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`begin_edit`](EditSession::begin_edit) | Clone the committed user into the working copy and enter edit mode. |
//! | [`set_temp_user`](EditSession::set_temp_user) | Replace the working copy, leaving dirty tracking alone. |
//! | [`set_temp_user_with_flag`](EditSession::set_temp_user_with_flag) | Replace the working copy and mark it changed. |
//! | [`save_temp_user`](EditSession::save_temp_user) | Commit the working copy and clear the flag. |
//! | [`commit_edit`](EditSession::commit_edit) / [`cancel_edit`](EditSession::cancel_edit) | Leave edit mode keeping or discarding the working copy. |

use crate::models::{ProjectLink, Section, SectionId, User};

#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    user: User,
    temp_user: User,
    editing: bool,
    revision: u64,
    clean_revision: u64,
}

impl EditSession {
    pub fn new(user: User) -> Self {
        Self {
            temp_user: user.clone(),
            user,
            editing: false,
            revision: 0,
            clean_revision: 0,
        }
    }

    /// The committed user (display mode).
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The working copy (edit mode).
    pub fn temp_user(&self) -> &User {
        &self.temp_user
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether the working copy has unsaved changes.
    pub fn has_changes(&self) -> bool {
        self.revision != self.clean_revision
    }

    /// Replace the working copy outright.
    pub fn set_temp_user(&mut self, user: User) {
        self.temp_user = user;
    }

    /// Replace the working copy and flag it as changed.
    pub fn set_temp_user_with_flag(&mut self, user: User) {
        self.temp_user = user;
        self.revision += 1;
        tracing::debug!(revision = self.revision, "working copy updated");
    }

    /// Apply an in-place change to a clone of the working copy and store it
    /// through [`set_temp_user_with_flag`](Self::set_temp_user_with_flag).
    pub fn update_temp_user(&mut self, f: impl FnOnce(&mut User)) {
        let mut next = self.temp_user.clone();
        f(&mut next);
        self.set_temp_user_with_flag(next);
    }

    /// Commit the working copy as the new committed user.
    pub fn save_temp_user(&mut self) {
        self.user = self.temp_user.clone();
        self.clean_revision = self.revision;
        tracing::info!("working copy committed");
    }

    /// Look up a section in the committed user.
    pub fn get_section(&self, id: SectionId) -> Option<&Section> {
        self.user.section(id)
    }

    /// Look up a section in the working copy.
    pub fn get_temp_section(&self, id: SectionId) -> Option<&Section> {
        self.temp_user.section(id)
    }

    /// Find a committed project link by slug.
    pub fn find_link_by_slug(&self, slug: &str) -> Option<&ProjectLink> {
        self.user.projects()?.link_by_slug(slug)
    }

    /// Seed the working copy from the committed user and enter edit mode.
    pub fn begin_edit(&mut self) {
        self.set_temp_user(self.user.clone());
        self.clean_revision = self.revision;
        self.editing = true;
    }

    /// Save and leave edit mode.
    pub fn commit_edit(&mut self) {
        self.save_temp_user();
        self.editing = false;
    }

    /// Discard the working copy and leave edit mode.
    pub fn cancel_edit(&mut self) {
        self.set_temp_user(self.user.clone());
        self.clean_revision = self.revision;
        self.editing = false;
        tracing::info!("working copy discarded");
    }

    /// Update the profile header fields of the working copy.
    pub fn update_profile(&mut self, name: &str, sub_title: &str, avatar: &str) {
        self.update_temp_user(|user| {
            user.name = name.to_string();
            user.sub_title = sub_title.to_string();
            user.avatar = avatar.to_string();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::example_user;

    #[test]
    fn test_new_session_is_clean() {
        let session = EditSession::new(example_user());
        assert!(!session.has_changes());
        assert!(!session.is_editing());
        assert_eq!(session.user(), session.temp_user());
    }

    #[test]
    fn test_flagged_update_marks_changes() {
        let mut session = EditSession::new(example_user());
        session.begin_edit();
        session.update_temp_user(|u| u.name = "Someone".to_string());

        assert!(session.has_changes());
        assert_eq!(session.temp_user().name, "Someone");
        assert_ne!(session.user().name, "Someone");
    }

    #[test]
    fn test_unflagged_set_keeps_flag() {
        let mut session = EditSession::new(example_user());
        let mut other = example_user();
        other.name = "Other".to_string();
        session.set_temp_user(other);
        assert!(!session.has_changes());
    }

    #[test]
    fn test_save_then_reset_is_clean() {
        let mut session = EditSession::new(example_user());
        session.begin_edit();
        session.update_temp_user(|u| u.sub_title = "Engineer".to_string());
        session.save_temp_user();

        let committed = session.user().clone();
        session.set_temp_user(committed);

        assert!(!session.has_changes());
        assert_eq!(session.user().sub_title, "Engineer");
    }

    #[test]
    fn test_cancel_discards_working_copy() {
        let mut session = EditSession::new(example_user());
        let original = session.user().clone();
        session.begin_edit();
        session.update_profile("New name", "New subtitle", "");
        session.cancel_edit();

        assert!(!session.has_changes());
        assert!(!session.is_editing());
        assert_eq!(session.temp_user(), &original);
        assert_eq!(session.user(), &original);
    }

    #[test]
    fn test_commit_edit_leaves_edit_mode() {
        let mut session = EditSession::new(example_user());
        session.begin_edit();
        session.update_profile("Gingy", "Analyst", "/avatar.png");
        session.commit_edit();

        assert!(!session.is_editing());
        assert!(!session.has_changes());
        assert_eq!(session.user().sub_title, "Analyst");
    }

    #[test]
    fn test_get_section_reads_committed_copy() {
        let mut session = EditSession::new(example_user());
        session.begin_edit();
        session.update_temp_user(|u| {
            if let Some(s) = u.section_mut(SectionId::About) {
                s.visible = false;
            }
        });

        assert!(session.get_section(SectionId::About).is_some_and(|s| s.visible));
        assert!(session.get_temp_section(SectionId::About).is_some_and(|s| !s.visible));
    }

    #[test]
    fn test_find_link_by_slug() {
        let session = EditSession::new(example_user());
        let link = session.find_link_by_slug("poke-catch").unwrap();
        assert_eq!(link.title, "Poke Catch");
        assert!(session.find_link_by_slug("missing").is_none());
    }
}
