//! # Add/edit forms
//!
//! Every editable entity has a *draft*, the raw text the user is typing, and a
//! [`FormState`] wrapping it with per-field errors and the id of the item being
//! edited, if any.
//!
//! Rules are checked on [`submit`](FormState::submit), not per keystroke. Errors
//! stay attached to their field until the user edits that field again
//! ([`edit`](FormState::edit)). A successful submit yields a normalized item:
//! a fresh id for "add", the original id for "edit", links and slugs formatted.
//!
//! | Draft | Required fields |
//! |-------|----------------|
//! | [`ConnectDraft`] | media name, link (valid email for email providers) |
//! | [`ProjectLinkDraft`] | title, description, year, link |
//! | [`ArtworkDraft`] | image, title, year |
//! | [`WorkDraft`] | title, start, end, work type |
//! | [`ProfileDraft`] | name |

use std::collections::BTreeMap;
use std::fmt::Debug;

use thiserror::Error;

use crate::format::{display_link, format_link, format_slug, is_valid_email};
use crate::icons::{self, IconKey};
use crate::models::{
    new_id, Connect, ProjectArtwork, ProjectLink, ProjectTools, User, WorkExperience, WorkType,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Enter a valid email address")]
    InvalidEmail,
}

/// Validation errors keyed by field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, FieldError>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: F, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Record `Required` when `value` is blank.
    pub fn require(&mut self, field: F, value: &str) {
        if value.trim().is_empty() {
            self.set(field, FieldError::Required);
        }
    }

    pub fn clear(&mut self, field: F) {
        self.errors.remove(&field);
    }

    pub fn get(&self, field: F) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> Vec<F> {
        self.errors.keys().copied().collect()
    }
}

/// The editable, unvalidated form of an entity.
pub trait Draft: Clone + Default {
    type Field: Copy + Ord + Debug;
    type Item;

    fn validate(&self) -> FieldErrors<Self::Field>;

    /// Build the normalized item. Only called on a draft that validated.
    fn build(&self, id: String) -> Self::Item;

    /// Draft pre-filled from an existing item, with that item's id.
    fn from_item(item: &Self::Item) -> (String, Self);
}

/// A draft plus its errors and the id it edits.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState<D: Draft> {
    pub draft: D,
    errors: FieldErrors<D::Field>,
    editing: Option<String>,
}

impl<D: Draft> Default for FormState<D> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            errors: FieldErrors::default(),
            editing: None,
        }
    }
}

impl<D: Draft> FormState<D> {
    /// An empty form that creates a new item.
    pub fn for_add() -> Self {
        Self::default()
    }

    /// A form pre-filled from `item` that keeps its id.
    pub fn for_edit(item: &D::Item) -> Self {
        let (id, draft) = D::from_item(item);
        Self {
            draft,
            errors: FieldErrors::default(),
            editing: Some(id),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn error(&self, field: D::Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors<D::Field> {
        &self.errors
    }

    /// Change the draft through `f` and clear the error of `field`.
    pub fn edit(&mut self, field: D::Field, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
        self.errors.clear(field);
    }

    /// Validate and, when valid, produce the normalized item.
    pub fn submit(&mut self) -> Option<D::Item> {
        self.errors = self.draft.validate();
        if !self.errors.is_empty() {
            tracing::debug!(fields = ?self.errors.fields(), "form rejected");
            return None;
        }
        let id = self.editing.clone().unwrap_or_else(new_id);
        Some(self.draft.build(id))
    }

    /// Back to an empty "add" form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConnectField {
    MediaName,
    Link,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectDraft {
    pub icon: Option<IconKey>,
    pub media_name: String,
    pub nick_name: String,
    /// Display form: no `mailto:` prefix.
    pub link: String,
}

impl ConnectDraft {
    /// Pick a provider; the media name follows it.
    pub fn select_icon(&mut self, icon: Option<IconKey>) {
        self.icon = icon;
        self.media_name = icon.map(|k| k.display_name()).unwrap_or_default();
    }

    pub fn is_email(&self) -> bool {
        icons::is_email(self.icon)
    }
}

impl Draft for ConnectDraft {
    type Field = ConnectField;
    type Item = Connect;

    fn validate(&self) -> FieldErrors<ConnectField> {
        let mut errors = FieldErrors::new();
        errors.require(ConnectField::MediaName, &self.media_name);
        errors.require(ConnectField::Link, &self.link);
        if errors.get(ConnectField::Link).is_none() && self.is_email() && !is_valid_email(&self.link) {
            errors.set(ConnectField::Link, FieldError::InvalidEmail);
        }
        errors
    }

    fn build(&self, id: String) -> Connect {
        Connect {
            id,
            icon: self.icon,
            media_name: self.media_name.trim().to_string(),
            nick_name: self.nick_name.trim().to_string(),
            link: format_link(&self.link, self.icon),
        }
    }

    fn from_item(item: &Connect) -> (String, Self) {
        let draft = Self {
            icon: item.icon,
            media_name: item.media_name.clone(),
            nick_name: item.nick_name.clone(),
            link: display_link(&item.link).to_string(),
        };
        (item.id.clone(), draft)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProjectLinkField {
    Title,
    Description,
    Year,
    Link,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectLinkDraft {
    pub icon: String,
    pub cover: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub link: String,
    pub year: String,
    pub tools: ProjectTools,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl Draft for ProjectLinkDraft {
    type Field = ProjectLinkField;
    type Item = ProjectLink;

    fn validate(&self) -> FieldErrors<ProjectLinkField> {
        let mut errors = FieldErrors::new();
        errors.require(ProjectLinkField::Title, &self.title);
        errors.require(ProjectLinkField::Description, &self.description);
        errors.require(ProjectLinkField::Year, &self.year);
        errors.require(ProjectLinkField::Link, &self.link);
        errors
    }

    fn build(&self, id: String) -> ProjectLink {
        ProjectLink {
            id,
            icon: non_empty(&self.icon),
            cover: non_empty(&self.cover),
            slug: format_slug(&self.title),
            title: self.title.trim().to_string(),
            subtitle: self.subtitle.trim().to_string(),
            description: self.description.clone(),
            link: format_link(&self.link, None),
            year: self.year.trim().to_string(),
            tools: self.tools.clone(),
        }
    }

    fn from_item(item: &ProjectLink) -> (String, Self) {
        let draft = Self {
            icon: item.icon.clone().unwrap_or_default(),
            cover: item.cover.clone().unwrap_or_default(),
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            description: item.description.clone(),
            link: item.link.clone(),
            year: item.year.clone(),
            tools: item.tools.clone(),
        };
        (item.id.clone(), draft)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArtworkField {
    Image,
    Title,
    Year,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtworkDraft {
    pub image: String,
    pub title: String,
    pub description: String,
    pub year: String,
}

impl Draft for ArtworkDraft {
    type Field = ArtworkField;
    type Item = ProjectArtwork;

    fn validate(&self) -> FieldErrors<ArtworkField> {
        let mut errors = FieldErrors::new();
        errors.require(ArtworkField::Image, &self.image);
        errors.require(ArtworkField::Title, &self.title);
        errors.require(ArtworkField::Year, &self.year);
        errors
    }

    fn build(&self, id: String) -> ProjectArtwork {
        ProjectArtwork {
            id,
            image: self.image.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            year: self.year.trim().to_string(),
        }
    }

    fn from_item(item: &ProjectArtwork) -> (String, Self) {
        let draft = Self {
            image: item.image.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            year: item.year.clone(),
        };
        (item.id.clone(), draft)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkField {
    Title,
    Start,
    End,
    WorkType,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkDraft {
    pub title: String,
    pub start: String,
    pub end: String,
    pub work_type: Option<WorkType>,
    pub description: String,
}

impl Draft for WorkDraft {
    type Field = WorkField;
    type Item = WorkExperience;

    fn validate(&self) -> FieldErrors<WorkField> {
        let mut errors = FieldErrors::new();
        errors.require(WorkField::Title, &self.title);
        errors.require(WorkField::Start, &self.start);
        errors.require(WorkField::End, &self.end);
        if self.work_type.is_none() {
            errors.set(WorkField::WorkType, FieldError::Required);
        }
        errors
    }

    fn build(&self, id: String) -> WorkExperience {
        WorkExperience {
            id,
            start: self.start.trim().to_string(),
            end: self.end.trim().to_string(),
            title: self.title.trim().to_string(),
            work_type: self.work_type,
            description: self.description.clone(),
        }
    }

    fn from_item(item: &WorkExperience) -> (String, Self) {
        let draft = Self {
            title: item.title.clone(),
            start: item.start.clone(),
            end: item.end.clone(),
            work_type: item.work_type,
            description: item.description.clone(),
        };
        (item.id.clone(), draft)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfileField {
    Name,
}

/// Header fields of the [`User`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub sub_title: String,
    pub avatar: String,
}

impl Draft for ProfileDraft {
    type Field = ProfileField;
    type Item = User;

    fn validate(&self) -> FieldErrors<ProfileField> {
        let mut errors = FieldErrors::new();
        errors.require(ProfileField::Name, &self.name);
        errors
    }

    /// Only the header fields are meaningful; sections are left empty.
    fn build(&self, id: String) -> User {
        User {
            id,
            name: self.name.trim().to_string(),
            sub_title: self.sub_title.trim().to_string(),
            avatar: self.avatar.trim().to_string(),
            sections: Vec::new(),
        }
    }

    fn from_item(item: &User) -> (String, Self) {
        let draft = Self {
            name: item.name.clone(),
            sub_title: item.sub_title.clone(),
            avatar: item.avatar.clone(),
        };
        (item.id.clone(), draft)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_connect_gmail_link_gets_mailto() {
        let mut form = FormState::<ConnectDraft>::for_add();
        form.edit(ConnectField::MediaName, |d| d.select_icon(Some(IconKey::Gmail)));
        form.edit(ConnectField::Link, |d| d.link = "test@test.com".to_string());

        let connect = form.submit().unwrap();
        assert_eq!(connect.media_name, "Gmail");
        assert_eq!(connect.link, "mailto:test@test.com");
        assert_eq!(connect.display_link(), "test@test.com");
        assert!(!connect.id.is_empty());
    }

    #[rstest]
    #[case(None, "", "", Some(FieldError::Required), Some(FieldError::Required))]
    #[case(None, "Blog", "", None, Some(FieldError::Required))]
    #[case(Some(IconKey::Gmail), "Gmail", "not-an-email", None, Some(FieldError::InvalidEmail))]
    #[case(Some(IconKey::Github), "Github", "not-an-email", None, None)]
    fn test_connect_validation(
        #[case] icon: Option<IconKey>,
        #[case] media_name: &str,
        #[case] link: &str,
        #[case] media_error: Option<FieldError>,
        #[case] link_error: Option<FieldError>,
    ) {
        let draft = ConnectDraft {
            icon,
            media_name: media_name.to_string(),
            link: link.to_string(),
            ..Default::default()
        };
        let errors = draft.validate();
        assert_eq!(errors.get(ConnectField::MediaName), media_error);
        assert_eq!(errors.get(ConnectField::Link), link_error);
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut form = FormState::<ConnectDraft>::for_add();
        assert!(form.submit().is_none());
        assert_eq!(form.error(ConnectField::Link), Some(FieldError::Required));
        assert_eq!(form.error(ConnectField::MediaName), Some(FieldError::Required));

        form.edit(ConnectField::Link, |d| d.link.push('x'));
        assert_eq!(form.error(ConnectField::Link), None);
        assert_eq!(form.error(ConnectField::MediaName), Some(FieldError::Required));
    }

    #[test]
    fn test_select_icon_autofills_media_name() {
        let mut draft = ConnectDraft::default();
        draft.select_icon(Some(IconKey::Instagram));
        assert_eq!(draft.media_name, "Instagram");
        draft.select_icon(None);
        assert_eq!(draft.media_name, "");
    }

    #[test]
    fn test_edit_keeps_id_and_shows_display_link() {
        let existing = Connect {
            id: "c-9".to_string(),
            icon: Some(IconKey::Gmail),
            media_name: "Gmail".to_string(),
            nick_name: "me".to_string(),
            link: "mailto:me@example.com".to_string(),
        };
        let mut form = FormState::<ConnectDraft>::for_edit(&existing);
        assert!(form.is_edit());
        assert_eq!(form.draft.link, "me@example.com");

        form.edit(ConnectField::Link, |d| d.link = "you@example.com".to_string());
        let saved = form.submit().unwrap();
        assert_eq!(saved.id, "c-9");
        assert_eq!(saved.link, "mailto:you@example.com");
    }

    #[test]
    fn test_work_missing_type_is_rejected() {
        let mut form = FormState::<WorkDraft>::for_add();
        form.draft = WorkDraft {
            title: "Frontend Developer".to_string(),
            start: "2022".to_string(),
            end: "2023".to_string(),
            work_type: None,
            description: String::new(),
        };
        assert!(form.submit().is_none());
        assert_eq!(form.error(WorkField::WorkType), Some(FieldError::Required));
        assert_eq!(form.errors().fields(), vec![WorkField::WorkType]);
    }

    #[test]
    fn test_project_link_requires_description_and_builds_slug() {
        let mut form = FormState::<ProjectLinkDraft>::for_add();
        form.draft.title = "Poke Catch!".to_string();
        form.draft.year = "2024".to_string();
        form.draft.link = "poke.example".to_string();
        assert!(form.submit().is_none());
        assert_eq!(form.error(ProjectLinkField::Description), Some(FieldError::Required));

        form.edit(ProjectLinkField::Description, |d| d.description = "Catch them".to_string());
        let link = form.submit().unwrap();
        assert_eq!(link.slug, "poke-catch");
        assert_eq!(link.link, "https://poke.example");
        assert_eq!(link.icon, None);
    }

    #[test]
    fn test_artwork_required_fields() {
        let errors = ArtworkDraft {
            description: "only a description".to_string(),
            ..Default::default()
        }
        .validate();
        assert_eq!(
            errors.fields(),
            vec![ArtworkField::Image, ArtworkField::Title, ArtworkField::Year]
        );
    }

    #[test]
    fn test_profile_requires_name() {
        let mut form = FormState::<ProfileDraft>::for_add();
        form.draft.name = "   ".to_string();
        assert!(form.submit().is_none());
        form.edit(ProfileField::Name, |d| d.name = "Gingy".to_string());
        assert_eq!(form.submit().unwrap().name, "Gingy");
    }

    #[test]
    fn test_reset_returns_to_empty_add_form() {
        let work = WorkExperience {
            id: "w".to_string(),
            title: "T".to_string(),
            ..Default::default()
        };
        let mut form = FormState::<WorkDraft>::for_edit(&work);
        let _ = form.submit();
        form.reset();
        assert_eq!(form, FormState::<WorkDraft>::for_add());
    }
}
