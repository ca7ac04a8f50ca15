//! # Domain models for the portfolio
//!
//! Defines the data shapes owned by [`crate::EditSession`]: the [`User`], its
//! ordered [`Section`]s and each section's typed payload. These types are
//! `Serialize + Deserialize` with camelCase field names, so a user document keeps
//! the same shape it has in exported JSON/TOML.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The portfolio owner: identity, display name, subtitle, avatar reference and sections. |
//! | [`Section`] | A named block with a label, a visibility flag and a [`SectionData`] payload. |
//! | [`SectionData`] | Tagged union of payloads. The variant *is* the section key, so a key can never disagree with its payload shape. |
//! | [`Projects`] | Display mode plus the [`ProjectLink`] and [`ProjectArtwork`] lists. |
//! | [`WorkExperience`] | A job entry with an optional [`WorkType`]. |
//! | [`Connect`] | A social/contact link with an optional [`IconKey`]. |
//!
//! Every list item carries a string `id` that is unique within its list. New ids
//! come from [`new_id`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::icons::IconKey;

/// Generate a fresh list item id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// The portfolio owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub sub_title: String,
    /// Image reference (path or data URI). Empty means "use the initial".
    pub avatar: String,
    pub sections: Vec<Section>,
}

impl User {
    /// Find a section by key.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Find a section by key, mutably.
    pub fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id() == id)
    }

    /// The projects payload, if the user has a projects section.
    pub fn projects(&self) -> Option<&Projects> {
        match &self.section(SectionId::Projects)?.data {
            SectionData::Projects(projects) => Some(projects),
            _ => None,
        }
    }
}

/// Stable section keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    About,
    Projects,
    WorkExp,
    Connect,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::WorkExp,
        SectionId::Connect,
    ];

    /// Key as used in anchors and documents: "about", "projects", "workExp", "connect".
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::WorkExp => "workExp",
            SectionId::Connect => "connect",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, independently visible block of the portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    pub visible: bool,
    #[serde(flatten)]
    pub data: SectionData,
}

impl Section {
    pub fn new(label: impl Into<String>, data: SectionData) -> Self {
        Self {
            label: label.into(),
            visible: true,
            data,
        }
    }

    /// The section key implied by the payload.
    pub fn id(&self) -> SectionId {
        self.data.id()
    }
}

/// Section payload, tagged by section key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "id", content = "data", rename_all = "camelCase")]
pub enum SectionData {
    About(String),
    Projects(Projects),
    WorkExp(Vec<WorkExperience>),
    Connect(Vec<Connect>),
}

impl SectionData {
    pub fn id(&self) -> SectionId {
        match self {
            SectionData::About(_) => SectionId::About,
            SectionData::Projects(_) => SectionId::Projects,
            SectionData::WorkExp(_) => SectionId::WorkExp,
            SectionData::Connect(_) => SectionId::Connect,
        }
    }
}

/// Which project lists the projects section displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectsMode {
    #[default]
    Links,
    Artwork,
    All,
}

impl ProjectsMode {
    pub const ALL: [ProjectsMode; 3] = [ProjectsMode::All, ProjectsMode::Links, ProjectsMode::Artwork];

    pub fn shows_links(&self) -> bool {
        matches!(self, ProjectsMode::Links | ProjectsMode::All)
    }

    pub fn shows_artwork(&self) -> bool {
        matches!(self, ProjectsMode::Artwork | ProjectsMode::All)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectsMode::Links => "Links",
            ProjectsMode::Artwork => "Artwork",
            ProjectsMode::All => "All",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projects {
    #[serde(rename = "type")]
    pub mode: ProjectsMode,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default, rename = "artWork")]
    pub artwork: Vec<ProjectArtwork>,
}

impl Projects {
    pub fn link_by_slug(&self, slug: &str) -> Option<&ProjectLink> {
        self.links.iter().find(|l| l.slug == slug)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Derived from `title`, see [`crate::format::format_slug`].
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub link: String,
    pub year: String,
    #[serde(default)]
    pub tools: ProjectTools,
}

impl ProjectLink {
    /// Change the title and recompute the slug.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.slug = crate::format::format_slug(&self.title);
    }
}

/// Tag lists describing the stack of a project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectTools {
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub database: Vec<String>,
}

/// The three tool categories of [`ProjectTools`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolCategory {
    Frontend,
    Backend,
    Database,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 3] = [ToolCategory::Frontend, ToolCategory::Backend, ToolCategory::Database];

    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Frontend => "Frontend",
            ToolCategory::Backend => "Backend",
            ToolCategory::Database => "Database",
        }
    }
}

impl ProjectTools {
    pub fn get(&self, category: ToolCategory) -> &Vec<String> {
        match category {
            ToolCategory::Frontend => &self.frontend,
            ToolCategory::Backend => &self.backend,
            ToolCategory::Database => &self.database,
        }
    }

    pub fn get_mut(&mut self, category: ToolCategory) -> &mut Vec<String> {
        match category {
            ToolCategory::Frontend => &mut self.frontend,
            ToolCategory::Backend => &mut self.backend,
            ToolCategory::Database => &mut self.database,
        }
    }

    /// Add a tag to a category. Blank and duplicate tags are ignored.
    /// Returns whether the tag was added.
    pub fn add_tag(&mut self, category: ToolCategory, tag: &str) -> bool {
        let tag = tag.trim();
        let tags = self.get_mut(category);
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            return false;
        }
        tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, category: ToolCategory, tag: &str) {
        self.get_mut(category).retain(|t| t != tag);
    }

    pub fn is_empty(&self) -> bool {
        self.frontend.is_empty() && self.backend.is_empty() && self.database.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectArtwork {
    pub id: String,
    pub image: String,
    pub title: String,
    pub description: String,
    pub year: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkType {
    Remote,
    Office,
    Hybrid,
}

impl WorkType {
    pub const ALL: [WorkType; 3] = [WorkType::Remote, WorkType::Office, WorkType::Hybrid];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Remote => "Remote",
            WorkType::Office => "Office",
            WorkType::Hybrid => "Hybrid",
        }
    }

    /// Parse the select-box value; anything unknown is "unset".
    pub fn parse(value: &str) -> Option<WorkType> {
        WorkType::ALL.into_iter().find(|w| w.as_str() == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub start: String,
    pub end: String,
    pub title: String,
    pub work_type: Option<WorkType>,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connect {
    pub id: String,
    /// `None` means "other".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconKey>,
    pub media_name: String,
    pub nick_name: String,
    /// Always stored fully qualified, see [`crate::format::format_link`].
    pub link: String,
}

impl Connect {
    /// The link as shown to visitors (`mailto:` stripped).
    pub fn display_link(&self) -> &str {
        crate::format::display_link(&self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::example_user;

    #[test]
    fn test_section_id_follows_payload() {
        let section = Section::new("Connect", SectionData::Connect(Vec::new()));
        assert_eq!(section.id(), SectionId::Connect);
        assert_eq!(section.id().as_str(), "connect");
    }

    #[test]
    fn test_seed_sections_are_unique() {
        let user = example_user();
        for id in SectionId::ALL {
            let count = user.sections.iter().filter(|s| s.id() == id).count();
            assert_eq!(count, 1, "section {id} should appear once");
        }
    }

    #[test]
    fn test_user_json_round_trip() {
        let user = example_user();
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_json_keys() {
        let json = serde_json::to_value(example_user()).unwrap();
        assert_eq!(json["subTitle"], "Systems Analyst");

        let sections = json["sections"].as_array().unwrap();
        let projects = sections.iter().find(|s| s["id"] == "projects").unwrap();
        assert_eq!(projects["label"], "Projects");
        assert_eq!(projects["visible"], true);
        assert_eq!(projects["data"]["type"], "links");
        assert!(projects["data"]["artWork"].is_array());

        let work = sections.iter().find(|s| s["id"] == "workExp").unwrap();
        assert_eq!(work["data"][0]["workType"], "Remote");

        let connect = sections.iter().find(|s| s["id"] == "connect").unwrap();
        assert_eq!(connect["data"][0]["mediaName"], "GitHub");
    }

    #[test]
    fn test_set_title_recomputes_slug() {
        let mut link = ProjectLink::default();
        link.set_title("Poke Catch!");
        assert_eq!(link.slug, "poke-catch");
        link.set_title("Café del Mar");
        assert_eq!(link.slug, "cafe-del-mar");
    }

    #[test]
    fn test_tool_tags_skip_blank_and_duplicates() {
        let mut tools = ProjectTools::default();
        assert!(tools.add_tag(ToolCategory::Frontend, " React "));
        assert!(!tools.add_tag(ToolCategory::Frontend, "React"));
        assert!(!tools.add_tag(ToolCategory::Frontend, "   "));
        assert!(tools.add_tag(ToolCategory::Backend, "React"));
        assert_eq!(tools.frontend, vec!["React".to_string()]);

        tools.remove_tag(ToolCategory::Frontend, "React");
        assert!(tools.frontend.is_empty());
        assert!(!tools.is_empty());
    }

    #[test]
    fn test_work_type_parse() {
        assert_eq!(WorkType::parse("Hybrid"), Some(WorkType::Hybrid));
        assert_eq!(WorkType::parse(""), None);
    }

    #[test]
    fn test_projects_mode_visibility() {
        assert!(ProjectsMode::All.shows_links() && ProjectsMode::All.shows_artwork());
        assert!(!ProjectsMode::Links.shows_artwork());
        assert!(!ProjectsMode::Artwork.shows_links());
    }
}
