pub mod config;
pub mod drag;
pub mod editors;
pub mod error;
pub mod format;
pub mod forms;
pub mod icons;
pub mod list;
pub mod models;
pub mod notify;
pub mod seed;
pub mod session;

pub use config::PortfolioConfig;
pub use editors::{AboutEditor, ConnectEditor, ListEditor, ProjectsEditor, WorkEditor};
pub use error::StoreError;
pub use icons::IconKey;
pub use models::{
    Connect, ProjectArtwork, ProjectLink, ProjectTools, Projects, ProjectsMode, Section, SectionData,
    SectionId, ToolCategory, User, WorkExperience, WorkType,
};
pub use notify::{Notifier, NotifyKind};
pub use session::EditSession;
