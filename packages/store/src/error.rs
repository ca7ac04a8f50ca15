use thiserror::Error;

use crate::models::SectionId;

#[derive(Debug, Error)]
pub enum StoreError {
    /// An editor was built for a section the working copy does not have.
    /// Sections are seeded statically, so this is a programming error.
    #[error("section `{0}` not found in the working copy")]
    SectionNotFound(SectionId),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
