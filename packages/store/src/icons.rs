//! Icon registry for [`crate::models::Connect`] entries.
//!
//! The set of providers is closed. An unset key means "other" and resolves to a
//! generic icon.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resource used when a connect entry has no provider icon.
pub const OTHER_ICON: &str = "/icons/other.svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKey {
    Github,
    Instagram,
    X,
    Facebook,
    Linkedin,
    Gmail,
    Discord,
    Reddit,
}

impl IconKey {
    pub const ALL: [IconKey; 8] = [
        IconKey::Github,
        IconKey::Instagram,
        IconKey::X,
        IconKey::Facebook,
        IconKey::Linkedin,
        IconKey::Gmail,
        IconKey::Discord,
        IconKey::Reddit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Github => "github",
            IconKey::Instagram => "instagram",
            IconKey::X => "x",
            IconKey::Facebook => "facebook",
            IconKey::Linkedin => "linkedin",
            IconKey::Gmail => "gmail",
            IconKey::Discord => "discord",
            IconKey::Reddit => "reddit",
        }
    }

    /// Parse a registry key. Unknown keys are `None` ("other").
    pub fn parse(key: &str) -> Option<IconKey> {
        IconKey::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Whether links for this provider are email addresses.
    pub fn is_email(&self) -> bool {
        matches!(self, IconKey::Gmail)
    }

    /// Media name suggested when the provider is picked: the key, capitalized.
    pub fn display_name(&self) -> String {
        let key = self.as_str();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            IconKey::Github => "/icons/github.svg",
            IconKey::Instagram => "/icons/instagram.svg",
            IconKey::X => "/icons/x.svg",
            IconKey::Facebook => "/icons/facebook.svg",
            IconKey::Linkedin => "/icons/linkedin.svg",
            IconKey::Gmail => "/icons/gmail.svg",
            IconKey::Discord => "/icons/discord.svg",
            IconKey::Reddit => "/icons/reddit.svg",
        }
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve an optional key to its icon resource, falling back to [`OTHER_ICON`].
pub fn resolve(key: Option<IconKey>) -> &'static str {
    key.map(|k| k.path()).unwrap_or(OTHER_ICON)
}

/// Whether an optional key denotes an email provider.
pub fn is_email(key: Option<IconKey>) -> bool {
    key.is_some_and(|k| k.is_email())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_fallback() {
        assert_eq!(resolve(Some(IconKey::Github)), "/icons/github.svg");
        assert_eq!(resolve(None), OTHER_ICON);
        assert_eq!(resolve(IconKey::parse("myspace")), OTHER_ICON);
    }

    #[test]
    fn test_parse_roundtrips_every_key() {
        for key in IconKey::ALL {
            assert_eq!(IconKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(IconKey::Linkedin.display_name(), "Linkedin");
        assert_eq!(IconKey::X.display_name(), "X");
    }

    #[test]
    fn test_only_gmail_is_email() {
        assert!(is_email(Some(IconKey::Gmail)));
        assert!(!is_email(Some(IconKey::Github)));
        assert!(!is_email(None));
    }
}
