//! Formatting helpers shared by forms and editors: slugs, links, emails.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::icons::{self, IconKey};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

const MAILTO: &str = "mailto:";

/// Derive a URL-safe slug from a project title.
///
/// Lowercases, strips accents, drops everything but `a-z`, `0-9`, whitespace and
/// hyphens, trims, then collapses runs of whitespace/hyphens into one hyphen.
pub fn format_slug(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    for c in kept.trim().chars() {
        if c.is_whitespace() || c == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else {
            slug.push(c);
        }
    }
    slug
}

/// Normalize a link to its stored form.
///
/// Email providers get a `mailto:` prefix, everything else gets `https://`
/// unless it already carries an `http(s)://` scheme.
pub fn format_link(value: &str, icon: Option<IconKey>) -> String {
    let trimmed = value.trim();

    if icons::is_email(icon) {
        return if trimmed.starts_with(MAILTO) {
            trimmed.to_string()
        } else {
            format!("{MAILTO}{trimmed}")
        };
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// The link as shown to people: `mailto:` stripped.
pub fn display_link(link: &str) -> &str {
    link.strip_prefix(MAILTO).unwrap_or(link)
}

/// Basic `local@domain.tld` check.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Poke Catch!", "poke-catch")]
    #[case("Café del Mar", "cafe-del-mar")]
    #[case("Portfolio personal ", "portfolio-personal")]
    #[case("  a - b  ", "a-b")]
    #[case("Ñandú   2024", "nandu-2024")]
    #[case("!!!", "")]
    fn test_format_slug(#[case] title: &str, #[case] expected: &str) {
        assert_eq!(format_slug(title), expected);
    }

    #[test]
    fn test_format_slug_is_deterministic() {
        assert_eq!(format_slug("Lago al atardecer"), format_slug("Lago al atardecer"));
    }

    #[rstest]
    #[case("example.com", None, "https://example.com")]
    #[case("http://example.com", None, "http://example.com")]
    #[case(" https://example.com ", Some(IconKey::Github), "https://example.com")]
    #[case("a@b.com", Some(IconKey::Gmail), "mailto:a@b.com")]
    #[case("mailto:a@b.com", Some(IconKey::Gmail), "mailto:a@b.com")]
    fn test_format_link(#[case] value: &str, #[case] icon: Option<IconKey>, #[case] expected: &str) {
        assert_eq!(format_link(value, icon), expected);
    }

    #[test]
    fn test_display_link_strips_mailto() {
        assert_eq!(display_link("mailto:test@test.com"), "test@test.com");
        assert_eq!(display_link("https://github.com"), "https://github.com");
    }

    #[rstest]
    #[case("test@test.com", true)]
    #[case("a@b.co", true)]
    #[case("no-at.com", false)]
    #[case("a@b", false)]
    #[case("a b@c.com", false)]
    fn test_is_valid_email(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(value), expected);
    }
}
