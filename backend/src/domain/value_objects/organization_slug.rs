use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized organization `name`, used as the tenant key on every record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationSlug(String);

impl OrganizationSlug {
    /// Lowercases, replaces spaces with `-` and transliterates German umlauts.
    /// Returns `None` for a blank name.
    pub fn from_display_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let mut slug = String::with_capacity(name.len());
        for ch in name.chars().flat_map(char::to_lowercase) {
            match ch {
                ' ' => slug.push('-'),
                'ä' => slug.push_str("ae"),
                'ö' => slug.push_str("oe"),
                'ü' => slug.push_str("ue"),
                'ß' => slug.push_str("ss"),
                other => slug.push(other),
            }
        }
        Some(Self(slug))
    }

    /// Fallback for registrations that name no organization.
    pub fn generated(now: DateTime<Utc>) -> Self {
        Self(format!("org-{}", now.timestamp()))
    }

    pub fn from_existing(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn transliterates_umlauts() {
        let slug = OrganizationSlug::from_display_name("SPD Fraktion Büdingen Süß").unwrap();
        assert_eq!(slug.as_str(), "spd-fraktion-buedingen-suess");
    }

    #[test]
    fn uppercase_umlauts_are_lowered_first() {
        let slug = OrganizationSlug::from_display_name("Ökologische Ärzte").unwrap();
        assert_eq!(slug.as_str(), "oekologische-aerzte");
    }

    #[test]
    fn blank_names_have_no_slug() {
        assert!(OrganizationSlug::from_display_name("   ").is_none());
    }

    #[test]
    fn generated_slug_uses_timestamp() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(OrganizationSlug::generated(now).as_str(), "org-1700000000");
    }

    proptest! {
        #[test]
        fn slugs_contain_no_spaces_or_umlauts(name in "[a-zA-Z äöüÄÖÜß]{1,40}") {
            if let Some(slug) = OrganizationSlug::from_display_name(&name) {
                let s = slug.as_str();
                prop_assert!(!s.contains(' '));
                prop_assert!(!s.chars().any(|c| "äöüÄÖÜß".contains(c)));
                prop_assert!(!s.chars().any(|c| c.is_ascii_uppercase()));
            }
        }
    }
}
