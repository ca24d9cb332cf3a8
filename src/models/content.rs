//! Display records
//!
//! Immutable units of authored content. Every record is `'static` data built
//! once from literals; a record has no identity beyond its position in the
//! collection that holds it.

use serde::Serialize;

use super::enums::SectionId;

/// `rel` attribute carried by every link that opens a new browsing context
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// A project case study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub context: &'static str,
    pub role: &'static str,
    pub decisions: &'static [&'static str],
    pub impact: &'static [&'static str],
    pub stack: &'static str,
}

/// One entry of the ordered category -> skills mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilityCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhilosophyEntry {
    pub title: &'static str,
    pub content: &'static str,
}

/// A position on the experience timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

impl ExperienceEntry {
    pub fn heading(&self) -> String {
        format!("{} — {}", self.role, self.company)
    }
}

/// Where a link points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum LinkTarget {
    Anchor(SectionId),
    Mail(&'static str),
    External(&'static str),
    Asset(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub target: LinkTarget,
}

impl Link {
    pub const fn anchor(label: &'static str, section: SectionId) -> Self {
        Self {
            label,
            target: LinkTarget::Anchor(section),
        }
    }

    pub fn href(&self) -> String {
        match self.target {
            LinkTarget::Anchor(section) => format!("#{}", section.anchor().unwrap_or("top")),
            LinkTarget::Mail(address) => format!("mailto:{}", address),
            LinkTarget::External(url) | LinkTarget::Asset(url) => url.to_string(),
        }
    }

    pub fn opens_new_context(&self) -> bool {
        matches!(self.target, LinkTarget::External(_))
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_context().then_some(EXTERNAL_REL)
    }

    /// Human-readable destination shown next to the label in the terminal.
    /// Placeholder assets (`#`) have nothing worth showing.
    pub fn display_target(&self) -> Option<String> {
        match self.target {
            LinkTarget::Anchor(_) => None,
            LinkTarget::Mail(address) => Some(address.to_string()),
            LinkTarget::External(url) => Some(url.to_string()),
            LinkTarget::Asset(href) if href == "#" => None,
            LinkTarget::Asset(href) => Some(href.to_string()),
        }
    }
}

/// Copy that is not part of a record collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub availability: &'static str,
    pub resume: Link,
    pub contact: &'static [Link],
    pub copyright_year: u16,
    pub built_with: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_href() {
        let link = Link::anchor("Work", SectionId::Work);
        assert_eq!(link.href(), "#work");
        assert!(!link.opens_new_context());
        assert_eq!(link.rel(), None);
    }

    #[test]
    fn test_mail_href() {
        let link = Link {
            label: "Email Me",
            target: LinkTarget::Mail("someone@example.com"),
        };
        assert_eq!(link.href(), "mailto:someone@example.com");
        assert_eq!(link.rel(), None);
    }

    #[test]
    fn test_external_link_suppresses_referrer_and_opener() {
        let link = Link {
            label: "GitHub",
            target: LinkTarget::External("https://github.com"),
        };
        assert!(link.opens_new_context());
        assert_eq!(link.rel(), Some("noopener noreferrer"));
    }

    #[test]
    fn test_placeholder_asset_has_no_display_target() {
        let link = Link {
            label: "Resume",
            target: LinkTarget::Asset("#"),
        };
        assert_eq!(link.href(), "#");
        assert_eq!(link.display_target(), None);
    }

    #[test]
    fn test_experience_heading() {
        let entry = ExperienceEntry {
            role: "Engineer",
            company: "Acme",
            period: "2020 - 2021",
            highlights: &[],
        };
        assert_eq!(entry.heading(), "Engineer — Acme");
    }
}
