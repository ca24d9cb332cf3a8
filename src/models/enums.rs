//! Enums used throughout the portfolio TUI
//!
//! This module contains the small value types that drive rendering decisions:
//! the menu state, the layout mode derived from the viewport width, and the
//! identifiers of the page sections.

use serde::Serialize;

/// Default compact/wide threshold in terminal columns
pub const DEFAULT_BREAKPOINT: u16 = 96;

/// Breakpoint used by the HTML export's media query, in CSS pixels
pub const HTML_BREAKPOINT_PX: u16 = 768;

/// Open/closed state of the compact navigation overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Dismissal always lands on `Closed`, whatever the current state.
    pub fn dismiss(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuState::Closed => "closed",
            MenuState::Open => "open",
        }
    }
}

/// Which navigation form a render uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,    // Below the breakpoint: toggle button + overlay
    Wide,       // At or above the breakpoint: inline links only
    Responsive, // Both forms emitted, breakpoint left to a CSS media query
}

impl LayoutMode {
    pub fn for_width(columns: u16, breakpoint: u16) -> Self {
        if columns < breakpoint {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    pub fn shows_inline_links(self) -> bool {
        !matches!(self, LayoutMode::Compact)
    }

    pub fn shows_toggle(self) -> bool {
        !matches!(self, LayoutMode::Wide)
    }
}

/// Page sections in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Top,
    Work,
    Approach,
    Capabilities,
    Experience,
    About,
    Contact,
}

impl SectionId {
    /// Targets listed by both the inline navigation and the overlay
    pub const NAV_TARGETS: [SectionId; 5] = [
        SectionId::Work,
        SectionId::Approach,
        SectionId::Capabilities,
        SectionId::About,
        SectionId::Contact,
    ];

    /// In-page anchor, without the leading `#`.
    /// The experience timeline is not addressable.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            SectionId::Top => Some("top"),
            SectionId::Work => Some("work"),
            SectionId::Approach => Some("approach"),
            SectionId::Capabilities => Some("capabilities"),
            SectionId::Experience => None,
            SectionId::About => Some("about"),
            SectionId::Contact => Some("contact"),
        }
    }

    /// Label used by navigation links
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Top => "Top",
            SectionId::Work => "Work",
            SectionId::Approach => "Approach",
            SectionId::Capabilities => "Capabilities",
            SectionId::Experience => "Experience",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_state_default_is_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn test_menu_state_toggle() {
        assert_eq!(MenuState::Closed.toggle(), MenuState::Open);
        assert_eq!(MenuState::Open.toggle(), MenuState::Closed);
    }

    #[test]
    fn test_menu_state_dismiss_always_closes() {
        assert_eq!(MenuState::Open.dismiss(), MenuState::Closed);
        assert_eq!(MenuState::Closed.dismiss(), MenuState::Closed);
    }

    #[test]
    fn test_layout_mode_for_width() {
        assert_eq!(LayoutMode::for_width(80, 96), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_width(96, 96), LayoutMode::Wide);
        assert_eq!(LayoutMode::for_width(140, 96), LayoutMode::Wide);
    }

    #[test]
    fn test_layout_mode_navigation_forms() {
        assert!(!LayoutMode::Compact.shows_inline_links());
        assert!(LayoutMode::Compact.shows_toggle());
        assert!(LayoutMode::Wide.shows_inline_links());
        assert!(!LayoutMode::Wide.shows_toggle());
        assert!(LayoutMode::Responsive.shows_inline_links());
        assert!(LayoutMode::Responsive.shows_toggle());
    }

    #[test]
    fn test_experience_has_no_anchor() {
        assert_eq!(SectionId::Experience.anchor(), None);
        assert!(!SectionId::NAV_TARGETS.contains(&SectionId::Experience));
    }

    #[test]
    fn test_nav_target_anchors() {
        let anchors: Vec<&str> = SectionId::NAV_TARGETS
            .iter()
            .filter_map(|s| s.anchor())
            .collect();
        assert_eq!(anchors, vec!["work", "approach", "capabilities", "about", "contact"]);
    }
}
