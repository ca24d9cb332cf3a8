//! Document model and the pure view function that builds it.

use crate::content::{ContentStore, VIEW_WORK};
use crate::models::{
    CapabilityCategory, ExperienceEntry, LayoutMode, Link, MenuState, PhilosophyEntry,
    ProjectRecord, SectionId,
};

/// Accessible name of the menu button
pub const TOGGLE_LABEL: &str = "Toggle menu";

/// The rendered page, independent of any output medium
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub header: Header,
    /// Only exists while the menu is open and the toggle is in use
    pub overlay: Option<Overlay>,
    pub sections: Vec<Section>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub brand: Link,
    pub inline_links: Option<Vec<NavLink>>,
    pub toggle: Option<ToggleButton>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub target: SectionId,
    pub label: &'static str,
    /// Activating the link also fires the menu's dismiss transition
    pub dismisses_menu: bool,
}

impl NavLink {
    pub fn href(&self) -> String {
        Link::anchor(self.label, self.target).href()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleButton {
    pub expanded: bool,
}

impl ToggleButton {
    pub fn label(&self) -> &'static str {
        TOGGLE_LABEL
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub heading: &'static str,
    pub subtitle: Option<&'static str>,
    pub body: SectionBody,
}

impl Section {
    pub fn anchor(&self) -> Option<&'static str> {
        self.id.anchor()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Hero {
        headline: &'static str,
        tagline: &'static str,
        actions: Vec<Link>,
    },
    Projects(&'static [ProjectRecord]),
    Philosophy(&'static [PhilosophyEntry]),
    Capabilities(&'static [CapabilityCategory]),
    Experience(&'static [ExperienceEntry]),
    About {
        paragraphs: &'static [&'static str],
        availability: &'static str,
    },
    Contact(&'static [Link]),
}

fn nav_links(dismisses_menu: bool) -> Vec<NavLink> {
    SectionId::NAV_TARGETS
        .iter()
        .map(|&target| NavLink {
            target,
            label: target.nav_label(),
            dismisses_menu,
        })
        .collect()
}

/// Build the page for the given content, menu state and layout.
///
/// Pure: the same inputs always produce an equal document.
pub fn build_document(store: &ContentStore, menu: MenuState, layout: LayoutMode) -> Document {
    let profile = store.profile();

    let header = Header {
        brand: Link::anchor(profile.initials, SectionId::Top),
        inline_links: layout.shows_inline_links().then(|| nav_links(false)),
        toggle: layout.shows_toggle().then_some(ToggleButton {
            expanded: menu.is_open(),
        }),
    };

    let overlay = (layout.shows_toggle() && menu.is_open()).then(|| Overlay {
        links: nav_links(true),
    });

    let sections = vec![
        Section {
            id: SectionId::Top,
            heading: profile.name,
            subtitle: None,
            body: SectionBody::Hero {
                headline: profile.headline,
                tagline: profile.tagline,
                actions: vec![VIEW_WORK, profile.resume],
            },
        },
        Section {
            id: SectionId::Work,
            heading: "Featured Work",
            subtitle: Some("Projects demonstrating technical ownership and impact"),
            body: SectionBody::Projects(store.projects()),
        },
        Section {
            id: SectionId::Approach,
            heading: "How I Think",
            subtitle: Some("My approach to building maintainable software"),
            body: SectionBody::Philosophy(store.philosophy()),
        },
        Section {
            id: SectionId::Capabilities,
            heading: "Capabilities",
            subtitle: None,
            body: SectionBody::Capabilities(store.capabilities()),
        },
        Section {
            id: SectionId::Experience,
            heading: "Experience",
            subtitle: None,
            body: SectionBody::Experience(store.experience()),
        },
        Section {
            id: SectionId::About,
            heading: "About",
            subtitle: None,
            body: SectionBody::About {
                paragraphs: profile.about,
                availability: profile.availability,
            },
        },
        Section {
            id: SectionId::Contact,
            heading: "Get In Touch",
            subtitle: None,
            body: SectionBody::Contact(profile.contact),
        },
    ];

    let footer = format!(
        "© {} {}. {}",
        profile.copyright_year, profile.name, profile.built_with
    );

    Document {
        header,
        overlay,
        sections,
        footer,
    }
}
