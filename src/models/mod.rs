//! Data models for the portfolio TUI
//!
//! This module contains the core data structures:
//! - Display records and links authored in the content store
//! - The navigation menu controller
//! - Enums for state management and layout

pub mod content;
pub mod enums;
pub mod menu;

// Re-exports for convenient access
pub use content::{
    CapabilityCategory, ExperienceEntry, Link, LinkTarget, PhilosophyEntry, Profile,
    ProjectRecord,
};
pub use enums::{LayoutMode, MenuState, SectionId, DEFAULT_BREAKPOINT, HTML_BREAKPOINT_PX};
pub use menu::NavigationMenu;
