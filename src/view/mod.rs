//! View layer
//!
//! Turns the content store and the current menu state into a `Document`
//! that the terminal renderer and the HTML exporter both consume.

mod document;

pub use document::{build_document, Document, Header, NavLink, Overlay, Section, SectionBody};
