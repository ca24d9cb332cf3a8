//! UI module for portfolio-tui
//!
//! This module contains the ratatui rendering for the page: the navigation
//! bar and overlay, the section body with its anchor table, and the frame
//! composition that ties them together.

mod header;
mod helpers;
mod render;
mod sections;

pub use render::draw;
