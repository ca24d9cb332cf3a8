//! Navigation menu controller
//!
//! Owns the only piece of mutable page state: whether the compact
//! navigation overlay is open.

use tracing::debug;

use super::enums::MenuState;

/// Mediates every transition of the compact navigation overlay
#[derive(Debug, Default)]
pub struct NavigationMenu {
    state: MenuState,
}

impl NavigationMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Fired by the menu button
    pub fn toggle(&mut self) -> MenuState {
        let next = self.state.toggle();
        debug!(from = self.state.label(), to = next.label(), "menu toggled");
        self.state = next;
        next
    }

    /// Fired by any link inside the overlay
    pub fn dismiss(&mut self) -> MenuState {
        if self.state.is_open() {
            debug!("menu dismissed");
        }
        self.state = self.state.dismiss();
        self.state
    }
}
