//! Application state and core logic for the portfolio TUI.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: the navigation menu controller, the layout
//! derived from the terminal width, and scroll/cursor state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::config::UiSettings;
use crate::content::ContentStore;
use crate::models::{LayoutMode, MenuState, NavigationMenu, SectionId};
use crate::theme::{glyphs, Glyphs};
use crate::view::{build_document, Document, NavLink};

/// Application state
pub struct App {
    content: &'static ContentStore,
    menu: NavigationMenu,
    layout: LayoutMode,
    breakpoint: u16,
    pub glyphs: Glyphs,
    // First body line shown (clamped against the body length on draw)
    pub scroll: usize,
    // Selected entry in the overlay
    pub overlay_cursor: usize,
    // Anchor to resolve on the next draw, once line offsets are known
    pending_jump: Option<SectionId>,
    // Body rows visible in the last frame, used for paging
    pub page_height: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(content: &'static ContentStore, settings: &UiSettings, columns: u16) -> Self {
        Self {
            content,
            menu: NavigationMenu::new(),
            layout: LayoutMode::for_width(columns, settings.breakpoint),
            breakpoint: settings.breakpoint,
            glyphs: glyphs(settings.ascii_only),
            scroll: 0,
            overlay_cursor: 0,
            pending_jump: None,
            page_height: 0,
            should_quit: false,
        }
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// The page for the current state
    pub fn document(&self) -> Document {
        build_document(self.content, self.menu.state(), self.layout)
    }

    pub fn overlay_visible(&self) -> bool {
        self.layout.shows_toggle() && self.menu.state().is_open()
    }

    /// Recompute the layout after a terminal resize.
    /// The menu state survives so the overlay reappears when narrowing again.
    pub fn resize(&mut self, columns: u16) {
        let layout = LayoutMode::for_width(columns, self.breakpoint);
        if layout != self.layout {
            debug!(columns, ?layout, "layout changed");
            self.layout = layout;
        }
    }

    /// Press the menu button, if it is on screen
    pub fn activate_toggle(&mut self) {
        if !self.layout.shows_toggle() {
            return;
        }
        if self.menu.toggle().is_open() {
            self.overlay_cursor = 0;
        }
    }

    /// Follow a navigation link; overlay links also dismiss the menu
    pub fn activate_link(&mut self, link: NavLink) {
        self.jump_to(link.target);
        if link.dismisses_menu {
            self.menu.dismiss();
        }
    }

    /// Activate the n-th rendered navigation link (zero based)
    pub fn activate_nav(&mut self, index: usize) {
        let doc = self.document();
        let links = match (&doc.overlay, &doc.header.inline_links) {
            (Some(overlay), _) => &overlay.links,
            (None, Some(links)) => links,
            (None, None) => return,
        };
        if let Some(&link) = links.get(index) {
            self.activate_link(link);
        }
    }

    pub fn jump_to(&mut self, section: SectionId) {
        debug!(?section, "anchor jump");
        self.pending_jump = Some(section);
    }

    pub fn take_pending_jump(&mut self) -> Option<SectionId> {
        self.pending_jump.take()
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    /// Keep the scroll offset inside a body of `total` lines showing `visible`
    pub fn clamp_scroll(&mut self, total: usize, visible: usize) {
        let max = total.saturating_sub(visible);
        self.scroll = self.scroll.min(max);
    }

    fn move_cursor(&mut self, delta: isize) {
        let count = SectionId::NAV_TARGETS.len();
        let next = self.overlay_cursor as isize + delta;
        self.overlay_cursor = next.rem_euclid(count as isize) as usize;
    }

    fn page(&self) -> isize {
        self.page_height.max(1) as isize
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('m') => self.activate_toggle(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.activate_nav(index);
            }
            KeyCode::Up | KeyCode::Char('k') if self.overlay_visible() => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') if self.overlay_visible() => self.move_cursor(1),
            KeyCode::Enter if self.overlay_visible() => {
                self.activate_nav(self.overlay_cursor);
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-self.page()),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(self.page()),
            KeyCode::Home | KeyCode::Char('g') => self.jump_to(SectionId::Top),
            KeyCode::End | KeyCode::Char('G') => self.scroll = usize::MAX,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_BREAKPOINT;

    fn settings() -> UiSettings {
        UiSettings::default()
    }

    fn compact_app() -> App {
        App::new(ContentStore::portfolio(), &settings(), 60)
    }

    fn wide_app() -> App {
        App::new(ContentStore::portfolio(), &settings(), 140)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_initial_state() {
        let app = compact_app();
        assert_eq!(app.menu_state(), MenuState::Closed);
        assert_eq!(app.layout(), LayoutMode::Compact);
        assert!(app.document().overlay.is_none());
    }

    #[test]
    fn test_layout_follows_breakpoint() {
        let app = App::new(ContentStore::portfolio(), &settings(), DEFAULT_BREAKPOINT);
        assert_eq!(app.layout(), LayoutMode::Wide);
        let app = App::new(ContentStore::portfolio(), &settings(), DEFAULT_BREAKPOINT - 1);
        assert_eq!(app.layout(), LayoutMode::Compact);
    }

    #[test]
    fn test_toggle_twice_shows_then_hides_overlay() {
        let mut app = compact_app();
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.menu_state(), MenuState::Open);
        assert!(app.document().overlay.is_some());

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.menu_state(), MenuState::Closed);
        assert!(app.document().overlay.is_none());
    }

    #[test]
    fn test_overlay_link_dismisses_and_jumps() {
        let mut app = compact_app();
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.menu_state(), MenuState::Open);

        // "Work" is the first overlay entry
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.menu_state(), MenuState::Closed);
        assert!(app.document().overlay.is_none());
        assert_eq!(app.take_pending_jump(), Some(SectionId::Work));
    }

    #[test]
    fn test_enter_activates_cursor_entry() {
        let mut app = compact_app();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.overlay_cursor, 2);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.menu_state(), MenuState::Closed);
        assert_eq!(app.take_pending_jump(), Some(SectionId::Capabilities));
    }

    #[test]
    fn test_cursor_wraps_and_resets_on_open() {
        let mut app = compact_app();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.overlay_cursor, SectionId::NAV_TARGETS.len() - 1);

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.overlay_cursor, 0);
    }

    #[test]
    fn test_arrows_scroll_when_overlay_closed() {
        let mut app = compact_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll, 2);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, 1);
        assert_eq!(app.overlay_cursor, 0);
    }

    #[test]
    fn test_scroll_never_goes_negative() {
        let mut app = compact_app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_digits_ignored_when_no_links_rendered() {
        let mut app = compact_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.take_pending_jump(), None);
        assert_eq!(app.menu_state(), MenuState::Closed);
    }

    #[test]
    fn test_wide_layout_inline_links_jump_without_menu() {
        let mut app = wide_app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.take_pending_jump(), Some(SectionId::Contact));
        assert_eq!(app.menu_state(), MenuState::Closed);
    }

    #[test]
    fn test_toggle_ignored_in_wide_layout() {
        let mut app = wide_app();
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.menu_state(), MenuState::Closed);
    }

    #[test]
    fn test_resize_to_wide_hides_overlay_but_keeps_state() {
        let mut app = compact_app();
        press(&mut app, KeyCode::Char('m'));
        app.resize(140);
        assert_eq!(app.layout(), LayoutMode::Wide);
        assert_eq!(app.menu_state(), MenuState::Open);
        assert!(app.document().overlay.is_none());

        app.resize(60);
        assert!(app.document().overlay.is_some());
    }

    #[test]
    fn test_home_jumps_to_top() {
        let mut app = compact_app();
        press(&mut app, KeyCode::Home);
        assert_eq!(app.take_pending_jump(), Some(SectionId::Top));
        assert_eq!(app.take_pending_jump(), None);
    }

    #[test]
    fn test_clamp_scroll() {
        let mut app = compact_app();
        press(&mut app, KeyCode::End);
        app.clamp_scroll(100, 20);
        assert_eq!(app.scroll, 80);
        app.clamp_scroll(10, 20);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = compact_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = compact_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
