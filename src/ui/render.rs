//! Frame composition: navigation bar, overlay, scrollable body, hint bar.

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::header::{overlay_height, render_header, render_overlay, HEADER_HEIGHT};
use super::sections::body_lines;
use crate::app::App;
use crate::models::LayoutMode;
use crate::theme::{BG_PRIMARY, BG_SECONDARY, TEXT_PRIMARY};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(BG_PRIMARY)),
        area,
    );

    let doc = app.document();
    let overlay_rows = doc.overlay.as_ref().map(overlay_height).unwrap_or(0);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Navigation bar
            Constraint::Length(overlay_rows),  // Overlay (zero rows when absent)
            Constraint::Min(1),                // Page body
            Constraint::Length(1),             // Key hints
        ])
        .split(area);

    render_header(main_layout[0], &doc.header, app.glyphs, frame);
    if let Some(overlay) = &doc.overlay {
        render_overlay(
            main_layout[1],
            overlay,
            app.overlay_cursor,
            app.glyphs,
            frame,
        );
    }

    let body_area = main_layout[2].inner(Margin {
        horizontal: 2,
        vertical: 0,
    });
    let body = body_lines(&doc, body_area.width, app.glyphs);

    if let Some(section) = app.take_pending_jump() {
        if let Some(line) = body.anchor_line(section) {
            app.scroll = line;
        }
    }
    app.page_height = body_area.height;
    app.clamp_scroll(body.len(), body_area.height as usize);

    let scroll = app.scroll.min(u16::MAX as usize) as u16;
    frame.render_widget(Paragraph::new(body.lines).scroll((scroll, 0)), body_area);

    render_hint_bar(main_layout[3], app, frame);
}

fn hint_text(app: &App) -> &'static str {
    if app.overlay_visible() {
        " ↑↓: Select | Enter/1-5: Go | m: Close menu | q: Quit "
    } else if app.layout() == LayoutMode::Compact {
        " m: Menu | ↑↓/PgUp/PgDn: Scroll | g: Top | q: Quit "
    } else {
        " 1-5: Jump | ↑↓/PgUp/PgDn: Scroll | g: Top | q: Quit "
    }
}

/// Bottom bar with keybinding hints
fn render_hint_bar(area: Rect, app: &App, frame: &mut Frame) {
    let hints = Paragraph::new(Line::from(vec![Span::styled(
        hint_text(app),
        Style::default().fg(TEXT_PRIMARY),
    )]))
    .style(Style::default().bg(BG_SECONDARY));
    frame.render_widget(hints, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiSettings;
    use crate::content::ContentStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn screen(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app(width: u16) -> App {
        App::new(ContentStore::portfolio(), &UiSettings::default(), width)
    }

    #[test]
    fn test_first_render_has_no_overlay() {
        let mut app = app(60);
        let rows = screen(&mut app, 60, 30);
        assert!(contains(&rows, "☰"));
        assert!(!contains(&rows, "1 Work"));
        assert!(contains(&rows, "m: Menu"));
    }

    #[test]
    fn test_toggle_shows_then_removes_overlay() {
        let mut app = app(60);
        press(&mut app, KeyCode::Char('m'));
        let rows = screen(&mut app, 60, 30);
        assert!(contains(&rows, "✕"));
        assert!(contains(&rows, "› 1 Work"));
        assert!(contains(&rows, "5 Contact"));

        press(&mut app, KeyCode::Char('m'));
        let rows = screen(&mut app, 60, 30);
        assert!(!contains(&rows, "1 Work"));
    }

    #[test]
    fn test_overlay_link_closes_menu_and_scrolls_to_section() {
        let mut app = app(60);
        press(&mut app, KeyCode::Char('m'));
        screen(&mut app, 60, 30);

        press(&mut app, KeyCode::Char('1'));
        let rows = screen(&mut app, 60, 30);
        assert!(!contains(&rows, "1 Work"));
        assert!(rows[HEADER_HEIGHT as usize].contains("Featured Work"));
    }

    #[test]
    fn test_wide_layout_shows_inline_links_only() {
        let mut app = app(120);
        let rows = screen(&mut app, 120, 30);
        assert!(rows[0].contains("1 Work"));
        assert!(rows[0].contains("5 Contact"));
        assert!(!contains(&rows, "☰"));
        assert!(!contains(&rows, "m: Menu"));
    }

    #[test]
    fn test_ascii_glyphs() {
        let settings = UiSettings {
            ascii_only: true,
            ..UiSettings::default()
        };
        let mut app = App::new(ContentStore::portfolio(), &settings, 60);
        let rows = screen(&mut app, 60, 30);
        assert!(rows[0].contains("[=]"));
    }

    #[test]
    fn test_render_is_stable() {
        let mut app = app(60);
        let first = screen(&mut app, 60, 30);
        let second = screen(&mut app, 60, 30);
        assert_eq!(first, second);
    }

    #[test]
    fn test_end_clamps_to_footer() {
        let mut app = app(60);
        press(&mut app, KeyCode::End);
        let rows = screen(&mut app, 60, 30);
        // Last body row sits just above the hint bar
        assert!(rows[rows.len() - 2].contains("© 2025 Elise Straub"));
    }
}
