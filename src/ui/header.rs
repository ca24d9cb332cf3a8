//! Navigation bar and overlay rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::{
    Glyphs, ACCENT_BLUE, BG_PRIMARY, BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::view::{Header, Overlay};

/// Rows taken by the navigation bar (content + bottom border)
pub const HEADER_HEIGHT: u16 = 2;

/// Rows the overlay needs for its links plus borders
pub fn overlay_height(overlay: &Overlay) -> u16 {
    overlay.links.len() as u16 + 2
}

/// Render the brand on the left and either the inline links or the menu
/// button on the right
pub fn render_header(area: Rect, header: &Header, glyphs: Glyphs, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_PRIMARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(header.brand.label.len() as u16 + 2), // Brand
            Constraint::Min(0),                                      // Navigation
        ])
        .split(inner);

    let brand = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            header.brand.label,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(brand, columns[0]);

    let mut spans = Vec::new();
    if let Some(links) = &header.inline_links {
        for (idx, link) in links.iter().enumerate() {
            spans.push(Span::styled(
                format!("{} ", idx + 1),
                Style::default().fg(TEXT_MUTED),
            ));
            spans.push(Span::styled(link.label, Style::default().fg(TEXT_SECONDARY)));
            spans.push(Span::raw("   "));
        }
    }
    if let Some(toggle) = &header.toggle {
        let glyph = if toggle.expanded {
            glyphs.menu_open
        } else {
            glyphs.menu_closed
        };
        spans.push(Span::styled(
            glyph,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(nav, columns[1]);
}

/// Render the compact navigation overlay with the cursor entry highlighted
pub fn render_overlay(
    area: Rect,
    overlay: &Overlay,
    cursor: usize,
    glyphs: Glyphs,
    frame: &mut Frame,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let lines: Vec<Line> = overlay
        .links
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            let selected = idx == cursor;
            let (marker, style) = if selected {
                (
                    glyphs.cursor,
                    Style::default()
                        .fg(ACCENT_BLUE)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(TEXT_SECONDARY))
            };
            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{} ", idx + 1), Style::default().fg(TEXT_MUTED)),
                Span::styled(link.label, style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
