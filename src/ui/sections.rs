//! Section body rendering
//!
//! Lays the document's sections out as wrapped, styled lines and records the
//! line on which each section starts so anchor jumps land on its heading.

use ratatui::prelude::*;

use super::helpers::wrap_text;
use crate::models::{Link, SectionId};
use crate::theme::{
    Glyphs, ACCENT_BLUE, BORDER_SUBTLE, RULE_GRAY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::view::{Document, Section, SectionBody};

/// Body lines plus the anchor table for the current width
pub struct BodyLines {
    pub lines: Vec<Line<'static>>,
    anchors: Vec<(SectionId, usize)>,
}

impl BodyLines {
    /// First line of the section's heading
    pub fn anchor_line(&self, id: SectionId) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, line)| *line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

struct BodyBuilder {
    width: usize,
    glyphs: Glyphs,
    lines: Vec<Line<'static>>,
    anchors: Vec<(SectionId, usize)>,
}

impl BodyBuilder {
    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn styled(&mut self, text: &str, style: Style) {
        for line in wrap_text(text, self.width) {
            self.lines.push(Line::from(Span::styled(line, style)));
        }
    }

    fn heading(&mut self, text: &str) {
        self.styled(
            text,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
    }

    fn muted(&mut self, text: &str) {
        self.styled(text, Style::default().fg(TEXT_MUTED));
    }

    fn paragraph(&mut self, text: &str) {
        self.styled(text, Style::default().fg(TEXT_SECONDARY));
    }

    /// Bordered list item: every wrapped line carries the rule glyph
    fn bullet(&mut self, text: &str, rule_color: Color) {
        let prefix = format!("{} ", self.glyphs.bullet);
        let inner = self.width.saturating_sub(prefix.chars().count());
        for line in wrap_text(text, inner) {
            self.lines.push(Line::from(vec![
                Span::styled(prefix.clone(), Style::default().fg(rule_color)),
                Span::styled(line, Style::default().fg(TEXT_SECONDARY)),
            ]));
        }
    }

    fn rule(&mut self) {
        self.lines.push(Line::from(Span::styled(
            self.glyphs.rule.repeat(self.width.max(1)),
            Style::default().fg(BORDER_SUBTLE),
        )));
    }

    fn links(&mut self, links: &[Link]) {
        let mut spans = Vec::new();
        for link in links {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[{}]", link.label),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        self.lines.push(Line::from(spans));
    }

    fn contact_link(&mut self, link: &Link) {
        let mut spans = vec![Span::styled(
            link.label.to_string(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(target) = link.display_target() {
            spans.push(Span::styled(
                format!("  {}", target),
                Style::default().fg(ACCENT_BLUE),
            ));
        }
        if link.opens_new_context() {
            spans.push(Span::styled(" ↗", Style::default().fg(TEXT_MUTED)));
        }
        self.lines.push(Line::from(spans));
    }

    fn section(&mut self, section: &Section) {
        self.anchors.push((section.id, self.lines.len()));
        self.heading(section.heading);

        match &section.body {
            SectionBody::Hero {
                headline,
                tagline,
                actions,
            } => {
                self.muted(headline);
                self.blank();
                self.paragraph(tagline);
                self.blank();
                self.links(actions);
            }
            SectionBody::Projects(projects) => {
                if let Some(subtitle) = section.subtitle {
                    self.muted(subtitle);
                }
                for project in projects.iter() {
                    self.blank();
                    self.heading(project.title);
                    self.muted(project.subtitle);
                    self.blank();
                    self.heading("Context");
                    self.paragraph(project.context);
                    self.blank();
                    self.heading("Role");
                    self.paragraph(project.role);
                    self.blank();
                    self.heading("Technical Decisions");
                    for decision in project.decisions {
                        self.bullet(decision, RULE_GRAY);
                    }
                    self.blank();
                    self.heading("Impact");
                    for item in project.impact {
                        self.bullet(item, ACCENT_BLUE);
                    }
                    self.rule();
                    self.muted(&format!("Stack: {}", project.stack));
                }
            }
            SectionBody::Philosophy(entries) => {
                if let Some(subtitle) = section.subtitle {
                    self.muted(subtitle);
                }
                for entry in entries.iter() {
                    self.blank();
                    self.heading(entry.title);
                    self.paragraph(entry.content);
                }
            }
            SectionBody::Capabilities(categories) => {
                for category in categories.iter() {
                    self.blank();
                    self.heading(category.name);
                    for skill in category.skills {
                        self.paragraph(skill);
                    }
                }
            }
            SectionBody::Experience(entries) => {
                for entry in entries.iter() {
                    self.blank();
                    self.heading(&entry.heading());
                    self.muted(entry.period);
                    for highlight in entry.highlights {
                        self.bullet(highlight, RULE_GRAY);
                    }
                }
            }
            SectionBody::About {
                paragraphs,
                availability,
            } => {
                for paragraph in paragraphs.iter() {
                    self.blank();
                    self.paragraph(paragraph);
                }
                self.blank();
                self.muted(availability);
            }
            SectionBody::Contact(links) => {
                self.blank();
                for link in links.iter() {
                    self.contact_link(link);
                }
            }
        }
    }
}

/// Lay out every section of `doc` at `width` columns
pub fn body_lines(doc: &Document, width: u16, glyphs: Glyphs) -> BodyLines {
    let mut builder = BodyBuilder {
        width: width as usize,
        glyphs,
        lines: Vec::new(),
        anchors: Vec::new(),
    };

    for (idx, section) in doc.sections.iter().enumerate() {
        if idx > 0 {
            builder.blank();
            builder.blank();
        }
        builder.section(section);
    }

    builder.blank();
    builder.rule();
    builder.muted(&doc.footer);

    BodyLines {
        lines: builder.lines,
        anchors: builder.anchors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::models::{LayoutMode, MenuState};
    use crate::theme::glyphs;
    use crate::view::build_document;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render(width: u16) -> BodyLines {
        let doc = build_document(
            ContentStore::portfolio(),
            MenuState::Closed,
            LayoutMode::Compact,
        );
        body_lines(&doc, width, glyphs(false))
    }

    #[test]
    fn test_anchor_lines_point_at_headings() {
        let body = render(60);
        let work = body.anchor_line(SectionId::Work).unwrap();
        assert_eq!(plain(&body.lines[work]), "Featured Work");
        let contact = body.anchor_line(SectionId::Contact).unwrap();
        assert_eq!(plain(&body.lines[contact]), "Get In Touch");
        assert_eq!(body.anchor_line(SectionId::Top), Some(0));
    }

    #[test]
    fn test_anchor_lines_increase_in_document_order() {
        let body = render(60);
        let doc = build_document(
            ContentStore::portfolio(),
            MenuState::Closed,
            LayoutMode::Compact,
        );
        let lines: Vec<usize> = doc
            .sections
            .iter()
            .map(|s| body.anchor_line(s.id).unwrap())
            .collect();
        assert!(lines.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_projects_render_in_store_order() {
        let body = render(80);
        let text: Vec<String> = body.lines.iter().map(plain).collect();
        let migration = text
            .iter()
            .position(|l| l == "Multi-Service Web App Migration")
            .unwrap();
        let design = text
            .iter()
            .position(|l| l == "Design System Implementation")
            .unwrap();
        let dashboard = text
            .iter()
            .position(|l| l == "Real-Time Collaboration Dashboard")
            .unwrap();
        assert!(migration < design && design < dashboard);
    }

    #[test]
    fn test_lines_respect_width() {
        let body = render(40);
        for line in &body.lines {
            assert!(line.width() <= 40, "line too wide: {:?}", plain(line));
        }
    }

    #[test]
    fn test_narrow_width_produces_more_lines() {
        assert!(render(40).len() > render(100).len());
    }

    #[test]
    fn test_footer_is_last_line() {
        let body = render(80);
        let last = body.lines.last().map(plain).unwrap();
        assert_eq!(last, "© 2025 Elise Straub. Built with Rust.");
    }
}
