//! Theme module for portfolio-tui
//!
//! Centralized color palette and glyphs. The palette mirrors the page's
//! neutral grays with a single blue accent for impact bullets.

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors
// ============================================================================

/// Page background (#111827)
pub const BG_PRIMARY: Color = Color::Rgb(17, 24, 39);

/// Alternating section / card background (#1f2937)
pub const BG_SECONDARY: Color = Color::Rgb(31, 41, 55);

/// Divider and border color (#374151)
pub const BORDER_SUBTLE: Color = Color::Rgb(55, 65, 81);

// ============================================================================
// Accent Colors
// ============================================================================

/// Impact bullets and the selected overlay entry (#3b82f6)
pub const ACCENT_BLUE: Color = Color::Rgb(59, 130, 246);

/// Decision and highlight bullets (#d1d5db)
pub const RULE_GRAY: Color = Color::Rgb(209, 213, 219);

// ============================================================================
// Text Colors
// ============================================================================

/// Headings (#f9fafb)
pub const TEXT_PRIMARY: Color = Color::Rgb(249, 250, 251);

/// Body copy (#d1d5db)
pub const TEXT_SECONDARY: Color = Color::Rgb(209, 213, 219);

/// Subtitles, periods and hints (#9ca3af)
pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);

pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Glyphs
// ============================================================================

/// Glyphs that have an ASCII fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub menu_closed: &'static str,
    pub menu_open: &'static str,
    pub bullet: &'static str,
    pub rule: &'static str,
    pub cursor: &'static str,
}

const UNICODE_GLYPHS: Glyphs = Glyphs {
    menu_closed: "☰",
    menu_open: "✕",
    bullet: "│",
    rule: "─",
    cursor: "›",
};

const ASCII_GLYPHS: Glyphs = Glyphs {
    menu_closed: "[=]",
    menu_open: "[x]",
    bullet: "|",
    rule: "-",
    cursor: ">",
};

pub fn glyphs(ascii_only: bool) -> Glyphs {
    if ascii_only {
        ASCII_GLYPHS
    } else {
        UNICODE_GLYPHS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_glyphs_are_ascii() {
        let g = glyphs(true);
        for glyph in [g.menu_closed, g.menu_open, g.bullet, g.rule, g.cursor] {
            assert!(glyph.is_ascii(), "{glyph} is not ascii");
        }
    }

    #[test]
    fn test_menu_glyphs_differ_by_state() {
        let g = glyphs(false);
        assert_ne!(g.menu_closed, g.menu_open);
    }
}
