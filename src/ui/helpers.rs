//! UI helper functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap text to `max_width` display columns.
/// Words wider than a whole line are hard-broken between characters.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        for piece in break_word(word, max_width) {
            if current_line.is_empty() {
                current_line = piece;
            } else if current_line.width() + 1 + piece.width() <= max_width {
                current_line.push(' ');
                current_line.push_str(&piece);
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = piece;
            }
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Split `word` into chunks no wider than `max_width`. A single character
/// wider than the limit still gets a chunk of its own.
fn break_word(word: &str, max_width: usize) -> Vec<String> {
    if word.width() <= max_width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if !piece.is_empty() && piece_width + ch_width > max_width {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
