//! Search input widget for rendering the query box.

use crate::state::SearchState;
use crate::view::styles::SearchStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Search input widget.
///
/// Shows the query with a block cursor at the end. While a submission is
/// pending the box is read-only and the cursor is hidden.
pub struct SearchInput<'a> {
    state: &'a SearchState,
    styles: &'a SearchStyles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(state: &'a SearchState, styles: &'a SearchStyles) -> Self {
        Self { state, styles }
    }
}

/// Longest suffix of `text` whose display width fits in `width` columns.
///
/// Keeps the end of a long query (where the cursor is) visible.
pub fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (index, ch) in text.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            return &text[index + ch.len_utf8()..];
        }
        used += ch_width;
    }
    text
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let read_only = self.state.is_submitting;
        let (title, style) = if read_only {
            ("Search (read-only)", self.styles.input_read_only)
        } else {
            ("Search", self.styles.input)
        };

        // Borders take two columns, the cursor one more.
        let text_width = usize::from(area.width.saturating_sub(3));
        let shown = visible_tail(&self.state.text, text_width);

        let mut spans = vec![Span::styled(shown.to_string(), style)];
        if !read_only {
            spans.push(Span::styled(" ", self.styles.cursor));
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}
