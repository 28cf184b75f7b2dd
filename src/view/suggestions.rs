//! Suggestion list widget.

use crate::view::styles::SearchStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Suggestions in server order, with an optional highlight.
pub struct SuggestionList<'a> {
    suggestions: &'a [String],
    selected: Option<usize>,
    styles: &'a SearchStyles,
}

impl<'a> SuggestionList<'a> {
    /// List over `suggestions`, highlighting `selected`.
    pub fn new(suggestions: &'a [String], selected: Option<usize>, styles: &'a SearchStyles) -> Self {
        Self {
            suggestions,
            selected,
            styles,
        }
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .map(|s| ListItem::new(Line::from(s.as_str())).style(self.styles.suggestion))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Suggestions"))
            .highlight_style(self.styles.selected_suggestion)
            .highlight_symbol("> ");

        // Keeps the highlighted row scrolled into view.
        let mut list_state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
