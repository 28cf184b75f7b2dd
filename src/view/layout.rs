//! Screen layout.
//!
//! Pure layout logic: indicator line, input box, suggestion list, footer.

use crate::state::SearchState;
use crate::view::search_input::SearchInput;
use crate::view::status::{ActivityIndicator, Footer};
use crate::view::styles::SearchStyles;
use crate::view::suggestions::SuggestionList;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Everything a frame is drawn from.
pub struct ScreenModel<'a> {
    /// Search state to show.
    pub state: &'a SearchState,
    /// Highlighted suggestion.
    pub selected: Option<usize>,
    /// Resolved listing URL, if any.
    pub listing_url: Option<&'a str>,
    /// Widget styles.
    pub styles: &'a SearchStyles,
}

/// Areas for each widget, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Loading / submitting line.
    pub indicator: Rect,
    /// Input box.
    pub input: Rect,
    /// Suggestion list.
    pub suggestions: Rect,
    /// Listing URL and key hints.
    pub footer: Rect,
}

/// Split `area` into the widget areas.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Activity indicator
            Constraint::Length(3), // Input box
            Constraint::Min(0),    // Suggestions
            Constraint::Length(2), // Link + key hints
        ])
        .split(area);

    ScreenAreas {
        indicator: chunks[0],
        input: chunks[1],
        suggestions: chunks[2],
        footer: chunks[3],
    }
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, model: &ScreenModel) {
    let areas = calculate_areas(frame.area());

    frame.render_widget(ActivityIndicator::new(model.state, model.styles), areas.indicator);
    frame.render_widget(SearchInput::new(model.state, model.styles), areas.input);
    if areas.suggestions.height > 0 {
        frame.render_widget(
            SuggestionList::new(&model.state.suggestions, model.selected, model.styles),
            areas.suggestions,
        );
    }
    frame.render_widget(Footer::new(model.listing_url, model.styles), areas.footer);
}
