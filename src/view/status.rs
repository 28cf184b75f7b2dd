//! Activity indicator and footer widgets.

use crate::state::SearchState;
use crate::view::styles::SearchStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Shown while an autocomplete request is pending.
pub const LOADING_LABEL: &str = "Loading...";

/// Shown while a submission is pending.
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// One-line indicator of pending network work.
///
/// Both labels appear when both flags are set.
pub struct ActivityIndicator<'a> {
    state: &'a SearchState,
    styles: &'a SearchStyles,
}

impl<'a> ActivityIndicator<'a> {
    /// Indicator for `state`.
    pub fn new(state: &'a SearchState, styles: &'a SearchStyles) -> Self {
        Self { state, styles }
    }
}

impl Widget for ActivityIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        if self.state.requesting_autocomplete {
            spans.push(Span::styled(LOADING_LABEL, self.styles.indicator));
        }
        if self.state.is_submitting {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(SUBMITTING_LABEL, self.styles.indicator));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Listing link (once resolved) and key hints.
pub struct Footer<'a> {
    listing_url: Option<&'a str>,
    styles: &'a SearchStyles,
}

impl<'a> Footer<'a> {
    /// Footer showing `listing_url` when resolved.
    pub fn new(listing_url: Option<&'a str>, styles: &'a SearchStyles) -> Self {
        Self {
            listing_url,
            styles,
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let link = match self.listing_url {
            Some(url) => Line::from(vec![
                Span::raw("Listing: "),
                Span::styled(url, self.styles.link),
            ]),
            None => Line::default(),
        };
        let hints = Line::from(Span::styled(
            "Enter: search  ↑/↓: choose  Ctrl+R: reset  Esc: quit",
            self.styles.hint,
        ));
        Paragraph::new(vec![link, hints]).render(area, buf);
    }
}
