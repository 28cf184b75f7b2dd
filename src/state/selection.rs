//! Highlighted suggestion (pure).
//!
//! The highlight is UI state, not part of [`crate::state::SearchState`]:
//! `None` means Enter submits the typed text.

/// Move the highlight down, wrapping to the top.
///
/// With no suggestions the highlight is cleared.
pub fn select_next(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match selected {
        None => Some(0),
        Some(index) if index + 1 >= len => Some(0),
        Some(index) => Some(index + 1),
    }
}

/// Move the highlight up, wrapping to the bottom.
pub fn select_prev(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match selected {
        None | Some(0) => Some(len - 1),
        Some(index) => Some(index.min(len) - 1),
    }
}

/// The highlighted suggestion, if the index is still in range.
pub fn selected_suggestion(suggestions: &[String], selected: Option<usize>) -> Option<&str> {
    selected
        .and_then(|index| suggestions.get(index))
        .map(String::as_str)
}
