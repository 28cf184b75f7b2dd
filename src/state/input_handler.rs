//! Query editing (pure).
//!
//! Edits produce the next query string; the caller dispatches it as an
//! `autocomplete-start`. The cursor is always at the end of the text.
//! Editing is refused while a submission is pending (the input is read-only).

use crate::model::SearchAction;
use crate::state::SearchState;

/// Append `ch` to the query.
///
/// Returns `None` while submitting.
pub fn handle_char_input(state: &SearchState, ch: char) -> Option<SearchAction> {
    if state.is_submitting {
        return None;
    }
    let mut query = state.text.clone();
    query.push(ch);
    Some(SearchAction::AutocompleteStart { query })
}

/// Delete the last character of the query.
///
/// Returns `None` while submitting or when there is nothing to delete.
pub fn handle_backspace(state: &SearchState) -> Option<SearchAction> {
    if state.is_submitting || state.text.is_empty() {
        return None;
    }
    let mut query = state.text.clone();
    query.pop();
    Some(SearchAction::AutocompleteStart { query })
}

/// Clear the query entirely.
///
/// Returns `None` while submitting or when the query is already empty.
pub fn handle_clear(state: &SearchState) -> Option<SearchAction> {
    if state.is_submitting || state.text.is_empty() {
        return None;
    }
    Some(SearchAction::AutocompleteStart {
        query: String::new(),
    })
}

// ===== Tests =====

#[cfg(test)]
#[path = "input_handler_tests.rs"]
mod tests;
