//! Search state and its transition function.
//!
//! `SearchState` is a record of independent fields rather than a sum type:
//! the autocomplete and submit flags are tracked separately and may both be
//! set at once.

use crate::model::SearchAction;

// ===== SearchState =====

/// Everything the search widget renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Current input text.
    pub text: String,
    /// Suggestions in server response order.
    pub suggestions: Vec<String>,
    /// True from submit until reset. Resolution never clears it.
    pub is_submitting: bool,
    /// True while an autocomplete request is pending or in flight.
    pub requesting_autocomplete: bool,
}

impl SearchState {
    /// Initial state: empty text, no suggestions, both flags false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether neither flag is set.
    pub fn is_idle(&self) -> bool {
        !self.is_submitting && !self.requesting_autocomplete
    }
}

// ===== Transitions =====

/// Apply `action` to `state`, returning the next state.
///
/// Total: every action is accepted in every state.
pub fn reduce(state: SearchState, action: SearchAction) -> SearchState {
    match action {
        SearchAction::AutocompleteStart { query } => SearchState {
            text: query,
            requesting_autocomplete: true,
            ..state
        },
        SearchAction::AutocompleteEnd { suggestions } => SearchState {
            suggestions,
            requesting_autocomplete: false,
            ..state
        },
        SearchAction::Submit { value } => SearchState {
            text: value.unwrap_or(state.text),
            suggestions: Vec::new(),
            is_submitting: true,
            requesting_autocomplete: state.requesting_autocomplete,
        },
        SearchAction::Reset => SearchState::new(),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
