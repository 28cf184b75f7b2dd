//! Events accepted by the search state machine.

/// An event applied to [`crate::state::SearchState`] by [`crate::state::reduce`].
///
/// Every variant is accepted in every state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// The input text changed; an autocomplete round trip should follow.
    AutocompleteStart {
        /// New input text.
        query: String,
    },
    /// Suggestions arrived (or the query was empty).
    AutocompleteEnd {
        /// Suggestions in server order.
        suggestions: Vec<String>,
    },
    /// Resolve the query to a listing page.
    ///
    /// `value` replaces the current text when present (a chosen suggestion);
    /// `None` submits whatever has been typed.
    Submit {
        /// Chosen suggestion, replacing the text.
        value: Option<String>,
    },
    /// Return to the initial state.
    Reset,
}

impl SearchAction {
    /// Short label for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AutocompleteStart { .. } => "autocomplete-start",
            Self::AutocompleteEnd { .. } => "autocomplete-end",
            Self::Submit { .. } => "submit",
            Self::Reset => "reset",
        }
    }
}
