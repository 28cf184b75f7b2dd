//! Domain-level keyboard actions independent of key bindings.

/// User intents that can be mapped to configurable key bindings.
///
/// These represent what the user wants, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Plain character input is not an action; it edits the query directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Submit the highlighted suggestion, or the typed text. Default: Enter
    Submit,
    /// Reset the search to its initial state. Default: Ctrl+r
    Reset,
    /// Highlight the next suggestion. Default: ↓ / Ctrl+n
    NextSuggestion,
    /// Highlight the previous suggestion. Default: ↑ / Ctrl+p
    PrevSuggestion,
    /// Delete the last character of the query. Default: Backspace
    DeleteChar,
    /// Clear the whole query. Default: Ctrl+u
    ClearInput,
    /// Leave the application. Default: Esc
    Quit,
}
