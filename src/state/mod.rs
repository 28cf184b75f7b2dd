//! Search state machine (pure).
//!
//! All state transitions are pure functions testable without TUI or network.

pub mod input_handler;
pub mod search;
pub mod selection;

// Re-export for convenience
pub use search::{reduce, SearchState};
pub use selection::{select_next, select_prev, selected_suggestion};
