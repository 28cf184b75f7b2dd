//! Domain model types (pure).
//!
//! Actions dispatched into the search state machine, user intents decoupled
//! from key bindings, and the errors crossing the network boundary.

pub mod action;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use action::SearchAction;
pub use error::ApiError;
pub use key_action::KeyAction;
