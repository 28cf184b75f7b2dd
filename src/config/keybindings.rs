//! Keyboard bindings configuration.

use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Keys without a binding fall through to text input.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Ignores event kind and state so that press/repeat flags from
    /// enhanced keyboard protocols do not break lookups.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&normalized).copied()
    }

    /// Add or replace a binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::Submit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
            KeyAction::Reset,
        );

        // Suggestion navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::NextSuggestion,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
            KeyAction::NextSuggestion,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::NextSuggestion,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::PrevSuggestion,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL),
            KeyAction::PrevSuggestion,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevSuggestion,
        );

        // Editing
        bindings.insert(
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            KeyAction::DeleteChar,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::ClearInput,
        );

        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
