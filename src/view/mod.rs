//! Terminal UI rendering and event loop.

mod layout;
mod search_input;
mod status;
pub mod styles;
mod suggestions;

pub use layout::{calculate_areas, render_layout, ScreenAreas, ScreenModel};
pub use search_input::{visible_tail, SearchInput};
pub use status::{ActivityIndicator, Footer, LOADING_LABEL, SUBMITTING_LABEL};
pub use styles::{ColorConfig, SearchStyles};
pub use suggestions::SuggestionList;

use crate::api::{Endpoints, SearchApi};
use crate::config::KeyBindings;
use crate::controller::SearchController;
use crate::model::{KeyAction, SearchAction};
use crate::state::{input_handler, select_next, select_prev, selected_suggestion};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// How long to wait for terminal input before checking for completions.
const POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// API so tests can script network responses.
pub struct TuiApp<B, A>
where
    B: ratatui::backend::Backend,
    A: SearchApi,
{
    terminal: Terminal<B>,
    controller: SearchController<A>,
    key_bindings: KeyBindings,
    endpoints: Endpoints,
    styles: SearchStyles,
    /// Highlighted suggestion (UI-local).
    selected: Option<usize>,
    /// Suggestions the highlight refers to; a new list clears it.
    selection_basis: Vec<String>,
}

impl<A: SearchApi> TuiApp<CrosstermBackend<Stdout>, A> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        controller: SearchController<A>,
        endpoints: Endpoints,
        styles: SearchStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        // Leave the shell usable; the setup error is the one to report.
        let terminal = restore_on_error(enter_screen(), || {
            let _ = restore_terminal();
        })?;

        Ok(Self::with_terminal(
            terminal,
            controller,
            endpoints,
            KeyBindings::default(),
            styles,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (Esc or Ctrl+C). Redraws after every key,
    /// resize, and applied network completion.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(()); // User quit
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.apply_completions() {
                self.draw()?;
            }
        }
    }
}

impl<B, A> TuiApp<B, A>
where
    B: ratatui::backend::Backend,
    A: SearchApi,
{
    /// Assemble an app around an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        controller: SearchController<A>,
        endpoints: Endpoints,
        key_bindings: KeyBindings,
        styles: SearchStyles,
    ) -> Self {
        Self {
            terminal,
            controller,
            key_bindings,
            endpoints,
            styles,
            selected: None,
            selection_basis: Vec::new(),
        }
    }

    /// Search controller (state, navigation target).
    pub fn controller(&self) -> &SearchController<A> {
        &self.controller
    }

    /// Highlighted suggestion index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Absolute URL of the resolved listing page, once known.
    pub fn listing_url(&self) -> Option<String> {
        self.controller
            .navigation_target()
            .map(|target| self.endpoints.listing_url(target))
    }

    /// Feed the initial query as if it had been typed.
    pub fn prefill(&mut self, query: &str) {
        self.dispatch(SearchAction::AutocompleteStart {
            query: query.to_string(),
        });
    }

    fn dispatch(&mut self, action: SearchAction) {
        self.controller.dispatch(action);
        self.sync_selection();
    }

    /// Clear the highlight when the suggestion list was replaced.
    fn sync_selection(&mut self) {
        let suggestions = &self.controller.state().suggestions;
        if *suggestions != self.selection_basis {
            self.selected = None;
            self.selection_basis = suggestions.clone();
        }
    }

    /// Apply queued network completions.
    ///
    /// Returns true if a redraw is needed.
    pub(crate) fn apply_completions(&mut self) -> bool {
        let changed = self.controller.drain_completions();
        if changed {
            self.sync_selection();
        }
        changed
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Key release/repeat reports from enhanced keyboard protocols
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if let Some(action) = self.key_bindings.get(key) {
            debug!(?action, "key action");
            return self.handle_action(action);
        }

        if let KeyCode::Char(ch) = key.code {
            if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
                if let Some(action) = input_handler::handle_char_input(self.controller.state(), ch) {
                    self.dispatch(action);
                }
            }
        }

        false
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        let len = self.controller.state().suggestions.len();
        match action {
            KeyAction::Quit => return true,
            KeyAction::Submit => {
                let value = selected_suggestion(&self.controller.state().suggestions, self.selected)
                    .map(str::to_string);
                self.dispatch(SearchAction::Submit { value });
            }
            KeyAction::Reset => self.dispatch(SearchAction::Reset),
            KeyAction::NextSuggestion => self.selected = select_next(self.selected, len),
            KeyAction::PrevSuggestion => self.selected = select_prev(self.selected, len),
            KeyAction::DeleteChar => {
                if let Some(action) = input_handler::handle_backspace(self.controller.state()) {
                    self.dispatch(action);
                }
            }
            KeyAction::ClearInput => {
                if let Some(action) = input_handler::handle_clear(self.controller.state()) {
                    self.dispatch(action);
                }
            }
        }
        false
    }

    /// Render the current frame
    pub(crate) fn draw(&mut self) -> Result<(), TuiError> {
        let listing_url = self.listing_url();
        let model = ScreenModel {
            state: self.controller.state(),
            selected: self.selected,
            listing_url: listing_url.as_deref(),
            styles: &self.styles,
        };
        self.terminal.draw(|frame| render_layout(frame, &model))?;
        Ok(())
    }

    /// Terminal (test access to the rendered buffer).
    #[cfg(test)]
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Options for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    /// Query to start with, as if typed.
    pub initial_query: Option<String>,
    /// Disable colors.
    pub no_color: bool,
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit. Returns the resolved listing URL, if any.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_interactive<A: SearchApi>(
    controller: SearchController<A>,
    endpoints: Endpoints,
    options: TuiOptions,
) -> Result<Option<String>, TuiError> {
    let styles = SearchStyles::with_color_config(ColorConfig::from_env_and_args(options.no_color));
    let mut app = TuiApp::new(controller, endpoints, styles)?;

    if let Some(query) = options.initial_query.as_deref() {
        app.prefill(query);
    }

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    restore_terminal()?;
    result?;

    Ok(app.listing_url())
}

/// Run `restore` if terminal setup failed, passing the result through.
fn restore_on_error<T>(
    result: Result<T, TuiError>,
    restore: impl FnOnce(),
) -> Result<T, TuiError> {
    if result.is_err() {
        restore();
    }
    result
}

/// Switch to the alternate screen and wrap stdout in a terminal.
fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
