//! Effects around the pure search state machine.
//!
//! `SearchController` is the single writer of [`SearchState`]. User input
//! arrives through [`SearchController::dispatch`]; network results come back
//! as [`Completion`] messages on an internal queue and are applied by
//! [`SearchController::drain_completions`]. Both paths run on the caller's
//! thread, so the state needs no locking.
//!
//! Two effects follow transitions:
//! - autocomplete: whenever the text changes (or a new autocomplete starts)
//!   while `requesting_autocomplete` is set, fetch suggestions through the
//!   debouncer. Empty text ends the request without touching the network.
//! - submit: when `is_submitting` turns on, resolve the text to a listing path.
//!
//! Failures are logged and leave the pending flag set until `reset`.

use crate::api::{navigation_target, SearchApi};
use crate::debounce::Debouncer;
use crate::model::{ApiError, SearchAction};
use crate::state::{reduce, SearchState};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

/// Result of a remote call, tagged with the query it was issued for.
#[derive(Debug)]
pub enum Completion {
    /// Autocomplete round trip finished.
    Suggestions {
        /// Text the fetch was issued for.
        query: String,
        /// Suggestions, or why the call failed.
        result: Result<Vec<String>, ApiError>,
    },
    /// Resolve round trip finished.
    Resolved {
        /// Text that was submitted.
        query: String,
        /// Resolved listing path, or why the call failed.
        result: Result<String, ApiError>,
    },
}

/// Owns the search state and drives its effects.
pub struct SearchController<A: SearchApi> {
    state: SearchState,
    navigation_target: Option<String>,
    api: Arc<A>,
    debouncer: Debouncer,
    runtime: Handle,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
}

impl<A: SearchApi> SearchController<A> {
    /// Create a controller in the initial state.
    ///
    /// Network work is spawned on `runtime`; suggestion fetches wait for
    /// `debounce` of quiet before leaving.
    pub fn new(api: A, debounce: Duration, runtime: Handle) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: SearchState::new(),
            navigation_target: None,
            api: Arc::new(api),
            debouncer: Debouncer::new(debounce, runtime.clone()),
            runtime,
            completions_tx,
            completions_rx,
        }
    }

    /// Current search state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// `/lst` + resolved path, once a submission has resolved.
    ///
    /// Not part of the search state: `reset` leaves it in place.
    pub fn navigation_target(&self) -> Option<&str> {
        self.navigation_target.as_deref()
    }

    /// Apply `action` and run whichever effects the transition triggers.
    pub fn dispatch(&mut self, action: SearchAction) {
        let starts_autocomplete = matches!(action, SearchAction::AutocompleteStart { .. });
        let kind = action.kind();

        let previous = std::mem::take(&mut self.state);
        let was_submitting = previous.is_submitting;
        let previous_text = previous.text.clone();
        self.state = reduce(previous, action);

        debug!(
            action = kind,
            text = %self.state.text,
            suggestions = self.state.suggestions.len(),
            is_submitting = self.state.is_submitting,
            requesting_autocomplete = self.state.requesting_autocomplete,
            "transition"
        );

        if starts_autocomplete || self.state.text != previous_text {
            self.autocomplete_effect();
        }
        if self.state.is_submitting && !was_submitting {
            self.submit_effect();
        }
    }

    fn autocomplete_effect(&mut self) {
        if !self.state.requesting_autocomplete {
            return;
        }

        if self.state.text.is_empty() {
            self.dispatch(SearchAction::AutocompleteEnd {
                suggestions: Vec::new(),
            });
            return;
        }

        let query = self.state.text.clone();
        let api = Arc::clone(&self.api);
        let tx = self.completions_tx.clone();
        self.debouncer.call(async move {
            debug!(%query, "fetching suggestions");
            let result = api.fetch_suggestions(&query).await;
            // Receiver lives as long as the controller; a send error means it is gone.
            let _ = tx.send(Completion::Suggestions { query, result });
        });
    }

    fn submit_effect(&mut self) {
        let query = self.state.text.clone();
        let api = Arc::clone(&self.api);
        let tx = self.completions_tx.clone();
        info!(%query, "resolving listing page");
        self.runtime.spawn(async move {
            let result = api.resolve_listing_path(&query).await;
            let _ = tx.send(Completion::Resolved { query, result });
        });
    }

    /// Apply one completion.
    ///
    /// Suggestions for a query that no longer matches the text are dropped.
    /// Returns whether anything visible changed.
    pub fn apply_completion(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Suggestions { query, result } => match result {
                Ok(suggestions) if query == self.state.text => {
                    self.dispatch(SearchAction::AutocompleteEnd { suggestions });
                    true
                }
                Ok(suggestions) => {
                    debug!(
                        %query,
                        current = %self.state.text,
                        dropped = suggestions.len(),
                        "dropping stale suggestions"
                    );
                    false
                }
                Err(err) => {
                    warn!(%query, error = %err, "autocomplete request failed");
                    false
                }
            },
            Completion::Resolved { query, result } => match result {
                Ok(path) => {
                    let target = navigation_target(&path);
                    info!(%query, %target, "listing page resolved");
                    self.navigation_target = Some(target);
                    true
                }
                Err(err) => {
                    warn!(%query, error = %err, "resolve request failed");
                    false
                }
            },
        }
    }

    /// Apply every completion already queued, without waiting.
    ///
    /// Returns whether anything visible changed.
    pub fn drain_completions(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completions_rx.try_recv() {
            changed |= self.apply_completion(completion);
        }
        changed
    }

    /// Wait for the next completion and apply it.
    ///
    /// Returns whether anything visible changed.
    pub async fn apply_next_completion(&mut self) -> bool {
        match self.completions_rx.recv().await {
            Some(completion) => self.apply_completion(completion),
            None => false,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
