//! Test harness shared by unit tests.
//!
//! Provides a scripted [`SearchApi`] (fixed replies, simulated latency, call
//! log) and a wrapper driving `TuiApp<TestBackend, _>` with key presses.
//! Tests using either must run on a paused tokio clock.

use crate::api::{Endpoints, SearchApi};
use crate::config::KeyBindings;
use crate::controller::SearchController;
use crate::model::ApiError;
use crate::state::SearchState;
use crate::view::{SearchStyles, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;

/// Convert a ratatui buffer to a string representation.
///
/// Trailing whitespace and blank lines are removed.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Move the paused clock forward, letting timers and requests progress.
pub async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

// ===== ScriptedApi =====

#[derive(Debug, Clone)]
enum Reply<T> {
    Ok(T),
    Fail,
}

/// Scripted API: fixed replies per query, a fixed latency, and a call log.
///
/// Unknown autocomplete queries answer with no suggestions; unknown resolve
/// queries fail.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    latency: Duration,
    suggestions: HashMap<String, Reply<Vec<String>>>,
    resolutions: HashMap<String, Reply<String>>,
    latency_overrides: HashMap<String, Duration>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedApi {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
            ..Self::default()
        }
    }

    pub fn suggest(mut self, query: &str, suggestions: &[&str]) -> Self {
        self.suggestions.insert(
            query.to_string(),
            Reply::Ok(suggestions.iter().map(|s| s.to_string()).collect()),
        );
        self
    }

    pub fn suggest_fails(mut self, query: &str) -> Self {
        self.suggestions.insert(query.to_string(), Reply::Fail);
        self
    }

    pub fn resolve(mut self, query: &str, path: &str) -> Self {
        self.resolutions
            .insert(query.to_string(), Reply::Ok(path.to_string()));
        self
    }

    pub fn resolve_fails(mut self, query: &str) -> Self {
        self.resolutions.insert(query.to_string(), Reply::Fail);
        self
    }

    /// Answer `query` after `latency_ms` instead of the default latency.
    pub fn slow(mut self, query: &str, latency_ms: u64) -> Self {
        self.latency_overrides
            .insert(query.to_string(), Duration::from_millis(latency_ms));
        self
    }

    /// Shared log of calls, as `suggest:<query>` / `resolve:<query>`.
    pub fn call_log(&self) -> CallLog {
        CallLog(Arc::clone(&self.calls))
    }

    fn failure() -> ApiError {
        let source = serde_json::from_str::<serde_json::Value>("<html>")
            .expect_err("HTML is not JSON");
        ApiError::Decode {
            url: "scripted".to_string(),
            source,
        }
    }

    async fn wait(&self, query: &str) {
        let latency = self
            .latency_overrides
            .get(query)
            .copied()
            .unwrap_or(self.latency);
        tokio::time::sleep(latency).await;
    }
}

impl SearchApi for ScriptedApi {
    async fn fetch_suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
        self.calls.lock().unwrap().push(format!("suggest:{query}"));
        self.wait(query).await;
        match self.suggestions.get(query) {
            Some(Reply::Ok(list)) => Ok(list.clone()),
            Some(Reply::Fail) => Err(Self::failure()),
            None => Ok(Vec::new()),
        }
    }

    async fn resolve_listing_path(&self, query: &str) -> Result<String, ApiError> {
        self.calls.lock().unwrap().push(format!("resolve:{query}"));
        self.wait(query).await;
        match self.resolutions.get(query) {
            Some(Reply::Ok(path)) => Ok(path.clone()),
            Some(Reply::Fail) | None => Err(Self::failure()),
        }
    }
}

/// Handle on a [`ScriptedApi`] call log.
#[derive(Debug, Clone)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Controller over `api` with the default 200ms debounce.
pub fn scripted_controller(api: ScriptedApi) -> SearchController<ScriptedApi> {
    SearchController::new(api, Duration::from_millis(200), Handle::current())
}

// ===== TuiHarness =====

/// Drives a `TuiApp` on a `TestBackend`.
pub struct TuiHarness {
    app: TuiApp<TestBackend, ScriptedApi>,
    running: bool,
}

impl TuiHarness {
    /// 60x16 terminal, default bindings and styles, base `https://www.autoscout24.de`.
    pub fn new(api: ScriptedApi) -> Self {
        let terminal = Terminal::new(TestBackend::new(60, 16)).expect("test terminal");
        let endpoints =
            Endpoints::new("https://www.autoscout24.de", "C", "de").expect("valid endpoints");
        let app = TuiApp::with_terminal(
            terminal,
            scripted_controller(api),
            endpoints,
            KeyBindings::default(),
            SearchStyles::default(),
        );
        Self { app, running: true }
    }

    /// Press a key without modifiers.
    pub fn send_key(&mut self, code: KeyCode) {
        self.send_key_with_mods(code, KeyModifiers::NONE);
    }

    /// Press a key with modifiers. Keys after quitting are ignored.
    pub fn send_key_with_mods(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if !self.running {
            return;
        }
        if self.app.handle_key(KeyEvent::new(code, modifiers)) {
            self.running = false;
        }
    }

    /// Type `text` one character at a time, with no delay between keys.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send_key(KeyCode::Char(ch));
        }
    }

    /// Let `ms` of simulated time pass, then apply completions.
    pub async fn settle(&mut self, ms: u64) {
        advance(ms).await;
        self.app.apply_completions();
    }

    pub fn state(&self) -> &SearchState {
        self.app.controller().state()
    }

    pub fn selected(&self) -> Option<usize> {
        self.app.selected()
    }

    pub fn listing_url(&self) -> Option<String> {
        self.app.listing_url()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Draw a frame and return the screen as text.
    pub fn render_to_string(&mut self) -> String {
        self.app.draw().expect("draw to test backend");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
