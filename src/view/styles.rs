//! Widget styling.
//!
//! Colors are dropped entirely when `--no-color` is passed or `NO_COLOR` is set.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether color output is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicitly enabled or disabled.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== SearchStyles =====

/// Styles shared by the search widgets.
#[derive(Debug, Clone, Copy)]
pub struct SearchStyles {
    /// Editable input text.
    pub input: Style,
    /// Input text while submitting.
    pub input_read_only: Style,
    /// Cursor cell after the text.
    pub cursor: Style,
    /// Loading and submitting labels.
    pub indicator: Style,
    /// Unselected suggestion rows.
    pub suggestion: Style,
    /// Highlighted suggestion row.
    pub selected_suggestion: Style,
    /// Resolved listing URL.
    pub link: Style,
    /// Key hints.
    pub hint: Style,
}

impl SearchStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            let plain = Style::default();
            return Self {
                input: plain,
                input_read_only: plain,
                cursor: plain.add_modifier(Modifier::REVERSED),
                indicator: plain.add_modifier(Modifier::BOLD),
                suggestion: plain,
                selected_suggestion: plain.add_modifier(Modifier::REVERSED),
                link: plain.add_modifier(Modifier::UNDERLINED),
                hint: plain,
            };
        }

        Self {
            input: Style::default(),
            input_read_only: Style::default().fg(Color::DarkGray),
            cursor: Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            indicator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            suggestion: Style::default().fg(Color::Cyan),
            selected_suggestion: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            link: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::UNDERLINED),
            hint: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Default for SearchStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::new(true))
    }
}
