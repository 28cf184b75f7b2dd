//! Configuration: TOML file, environment, CLI, and key bindings.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig, DEFAULT_ARTICLE_TYPE, DEFAULT_BASE_URL, DEFAULT_COUNTRY_CODE,
    DEFAULT_DEBOUNCE_MS,
};
