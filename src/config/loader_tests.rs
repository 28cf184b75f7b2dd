//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// RAII guard removing an environment variable on creation and drop.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

// ===== file discovery and parsing =====

#[test]
fn default_config_path_contains_aisearch_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("aisearch") && path_str.ends_with("config.toml"),
        "Path should contain 'aisearch' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("aisearch_test_config.toml");
    fs::write(
        &config_path,
        r#"
base_url = "http://localhost:9000"
article_type = "B"
country_code = "at"
debounce_ms = 350
user_agent = "tester/1"
"#,
    )
    .expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should parse valid TOML")
        .expect("Should return Some for existing file");

    assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000"));
    assert_eq!(config.article_type.as_deref(), Some("B"));
    assert_eq!(config.country_code.as_deref(), Some("at"));
    assert_eq!(config.debounce_ms, Some(350));
    assert_eq!(config.user_agent.as_deref(), Some("tester/1"));
    assert_eq!(config.log_file_path, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("aisearch_test_invalid.toml");
    fs::write(&config_path, "debounce_ms = = 3").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Expected ParseError, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"theme = "monokai""#);
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn config_file_rejects_wrong_type() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"debounce_ms = "fast""#);
    assert!(result.is_err());
}

// ===== merge =====

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.base_url, "https://www.autoscout24.de");
    assert_eq!(config.article_type, "C");
    assert_eq!(config.country_code, "de");
    assert_eq!(config.debounce_ms, 200);
    assert_eq!(config.debounce(), std::time::Duration::from_millis(200));
    assert!(config.user_agent.starts_with("aisearch/"));
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        base_url: Some("http://127.0.0.1:1234".to_string()),
        debounce_ms: Some(50),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.base_url, "http://127.0.0.1:1234");
    assert_eq!(resolved.debounce_ms, 50);
    assert_eq!(resolved.article_type, defaults.article_type);
    assert_eq!(resolved.country_code, defaults.country_code);
    assert_eq!(resolved.user_agent, defaults.user_agent);
}

// ===== env overrides =====

#[test]
#[serial(aisearch_env)]
fn apply_env_overrides_respects_base_url() {
    let _guard = EnvGuard::new("AISEARCH_BASE_URL");
    env::set_var("AISEARCH_BASE_URL", "http://env.example");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.base_url, "http://env.example");
}

#[test]
#[serial(aisearch_env)]
fn apply_env_overrides_parses_debounce() {
    let _guard = EnvGuard::new("AISEARCH_DEBOUNCE_MS");
    env::set_var("AISEARCH_DEBOUNCE_MS", " 75 ");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.debounce_ms, 75);
}

#[test]
#[serial(aisearch_env)]
fn apply_env_overrides_ignores_non_numeric_debounce() {
    let _guard = EnvGuard::new("AISEARCH_DEBOUNCE_MS");
    env::set_var("AISEARCH_DEBOUNCE_MS", "soon");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.debounce_ms, DEFAULT_DEBOUNCE_MS);
}

#[test]
#[serial(aisearch_env)]
fn apply_env_overrides_no_change_when_env_vars_not_set() {
    let _url = EnvGuard::new("AISEARCH_BASE_URL");
    let _debounce = EnvGuard::new("AISEARCH_DEBOUNCE_MS");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

// ===== precedence =====

#[test]
#[serial(aisearch_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new("AISEARCH_CONFIG");
    let temp_dir = env::temp_dir();

    let explicit_path = temp_dir.join("aisearch_explicit.toml");
    fs::write(&explicit_path, r#"country_code = "fr""#).expect("Failed to write config");

    let env_path = temp_dir.join("aisearch_env.toml");
    fs::write(&env_path, r#"country_code = "it""#).expect("Failed to write config");
    env::set_var("AISEARCH_CONFIG", env_path.to_str().unwrap());

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(config.country_code.as_deref(), Some("fr"));

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(aisearch_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new("AISEARCH_CONFIG");

    let env_path = env::temp_dir().join("aisearch_env_only.toml");
    fs::write(&env_path, "debounce_ms = 10").expect("Failed to write config");
    env::set_var("AISEARCH_CONFIG", env_path.to_str().unwrap());

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.debounce_ms, Some(10));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(aisearch_env)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new("AISEARCH_BASE_URL");

    let config_file = ConfigFile {
        base_url: Some("http://file.example".to_string()),
        debounce_ms: Some(300),
        ..ConfigFile::default()
    };

    let merged = merge_config(Some(config_file));
    assert_eq!(merged.base_url, "http://file.example");

    env::set_var("AISEARCH_BASE_URL", "http://env.example");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.base_url, "http://env.example");
    assert_eq!(with_env.debounce_ms, 300);

    let with_cli = apply_cli_overrides(with_env, Some("http://cli.example".to_string()), Some(0));
    assert_eq!(with_cli.base_url, "http://cli.example");
    assert_eq!(with_cli.debounce_ms, 0);
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}
