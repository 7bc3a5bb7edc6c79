//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`LuminaSettings::default()`]
//! 2. If `~/.lumina/settings.json` exists, deep-merge user values over defaults
//! 3. Apply environment variable overrides (highest priority)
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::types::LuminaSettings;

/// Resolve the path to the settings file (`~/.lumina/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".lumina").join("settings.json")
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields defaults. Invalid JSON is an error.
pub fn load_settings_from_path(path: &Path) -> Result<LuminaSettings> {
    let mut settings = load_file_layer(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Defaults merged with the file at `path`, without env overrides.
pub fn load_file_layer(path: &Path) -> Result<LuminaSettings> {
    let defaults = serde_json::to_value(LuminaSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    Ok(serde_json::from_value(merged)?)
}

/// Recursive deep merge of two JSON values.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply process environment overrides to loaded settings.
pub fn apply_env_overrides(settings: &mut LuminaSettings) {
    apply_overrides(settings, |key| std::env::var(key).ok());
}

/// Apply overrides read through `lookup`.
///
/// Empty strings are treated as unset. Invalid numbers and booleans are
/// ignored with a warning (falling back to file/default values).
pub fn apply_overrides<F>(settings: &mut LuminaSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let string = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    // ── Credentials & endpoint ─────────────────────────────────────
    if let Some(v) = string("AZURE_OAI_KEY") {
        settings.api.api_key = Some(v);
    }
    if let Some(v) = string("AZURE_OAI_ENDPOINT") {
        settings.api.endpoint = v;
    }
    if let Some(v) = string("AZURE_OAI_API_VERSION") {
        settings.api.api_version = v;
    }
    if let Some(v) = string("AZURE_OAI_IMAGE_API_VERSION") {
        settings.api.image_api_version = v;
    }

    // ── Deployments ────────────────────────────────────────────────
    if let Some(v) = string("AZURE_OAI_DEPLOYMENT") {
        settings.api.chat_deployment = v;
    }
    if let Some(v) = string("LUMINA_TTS_DEPLOYMENT") {
        settings.api.tts_deployment = v;
    }
    if let Some(v) = string("LUMINA_IMAGE_DEPLOYMENT") {
        settings.api.image_deployment = v;
    }
    if let Some(v) = string("LUMINA_TTS_VOICE") {
        settings.api.voice = v;
    }
    if let Some(v) = string("LUMINA_REQUEST_TIMEOUT_MS") {
        match parse_u64_range(&v, 1_000, 3_600_000) {
            Some(ms) => settings.api.request_timeout_ms = Some(ms),
            None => warn_invalid("LUMINA_REQUEST_TIMEOUT_MS", &v),
        }
    }

    // ── Session & logging ──────────────────────────────────────────
    if let Some(v) = string("LUMINA_TTS_ENABLED") {
        match parse_bool(&v) {
            Some(b) => settings.session.tts_enabled = b,
            None => warn_invalid("LUMINA_TTS_ENABLED", &v),
        }
    }
    if let Some(v) = string("LUMINA_LOG_LEVEL") {
        settings.logging.level = v;
    }
}

fn warn_invalid(key: &str, value: &str) {
    tracing::warn!(key, value, "invalid env var, ignoring");
}

// ── Pure parsing functions ──────────────────────────────────────────────────

/// Parse a string as a boolean.
///
/// Accepts (case-insensitive): `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a string as a `u64` within an inclusive range.
pub fn parse_u64_range(val: &str, min: u64, max: u64) -> Option<u64> {
    let n: u64 = val.trim().parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::errors::SettingsError;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ── deep_merge ──────────────────────────────────────────────────

    #[test]
    fn merge_nested_override() {
        let target = serde_json::json!({"api": {"endpoint": "", "voice": "shimmer"}});
        let source = serde_json::json!({"api": {"endpoint": "https://x"}});
        let merged = deep_merge(target, source);
        assert_eq!(merged["api"]["endpoint"], "https://x");
        assert_eq!(merged["api"]["voice"], "shimmer");
    }

    #[test]
    fn merge_null_preserves_target() {
        let merged = deep_merge(serde_json::json!({"a": 1}), serde_json::json!({"a": null}));
        assert_eq!(merged["a"], 1);
    }

    #[test]
    fn merge_array_replace() {
        let merged = deep_merge(
            serde_json::json!({"items": [1, 2, 3]}),
            serde_json::json!({"items": [4]}),
        );
        assert_eq!(merged["items"], serde_json::json!([4]));
    }

    // ── load_file_layer ─────────────────────────────────────────────

    #[test]
    fn missing_file_returns_defaults() {
        let settings = load_file_layer(Path::new("/nonexistent/settings.json")).unwrap();
        assert_eq!(settings.api.chat_deployment, "gpt-4o-mini");
        assert!(settings.session.tts_enabled);
    }

    #[test]
    fn partial_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"api": {"endpoint": "https://lumina.openai.azure.com"}, "session": {"ttsEnabled": false}}"#,
        )
        .unwrap();

        let settings = load_file_layer(&path).unwrap();
        assert_eq!(settings.api.endpoint, "https://lumina.openai.azure.com");
        assert!(!settings.session.tts_enabled);
        assert_eq!(settings.api.image_api_version, "2024-04-01-preview");
    }

    #[test]
    fn invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result = load_file_layer(&path);
        assert!(matches!(result.unwrap_err(), SettingsError::Json(_)));
    }

    // ── apply_overrides ─────────────────────────────────────────────

    #[test]
    fn env_overrides_credentials_and_deployments() {
        let mut settings = LuminaSettings::default();
        apply_overrides(
            &mut settings,
            lookup_from(&[
                ("AZURE_OAI_KEY", "k-123"),
                ("AZURE_OAI_ENDPOINT", "https://res.openai.azure.com/"),
                ("AZURE_OAI_DEPLOYMENT", "gpt-4o"),
                ("LUMINA_TTS_VOICE", "nova"),
            ]),
        );
        assert_eq!(settings.api.api_key.as_deref(), Some("k-123"));
        assert_eq!(settings.api.endpoint, "https://res.openai.azure.com/");
        assert_eq!(settings.api.chat_deployment, "gpt-4o");
        assert_eq!(settings.api.voice, "nova");
        assert_eq!(settings.api.tts_deployment, "tts");
    }

    #[test]
    fn empty_env_values_are_unset() {
        let mut settings = LuminaSettings::default();
        apply_overrides(&mut settings, lookup_from(&[("AZURE_OAI_KEY", "  ")]));
        assert!(settings.api.api_key.is_none());
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let mut settings = LuminaSettings::default();
        apply_overrides(
            &mut settings,
            lookup_from(&[
                ("LUMINA_TTS_ENABLED", "maybe"),
                ("LUMINA_REQUEST_TIMEOUT_MS", "5"),
            ]),
        );
        assert!(settings.session.tts_enabled);
        assert!(settings.api.request_timeout_ms.is_none());
    }

    #[test]
    fn valid_env_toggles_apply() {
        let mut settings = LuminaSettings::default();
        apply_overrides(
            &mut settings,
            lookup_from(&[
                ("LUMINA_TTS_ENABLED", "off"),
                ("LUMINA_REQUEST_TIMEOUT_MS", "30000"),
                ("LUMINA_LOG_LEVEL", "debug"),
            ]),
        );
        assert!(!settings.session.tts_enabled);
        assert_eq!(settings.api.request_timeout_ms, Some(30_000));
        assert_eq!(settings.logging.level, "debug");
    }

    // ── parsing ─────────────────────────────────────────────────────

    #[test]
    fn parse_bool_variants() {
        for val in ["true", "1", "yes", "ON"] {
            assert_eq!(parse_bool(val), Some(true), "failed for {val}");
        }
        for val in ["false", "0", "No", "off"] {
            assert_eq!(parse_bool(val), Some(false), "failed for {val}");
        }
        assert_eq!(parse_bool("2"), None);
    }

    #[test]
    fn parse_u64_bounds() {
        assert_eq!(parse_u64_range("1000", 1000, 2000), Some(1000));
        assert_eq!(parse_u64_range("2001", 1000, 2000), None);
        assert_eq!(parse_u64_range("abc", 1000, 2000), None);
    }
}
