//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and implement
//! [`Default`] with production values. `#[serde(default)]` allows partial
//! JSON: missing fields keep their default during deserialization.

mod api;
mod session;

pub use api::*;
pub use session::*;

use serde::{Deserialize, Serialize};

/// Root settings type.
///
/// Loaded from `~/.lumina/settings.json` with defaults applied for missing
/// fields. Environment variables override specific values. Example:
///
/// ```json
/// {
///   "api": { "endpoint": "https://my-resource.openai.azure.com" },
///   "session": { "ttsEnabled": false }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LuminaSettings {
    /// Settings schema version.
    pub version: String,
    /// Application name.
    pub name: String,
    /// Hosted endpoint settings.
    pub api: AzureApiSettings,
    /// Session defaults.
    pub session: SessionSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for LuminaSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            name: lumina_core::constants::NAME.to_string(),
            api: AzureApiSettings::default(),
            session: SessionSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let s: LuminaSettings =
            serde_json::from_str(r#"{"api": {"chatDeployment": "gpt-4o"}}"#).unwrap();
        assert_eq!(s.api.chat_deployment, "gpt-4o");
        assert_eq!(s.api.tts_deployment, "tts");
        assert_eq!(s.name, "lumina");
        assert!(s.session.tts_enabled);
    }
}
