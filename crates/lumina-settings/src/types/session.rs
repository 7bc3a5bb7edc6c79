//! Session and logging settings.

use lumina_core::Mode;
use serde::{Deserialize, Serialize};

/// Defaults applied when a new session starts.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionSettings {
    /// Mode selected at startup.
    pub default_mode: Mode,
    /// Whether spoken answers start enabled.
    pub tts_enabled: bool,
    /// Directory where the terminal shell writes audio files.
    pub output_dir: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_mode: Mode::Chat,
            tts_enabled: true,
            output_dir: "lumina-output".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Minimum level written to stderr (`RUST_LOG` wins when set).
    pub level: String,
    /// Emit JSON lines instead of compact text.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}
