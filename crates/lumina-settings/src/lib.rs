//! # lumina-settings
//!
//! Layered configuration for the Lumina session orchestrator.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** from [`LuminaSettings::default()`]
//! 2. **User file** at `~/.lumina/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** `AZURE_OAI_*` and `LUMINA_*` (highest priority)
//!
//! [`AzureCredentials::resolve`] turns loaded settings into the validated
//! endpoint, key, and deployment names the capability clients need.

#![deny(unsafe_code)]

pub mod credentials;
pub mod errors;
pub mod loader;
pub mod types;

pub use credentials::AzureCredentials;
pub use errors::{Result, SettingsError};
pub use loader::{apply_env_overrides, deep_merge, load_settings_from_path, settings_path};
pub use types::*;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
