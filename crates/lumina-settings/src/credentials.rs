//! Resolved credentials for the hosted capability endpoints.
//!
//! Settings allow an empty endpoint and a missing key so that the defaults
//! serialize cleanly. [`AzureCredentials::resolve`] is where those become
//! hard requirements: a session cannot start without both.

use std::time::Duration;

use crate::errors::{Result, SettingsError};
use crate::types::LuminaSettings;

/// Everything a capability client needs to reach the hosted endpoints.
#[derive(Clone)]
pub struct AzureCredentials {
    /// Resource endpoint without a trailing slash.
    pub endpoint: String,
    /// API key sent in the `api-key` header.
    pub api_key: String,
    /// API version for chat, vision, and speech.
    pub api_version: String,
    /// API version for image generation.
    pub image_api_version: String,
    /// Chat and vision deployment.
    pub chat_deployment: String,
    /// Speech deployment.
    pub tts_deployment: String,
    /// Image-generation deployment.
    pub image_deployment: String,
    /// Speech voice identity.
    pub voice: String,
    /// Total per-request timeout, if one was configured.
    pub timeout: Option<Duration>,
}

impl AzureCredentials {
    /// Resolve credentials from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingCredential`] when the key or endpoint
    /// is absent, and [`SettingsError::InvalidValue`] when the endpoint is not
    /// an http(s) URL or a deployment name is blank.
    pub fn resolve(settings: &LuminaSettings) -> Result<Self> {
        let api = &settings.api;

        let api_key = api
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(SettingsError::MissingCredential("AZURE_OAI_KEY"))?
            .to_string();

        let endpoint = api.endpoint.trim().trim_end_matches('/');
        if endpoint.is_empty() {
            return Err(SettingsError::MissingCredential("AZURE_OAI_ENDPOINT"));
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(SettingsError::InvalidValue(format!(
                "endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }

        for (name, value) in [
            ("chatDeployment", &api.chat_deployment),
            ("ttsDeployment", &api.tts_deployment),
            ("imageDeployment", &api.image_deployment),
        ] {
            if value.trim().is_empty() {
                return Err(SettingsError::InvalidValue(format!("{name} is empty")));
            }
        }

        Ok(Self {
            endpoint: endpoint.to_string(),
            api_key,
            api_version: api.api_version.clone(),
            image_api_version: api.image_api_version.clone(),
            chat_deployment: api.chat_deployment.clone(),
            tts_deployment: api.tts_deployment.clone(),
            image_deployment: api.image_deployment.clone(),
            voice: api.voice.clone(),
            timeout: api.request_timeout_ms.map(Duration::from_millis),
        })
    }
}

impl std::fmt::Debug for AzureCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureCredentials")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("chat_deployment", &self.chat_deployment)
            .field("tts_deployment", &self.tts_deployment)
            .field("image_deployment", &self.image_deployment)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn settings_with(endpoint: &str, key: Option<&str>) -> LuminaSettings {
        let mut s = LuminaSettings::default();
        s.api.endpoint = endpoint.to_string();
        s.api.api_key = key.map(String::from);
        s
    }

    #[test]
    fn resolves_and_trims_endpoint() {
        let creds =
            AzureCredentials::resolve(&settings_with("https://res.openai.azure.com/", Some("k")))
                .unwrap();
        assert_eq!(creds.endpoint, "https://res.openai.azure.com");
        assert_eq!(creds.api_key, "k");
        assert_eq!(creds.chat_deployment, "gpt-4o-mini");
        assert_eq!(creds.timeout, None);
    }

    #[test]
    fn configured_timeout_is_carried() {
        let mut settings = settings_with("https://res.openai.azure.com", Some("k"));
        settings.api.request_timeout_ms = Some(30_000);
        let creds = AzureCredentials::resolve(&settings).unwrap();
        assert_eq!(creds.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn missing_key() {
        let err = AzureCredentials::resolve(&settings_with("https://x", None)).unwrap_err();
        assert_matches!(err, SettingsError::MissingCredential("AZURE_OAI_KEY"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = AzureCredentials::resolve(&settings_with("https://x", Some("   "))).unwrap_err();
        assert_matches!(err, SettingsError::MissingCredential("AZURE_OAI_KEY"));
    }

    #[test]
    fn missing_endpoint() {
        let err = AzureCredentials::resolve(&settings_with("", Some("k"))).unwrap_err();
        assert_matches!(err, SettingsError::MissingCredential("AZURE_OAI_ENDPOINT"));
    }

    #[test]
    fn non_http_endpoint_rejected() {
        let err = AzureCredentials::resolve(&settings_with("res.openai.azure.com", Some("k")))
            .unwrap_err();
        assert_matches!(err, SettingsError::InvalidValue(_));
    }

    #[test]
    fn blank_deployment_rejected() {
        let mut s = settings_with("https://x", Some("k"));
        s.api.tts_deployment = String::new();
        let err = AzureCredentials::resolve(&s).unwrap_err();
        assert_matches!(err, SettingsError::InvalidValue(msg) if msg.contains("ttsDeployment"));
    }

    #[test]
    fn debug_hides_key() {
        let creds =
            AzureCredentials::resolve(&settings_with("https://x", Some("secret-key"))).unwrap();
        assert!(!format!("{creds:?}").contains("secret-key"));
    }
}
