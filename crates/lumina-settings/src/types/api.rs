//! Azure `OpenAI` endpoint settings.
//!
//! One resource endpoint serves every capability; each capability is routed
//! to its own deployment. Image generation uses its own API version.

use serde::{Deserialize, Serialize};

/// Endpoint, deployments, and API versions for the hosted capabilities.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AzureApiSettings {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: String,
    /// API key. Usually supplied via `AZURE_OAI_KEY` rather than the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// API version for chat, vision, and speech.
    pub api_version: String,
    /// API version for image generation.
    pub image_api_version: String,
    /// Chat (and vision) model deployment name.
    pub chat_deployment: String,
    /// Speech-synthesis deployment name.
    pub tts_deployment: String,
    /// Image-generation deployment name.
    pub image_deployment: String,
    /// Speech voice identity.
    pub voice: String,
    /// Total HTTP request timeout in milliseconds. Unset means requests
    /// wait as long as the server keeps the connection open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
}

impl Default for AzureApiSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: None,
            api_version: "2024-05-01-preview".to_string(),
            image_api_version: "2024-04-01-preview".to_string(),
            chat_deployment: "gpt-4o-mini".to_string(),
            tts_deployment: "tts".to_string(),
            image_deployment: "dall-e-3".to_string(),
            voice: lumina_core::constants::DEFAULT_VOICE.to_string(),
            request_timeout_ms: None,
        }
    }
}

impl std::fmt::Debug for AzureApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureApiSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_version", &self.api_version)
            .field("image_api_version", &self.image_api_version)
            .field("chat_deployment", &self.chat_deployment)
            .field("tts_deployment", &self.tts_deployment)
            .field("image_deployment", &self.image_deployment)
            .field("voice", &self.voice)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_hosted_deployments() {
        let api = AzureApiSettings::default();
        assert_eq!(api.api_version, "2024-05-01-preview");
        assert_eq!(api.image_api_version, "2024-04-01-preview");
        assert_eq!(api.chat_deployment, "gpt-4o-mini");
        assert_eq!(api.tts_deployment, "tts");
        assert_eq!(api.image_deployment, "dall-e-3");
        assert_eq!(api.voice, "shimmer");
        assert!(api.endpoint.is_empty());
        assert!(api.api_key.is_none());
        assert!(api.request_timeout_ms.is_none());
    }

    #[test]
    fn timeout_is_read_from_file() {
        let api: AzureApiSettings =
            serde_json::from_str(r#"{"requestTimeoutMs": 45000}"#).unwrap();
        assert_eq!(api.request_timeout_ms, Some(45_000));

        let unset = serde_json::to_value(AzureApiSettings::default()).unwrap();
        assert!(unset.get("requestTimeoutMs").is_none());
    }

    #[test]
    fn debug_redacts_key() {
        let api = AzureApiSettings {
            api_key: Some("sk-very-secret".into()),
            ..Default::default()
        };
        let dbg = format!("{api:?}");
        assert!(!dbg.contains("sk-very-secret"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn camel_case_wire_names() {
        let json = serde_json::to_value(AzureApiSettings::default()).unwrap();
        assert!(json.get("chatDeployment").is_some());
        assert!(json.get("imageApiVersion").is_some());
        assert!(json.get("apiKey").is_none());
    }
}
