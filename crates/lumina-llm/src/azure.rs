//! Azure `OpenAI` client implementing every capability trait.
//!
//! One resource endpoint, one key, one deployment per capability:
//!
//! - chat and vision: `POST {endpoint}/openai/deployments/{chat}/chat/completions`
//! - speech: `POST {endpoint}/openai/deployments/{tts}/audio/speech`
//! - images: `POST {endpoint}/openai/deployments/{image}/images/generations`
//!
//! Every request carries `api-key` and an `api-version` query parameter.
//! Calls are single-shot: no retries, no streaming.

use async_trait::async_trait;
use lumina_core::constants::{CHAT_TEMPERATURE, SPEECH_INPUT_LIMIT_CHARS, VISION_MAX_TOKENS};
use lumina_core::{
    ChatRequest, ChatResult, ImageGenRequest, ImageGenResult, SpeechRequest, SpeechResult,
    VisionRequest, VisionResult,
};
use lumina_settings::AzureCredentials;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::capability::{ChatCapability, ImageCapability, SpeechCapability, VisionCapability};
use crate::errors::{
    CapabilityError, CapabilityResult, classify_status, retry_after_from_headers,
};
use crate::message_converter::{build_vision_messages, convert_transcript};
use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, ImageGenerationBody, ImageGenerationResponse,
    SpeechBody,
};

/// Image generation parameters.
const IMAGE_COUNT: u8 = 1;
const IMAGE_STYLE: &str = "vivid";
const IMAGE_QUALITY: &str = "standard";

/// Azure `OpenAI` capability client.
pub struct AzureOpenAIClient {
    credentials: AzureCredentials,
    client: reqwest::Client,
}

impl AzureOpenAIClient {
    /// Create a client. A total request timeout is applied only when one
    /// was configured.
    pub fn new(credentials: AzureCredentials) -> CapabilityResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = credentials.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!(
            endpoint = %credentials.endpoint,
            chat = %credentials.chat_deployment,
            tts = %credentials.tts_deployment,
            image = %credentials.image_deployment,
            "Azure OpenAI client initialized"
        );

        Ok(Self {
            credentials,
            client,
        })
    }

    /// Build the URL for `deployment` + `operation`.
    fn url(&self, deployment: &str, operation: &str) -> String {
        format!(
            "{}/openai/deployments/{deployment}/{operation}",
            self.credentials.endpoint
        )
    }

    /// Build HTTP headers shared by every request.
    fn build_headers(&self) -> CapabilityResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&self.credentials.api_key).map_err(|e| {
            CapabilityError::Auth {
                status: 0,
                message: format!("Invalid api-key header: {e}"),
            }
        })?;
        let _ = headers.insert("api-key", key);
        let _ = headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// POST `body` and return the successful response.
    async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        api_version: &str,
        body: &B,
    ) -> CapabilityResult<reqwest::Response> {
        debug!(url, api_version, "capability request");

        let response = self
            .client
            .post(url)
            .query(&[("api-version", api_version)])
            .headers(self.build_headers()?)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let retry_after = retry_after_from_headers(response.headers());
        let body_text = response.text().await.unwrap_or_default();
        let err = classify_status(status.as_u16(), &body_text, retry_after);
        warn!(
            status = status.as_u16(),
            category = err.category(),
            retry_after_ms = ?err.retry_after_ms(),
            error = %err,
            "capability request failed"
        );
        Err(err)
    }

    /// POST `body` and decode a JSON response.
    async fn post_json<B, R>(&self, url: &str, api_version: &str, body: &B) -> CapabilityResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.post(url, api_version, body).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn complete(&self, request: &ChatCompletionRequest) -> CapabilityResult<String> {
        let url = self.url(&self.credentials.chat_deployment, "chat/completions");
        let response: ChatCompletionResponse = self
            .post_json(&url, &self.credentials.api_version, request)
            .await?;
        response
            .first_text()
            .ok_or(CapabilityError::EmptyResponse("no completion choices"))
    }
}

#[async_trait]
impl ChatCapability for AzureOpenAIClient {
    async fn chat(&self, request: ChatRequest) -> CapabilityResult<ChatResult> {
        let body = ChatCompletionRequest {
            messages: convert_transcript(&request.messages),
            temperature: Some(CHAT_TEMPERATURE),
            max_tokens: None,
        };
        let text = self.complete(&body).await?;
        debug!(chars = text.chars().count(), "chat completed");
        Ok(ChatResult { text })
    }
}

#[async_trait]
impl VisionCapability for AzureOpenAIClient {
    async fn analyze(&self, request: VisionRequest) -> CapabilityResult<VisionResult> {
        let body = ChatCompletionRequest {
            messages: build_vision_messages(&request),
            temperature: None,
            max_tokens: Some(VISION_MAX_TOKENS),
        };
        let text = self.complete(&body).await?;
        debug!(image_bytes = request.image.len(), "vision analysis completed");
        Ok(VisionResult { text })
    }
}

#[async_trait]
impl SpeechCapability for AzureOpenAIClient {
    async fn synthesize(&self, request: SpeechRequest) -> CapabilityResult<SpeechResult> {
        let chars = request.text.chars().count();
        if chars > SPEECH_INPUT_LIMIT_CHARS {
            warn!(
                chars,
                limit = SPEECH_INPUT_LIMIT_CHARS,
                "speech input exceeds endpoint limit, sending unchanged"
            );
        }

        let url = self.url(&self.credentials.tts_deployment, "audio/speech");
        let body = SpeechBody {
            model: &self.credentials.tts_deployment,
            input: &request.text,
            voice: &self.credentials.voice,
        };
        let response = self
            .post(&url, &self.credentials.api_version, &body)
            .await?;
        let audio = response.bytes().await?.to_vec();
        if audio.is_empty() {
            return Err(CapabilityError::EmptyResponse("no audio bytes"));
        }
        debug!(audio_bytes = audio.len(), "speech synthesized");
        Ok(SpeechResult { audio })
    }
}

#[async_trait]
impl ImageCapability for AzureOpenAIClient {
    async fn generate(&self, request: ImageGenRequest) -> CapabilityResult<ImageGenResult> {
        let url = self.url(&self.credentials.image_deployment, "images/generations");
        let body = ImageGenerationBody {
            prompt: request.full_prompt(),
            n: IMAGE_COUNT,
            style: IMAGE_STYLE,
            quality: IMAGE_QUALITY,
        };
        let response: ImageGenerationResponse = self
            .post_json(&url, &self.credentials.image_api_version, &body)
            .await?;
        let url = response
            .first_url()
            .ok_or(CapabilityError::EmptyResponse("no generated image"))?;
        debug!(%url, "image generated");
        Ok(ImageGenResult { url })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
