//! Azure `OpenAI` request and response bodies.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Chat completions (chat + vision)
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `POST .../chat/completions`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatCompletionRequest {
    /// Conversation in order.
    pub messages: Vec<WireMessage>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Generation cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// One role-tagged message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WireMessage {
    /// `system`, `user`, or `assistant`.
    pub role: &'static str,
    /// Plain text or content parts.
    pub content: WireContent,
}

/// Message content: a bare string, or typed parts when an image is attached.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WireContent {
    /// Text only.
    Text(String),
    /// Mixed text and image parts.
    Parts(Vec<ContentPart>),
}

/// A typed content part.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text part.
    Text {
        /// The text.
        text: String,
    },
    /// Image part (data URL or hosted URL).
    ImageUrl {
        /// Image location.
        image_url: ImageUrl,
    },
}

/// Image location inside a content part.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageUrl {
    /// `data:{mime};base64,...` or `https://...`.
    pub url: String,
}

/// Response of `POST .../chat/completions`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// Candidate completions; only the first is used.
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One completion candidate.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatChoice {
    /// Generated message.
    pub message: ChoiceMessage,
}

/// Generated message body. `content` is null when filtered.
#[derive(Clone, Debug, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text.
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if any.
    pub fn first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Speech
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `POST .../audio/speech`.
#[derive(Clone, Debug, Serialize)]
pub struct SpeechBody<'a> {
    /// Deployment name.
    pub model: &'a str,
    /// Text to speak.
    pub input: &'a str,
    /// Voice identity.
    pub voice: &'a str,
}

// ─────────────────────────────────────────────────────────────────────────────
// Image generation
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `POST .../images/generations`.
#[derive(Clone, Debug, Serialize)]
pub struct ImageGenerationBody {
    /// Full prompt, style suffix included.
    pub prompt: String,
    /// Number of images.
    pub n: u8,
    /// `vivid` or `natural`.
    pub style: &'static str,
    /// `standard` or `hd`.
    pub quality: &'static str,
}

/// Response of `POST .../images/generations`.
#[derive(Clone, Debug, Deserialize)]
pub struct ImageGenerationResponse {
    /// Generated images.
    #[serde(default)]
    pub data: Vec<GeneratedImage>,
}

/// One generated image.
#[derive(Clone, Debug, Deserialize)]
pub struct GeneratedImage {
    /// Hosted URL.
    #[serde(default)]
    pub url: Option<String>,
}

impl ImageGenerationResponse {
    /// URL of the first image, if any.
    pub fn first_url(self) -> Option<String> {
        self.data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .filter(|u| !u.is_empty())
    }
}
