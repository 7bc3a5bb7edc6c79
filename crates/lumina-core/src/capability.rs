//! Request/result value types for each hosted capability.
//!
//! Every request is independent: clients keep no state between calls. Only
//! [`ChatRequest`] depends on the session, because it carries the transcript.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{IMAGE_STYLE_SUFFIX, TALISMAN_PROMPT_PREFIX};
use crate::messages::Message;

/// Which hosted capability a call went to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Chat completions.
    Chat,
    /// Chat completions with inline image content.
    Vision,
    /// Text-to-speech.
    Speech,
    /// Image generation.
    ImageGeneration,
}

impl Capability {
    /// Short name for logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Vision => "vision",
            Self::Speech => "speech",
            Self::ImageGeneration => "image_generation",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Chat ────────────────────────────────────────────────────────────────────

/// Full transcript, system message included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatRequest {
    /// Messages in conversation order.
    pub messages: Vec<Message>,
}

/// First completion's text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatResult {
    /// Generated text.
    pub text: String,
}

// ── Vision ──────────────────────────────────────────────────────────────────

/// Raw image plus the caller's prompt.
#[derive(Clone, PartialEq, Eq)]
pub struct VisionRequest {
    /// Encoded image bytes.
    pub image: Vec<u8>,
    /// MIME type used in the data URL.
    pub mime_type: String,
    /// Instruction paired with the image.
    pub prompt: String,
}

impl fmt::Debug for VisionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisionRequest")
            .field("image_len", &self.image.len())
            .field("mime_type", &self.mime_type)
            .field("prompt", &self.prompt)
            .finish()
    }
}

/// Analysis text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisionResult {
    /// Generated text.
    pub text: String,
}

// ── Speech ──────────────────────────────────────────────────────────────────

/// Text to synthesise. Length is not validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeechRequest {
    /// Input text, passed through as-is.
    pub text: String,
}

/// Encoded audio (MP3 by default).
#[derive(Clone, PartialEq, Eq)]
pub struct SpeechResult {
    /// Audio bytes.
    pub audio: Vec<u8>,
}

impl fmt::Debug for SpeechResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechResult")
            .field("audio_len", &self.audio.len())
            .finish()
    }
}

// ── Image generation ────────────────────────────────────────────────────────

/// Caller prompt, before the style suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageGenRequest {
    /// Prompt text.
    pub prompt: String,
}

impl ImageGenRequest {
    /// Build the talisman prompt for a wish.
    pub fn for_wish(wish: &str) -> Self {
        Self {
            prompt: format!("{TALISMAN_PROMPT_PREFIX}{wish}"),
        }
    }

    /// Prompt actually sent to the endpoint: caller prompt + style suffix.
    #[must_use]
    pub fn full_prompt(&self) -> String {
        format!("{}{IMAGE_STYLE_SUFFIX}", self.prompt)
    }
}

/// Hosted image location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageGenResult {
    /// URL of the generated image.
    pub url: String,
}
