//! Intents accepted by the orchestrator and the outcomes it returns.

use lumina_core::{LuminaError, Message, Mode};

// ─────────────────────────────────────────────────────────────────────────────
// Intents
// ─────────────────────────────────────────────────────────────────────────────

/// Something the user did in the Presentation Shell.
#[derive(Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Free text. Routed by the session's current mode.
    SubmitText(String),
    /// Hold an image for a later [`UserIntent::AnalyzeImage`].
    UploadImage {
        /// Encoded image bytes.
        data: Vec<u8>,
        /// MIME type, e.g. `image/jpeg`.
        mime_type: String,
    },
    /// Analyse the pending upload.
    AnalyzeImage,
    /// Generate a talisman for a wish.
    SubmitWish(String),
    /// Truncate the transcript to the seed.
    Reset,
    /// Switch mode (reseeds the transcript).
    SetMode(Mode),
    /// Toggle speech synthesis.
    SetTts(bool),
}

impl UserIntent {
    /// Short name for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SubmitText(_) => "submit_text",
            Self::UploadImage { .. } => "upload_image",
            Self::AnalyzeImage => "analyze_image",
            Self::SubmitWish(_) => "submit_wish",
            Self::Reset => "reset",
            Self::SetMode(_) => "set_mode",
            Self::SetTts(_) => "set_tts",
        }
    }
}

impl std::fmt::Debug for UserIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SubmitText(t) => f.debug_tuple("SubmitText").field(t).finish(),
            Self::UploadImage { data, mime_type } => f
                .debug_struct("UploadImage")
                .field("len", &data.len())
                .field("mime_type", mime_type)
                .finish(),
            Self::AnalyzeImage => f.write_str("AnalyzeImage"),
            Self::SubmitWish(w) => f.debug_tuple("SubmitWish").field(w).finish(),
            Self::Reset => f.write_str("Reset"),
            Self::SetMode(m) => f.debug_tuple("SetMode").field(m).finish(),
            Self::SetTts(b) => f.debug_tuple("SetTts").field(b).finish(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Outcomes
// ─────────────────────────────────────────────────────────────────────────────

/// Result of one handled intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A capability turn finished and an assistant message was appended.
    Completed {
        /// The appended assistant message (carries the image URL for talismans).
        message: Message,
        /// Speech audio, when synthesis was enabled and succeeded.
        audio: Option<Vec<u8>>,
    },
    /// A capability call failed. Only the user's message was appended.
    Failed {
        /// What went wrong.
        error: LuminaError,
    },
    /// Session settings changed without any capability call.
    SessionUpdated,
}
