//! Message types for the session transcript.
//!
//! A transcript is an ordered list of [`Message`]s. Insertion order is the
//! conversation order sent to the chat capability. System messages carry the
//! persona for a mode: they are sent with every chat request but never
//! rendered to the user.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Role
// ─────────────────────────────────────────────────────────────────────────────

/// Author of a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Persona / behaviour instructions.
    System,
    /// The person using the front-end.
    User,
    /// Model output.
    Assistant,
}

impl Role {
    /// Wire name used by chat-completions endpoints.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Image references
// ─────────────────────────────────────────────────────────────────────────────

/// Image paired with a message.
#[derive(Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Raw bytes uploaded by the user (sent inline to the vision capability).
    Inline {
        /// MIME type, e.g. `image/jpeg`.
        mime_type: String,
        /// Encoded image bytes.
        data: Vec<u8>,
    },
    /// Externally hosted image (generated images). The URL may expire.
    Hosted {
        /// Image URL.
        url: String,
    },
}

impl std::fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inline { mime_type, data } => f
                .debug_struct("Inline")
                .field("mime_type", mime_type)
                .field("len", &data.len())
                .finish(),
            Self::Hosted { url } => f.debug_struct("Hosted").field("url", url).finish(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Message
// ─────────────────────────────────────────────────────────────────────────────

/// One entry in a session transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Author.
    pub role: Role,
    /// Text content.
    pub content: String,
    /// Optional image (user upload or generated result).
    pub image: Option<ImageRef>,
    /// Size of speech audio delivered with this turn, if any.
    pub audio_bytes: Option<usize>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            image: None,
            audio_bytes: None,
        }
    }

    /// System (persona) message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Plain user text.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Plain assistant text.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Attach an image.
    #[must_use]
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Record that speech audio of `len` bytes accompanied this message.
    #[must_use]
    pub fn with_audio(mut self, len: usize) -> Self {
        self.audio_bytes = Some(len);
        self
    }

    /// Whether the Presentation Shell should render this message.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.role != Role::System
    }
}
