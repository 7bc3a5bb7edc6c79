//! Presentation events and the broadcast emitter that carries them.

use lumina_core::{LuminaError, Message, Mode, SessionId, TurnId};
use tokio::sync::broadcast;

/// Default broadcast channel capacity.
const DEFAULT_CAPACITY: usize = 256;

/// What the shell should render next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// A capability turn began (show a spinner).
    TurnStarted {
        /// Session the turn belongs to.
        session_id: SessionId,
        /// Turn identifier.
        turn_id: TurnId,
        /// Mode the turn was dispatched for.
        mode: Mode,
    },
    /// A message was appended to the transcript.
    MessageAppended {
        /// The new message.
        message: Message,
    },
    /// Speech audio for the latest assistant message.
    AudioReady {
        /// Encoded audio bytes.
        bytes: Vec<u8>,
    },
    /// A generated image is ready to display.
    ImageReady {
        /// Hosted image URL.
        url: String,
        /// Caption to show with the image.
        caption: String,
    },
    /// Non-fatal problem; the turn still completed.
    Warning {
        /// User-facing text.
        message: String,
    },
    /// The turn failed.
    TurnFailed {
        /// The error.
        error: LuminaError,
    },
    /// The transcript was truncated to the seed of `mode`.
    TranscriptReset {
        /// Mode whose seed the transcript now holds.
        mode: Mode,
    },
    /// The session switched to `mode` and now shows that mode's transcript.
    ModeChanged {
        /// The newly selected mode.
        mode: Mode,
    },
    /// The turn ended (hide the spinner).
    TurnFinished {
        /// Turn identifier.
        turn_id: TurnId,
    },
}

impl TurnEvent {
    /// Event type string for logging.
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::TurnStarted { .. } => "turn_started",
            Self::MessageAppended { .. } => "message_appended",
            Self::AudioReady { .. } => "audio_ready",
            Self::ImageReady { .. } => "image_ready",
            Self::Warning { .. } => "warning",
            Self::TurnFailed { .. } => "turn_failed",
            Self::TranscriptReset { .. } => "transcript_reset",
            Self::ModeChanged { .. } => "mode_changed",
            Self::TurnFinished { .. } => "turn_finished",
        }
    }
}

/// Broadcast-based event emitter.
///
/// Non-blocking: `emit` never awaits. Slow receivers lag rather than
/// blocking the orchestrator.
pub struct EventEmitter {
    tx: broadcast::Sender<TurnEvent>,
}

impl EventEmitter {
    /// Create an emitter with the default channel capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an emitter with a custom channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all subscribers.
    ///
    /// Returns the number of receivers, 0 when nobody is listening.
    pub fn emit(&self, event: TurnEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Subscribe to events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<TurnEvent> {
        self.tx.subscribe()
    }

}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}
