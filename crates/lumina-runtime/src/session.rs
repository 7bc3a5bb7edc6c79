//! Per-session mutable state.
//!
//! A [`Session`] is owned by the Presentation Shell and lent to the
//! orchestrator as `&mut` for the duration of one intent. The transcript
//! always starts with the current mode's seed system message. Each mode
//! keeps its own transcript; switching away parks it until the mode is
//! selected again.

use std::collections::HashMap;

use lumina_core::{ImageRef, LuminaError, Message, Mode, SessionId};

/// Turn lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Ready for the next intent.
    #[default]
    Idle,
    /// A capability call is in flight. New intents are rejected.
    AwaitingCapabilityResponse,
    /// The last turn failed. Cleared by the next intent.
    Error,
}

impl SessionState {
    /// Short name for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingCapabilityResponse => "awaiting_capability_response",
            Self::Error => "error",
        }
    }
}

/// An uploaded image waiting to be analysed.
#[derive(Clone, PartialEq, Eq)]
pub struct PendingImage {
    /// Encoded image bytes.
    pub data: Vec<u8>,
    /// MIME type, e.g. `image/jpeg`.
    pub mime_type: String,
}

impl std::fmt::Debug for PendingImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingImage")
            .field("len", &self.data.len())
            .field("mime_type", &self.mime_type)
            .finish()
    }
}

/// Conversation state for one interactive run.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    mode: Mode,
    transcript: Vec<Message>,
    parked: HashMap<Mode, Vec<Message>>,
    tts_enabled: bool,
    state: SessionState,
    pending_image: Option<PendingImage>,
    last_error: Option<LuminaError>,
}

impl Session {
    /// Create a session seeded for `mode`.
    pub fn new(mode: Mode, tts_enabled: bool) -> Self {
        Self {
            id: SessionId::new(),
            mode,
            transcript: vec![mode.seed_message()],
            parked: HashMap::new(),
            tts_enabled,
            state: SessionState::Idle,
            pending_image: None,
            last_error: None,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Full transcript, system seed included.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Messages the shell should render (system messages hidden).
    pub fn visible_messages(&self) -> impl Iterator<Item = &Message> {
        self.transcript.iter().filter(|m| m.is_visible())
    }

    /// Whether answers are followed by speech synthesis.
    pub fn tts_enabled(&self) -> bool {
        self.tts_enabled
    }

    /// Turn lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a turn is in flight.
    pub fn is_busy(&self) -> bool {
        self.state == SessionState::AwaitingCapabilityResponse
    }

    /// Image uploaded but not yet cleared.
    pub fn pending_image(&self) -> Option<&PendingImage> {
        self.pending_image.as_ref()
    }

    /// Error from the most recent failed turn.
    pub fn last_error(&self) -> Option<&LuminaError> {
        self.last_error.as_ref()
    }

    /// Truncate the transcript to the current mode's seed and drop any
    /// pending upload.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.transcript.push(self.mode.seed_message());
        self.pending_image = None;
        self.last_error = None;
        if self.state == SessionState::Error {
            self.state = SessionState::Idle;
        }
    }

    /// Switch mode, restoring that mode's earlier transcript or its seed.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        let restored = self
            .parked
            .remove(&mode)
            .unwrap_or_else(|| vec![mode.seed_message()]);
        let previous = std::mem::replace(&mut self.transcript, restored);
        let _ = self.parked.insert(self.mode, previous);
        self.mode = mode;
    }

    /// Toggle speech synthesis.
    pub fn set_tts(&mut self, enabled: bool) {
        self.tts_enabled = enabled;
    }

    // ── Orchestrator-only mutation ──────────────────────────────────

    pub(crate) fn set_pending_image(&mut self, image: PendingImage) {
        self.pending_image = Some(image);
    }

    pub(crate) fn begin_turn(&mut self) {
        self.state = SessionState::AwaitingCapabilityResponse;
        self.last_error = None;
    }

    pub(crate) fn finish_turn(&mut self) {
        self.state = SessionState::Idle;
    }

    pub(crate) fn fail_turn(&mut self, error: LuminaError) {
        self.state = SessionState::Error;
        self.last_error = Some(error);
    }

    /// Accept a new intent after a failure.
    pub(crate) fn clear_error(&mut self) {
        if self.state == SessionState::Error {
            self.state = SessionState::Idle;
        }
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.transcript.push(message);
    }

    /// Record audio length on the most recent assistant message.
    pub(crate) fn attach_audio_to_last(&mut self, len: usize) {
        if let Some(last) = self
            .transcript
            .last_mut()
            .filter(|m| m.role == lumina_core::Role::Assistant)
        {
            last.audio_bytes = Some(len);
        }
    }

    /// Inline image message for the pending upload.
    pub(crate) fn pending_image_ref(&self) -> Option<ImageRef> {
        self.pending_image.as_ref().map(|p| ImageRef::Inline {
            mime_type: p.mime_type.clone(),
            data: p.data.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use lumina_core::Role;

    use super::*;

    #[test]
    fn new_session_is_seeded() {
        let session = Session::new(Mode::Chat, true);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0], Mode::Chat.seed_message());
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.visible_messages().count(), 0);
    }

    #[test]
    fn reset_restores_exactly_the_seed() {
        let mut session = Session::new(Mode::Chat, false);
        session.push(Message::user("a"));
        session.push(Message::assistant("b"));
        session.set_pending_image(PendingImage {
            data: vec![1],
            mime_type: "image/png".into(),
        });

        session.reset();
        assert_eq!(session.transcript(), &[Mode::Chat.seed_message()]);
        assert!(session.pending_image().is_none());
    }

    #[test]
    fn set_mode_starts_new_mode_from_seed() {
        let mut session = Session::new(Mode::Chat, true);
        session.push(Message::user("hello"));
        session.set_mode(Mode::TalismanGeneration);
        assert_eq!(session.mode(), Mode::TalismanGeneration);
        assert_eq!(session.transcript(), &[Mode::TalismanGeneration.seed_message()]);
    }

    #[test]
    fn chat_history_survives_round_trip_through_other_modes() {
        let mut session = Session::new(Mode::Chat, true);
        session.push(Message::user("q"));
        session.push(Message::assistant("a"));

        session.set_mode(Mode::ImageReading);
        session.set_mode(Mode::TalismanGeneration);
        session.set_mode(Mode::Chat);

        assert_eq!(
            session.transcript(),
            &[Mode::Chat.seed_message(), Message::user("q"), Message::assistant("a")]
        );
    }

    #[test]
    fn reset_only_clears_current_mode() {
        let mut session = Session::new(Mode::Chat, true);
        session.push(Message::user("q"));
        session.set_mode(Mode::TalismanGeneration);
        session.push(Message::user("행운"));
        session.reset();

        session.set_mode(Mode::Chat);
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn selecting_current_mode_keeps_transcript() {
        let mut session = Session::new(Mode::Chat, true);
        session.push(Message::user("q"));
        session.set_mode(Mode::Chat);
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn visible_messages_hide_system() {
        let mut session = Session::new(Mode::Chat, true);
        session.push(Message::user("q"));
        session.push(Message::assistant("a"));
        let roles: Vec<Role> = session.visible_messages().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn failure_then_next_intent_clears_error() {
        let mut session = Session::new(Mode::Chat, true);
        session.begin_turn();
        assert!(session.is_busy());

        session.fail_turn(LuminaError::InputValidation("x".into()));
        assert_eq!(session.state(), SessionState::Error);
        assert!(session.last_error().is_some());

        session.clear_error();
        assert_eq!(session.state(), SessionState::Idle);
        // last_error survives until the next turn begins
        assert!(session.last_error().is_some());
        session.begin_turn();
        assert!(session.last_error().is_none());
    }

    #[test]
    fn audio_marker_only_on_assistant() {
        let mut session = Session::new(Mode::Chat, true);
        session.push(Message::user("q"));
        session.attach_audio_to_last(10);
        assert_eq!(session.transcript()[1].audio_bytes, None);

        session.push(Message::assistant("a"));
        session.attach_audio_to_last(10);
        assert_eq!(session.transcript()[2].audio_bytes, Some(10));
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let a = Session::new(Mode::Chat, true);
        let b = Session::new(Mode::Chat, true);
        assert_ne!(a.id(), b.id());
    }
}
