//! Orchestrator: single entry point for every user intent.

use lumina_core::{LuminaError, Mode, Result, TurnId};
use lumina_llm::CapabilityClients;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::events::{EventEmitter, TurnEvent};
use crate::session::{PendingImage, Session};
use crate::types::{TurnOutcome, UserIntent};

/// Routes intents to the handler for the session's mode.
pub struct Orchestrator {
    pub(super) clients: CapabilityClients,
    pub(super) emitter: EventEmitter,
}

impl Orchestrator {
    /// Create an orchestrator with its own event emitter.
    pub fn new(clients: CapabilityClients) -> Self {
        Self {
            clients,
            emitter: EventEmitter::new(),
        }
    }

    /// Subscribe to presentation events.
    pub fn subscribe(&self) -> broadcast::Receiver<TurnEvent> {
        self.emitter.subscribe()
    }

    /// Handle one user intent.
    ///
    /// Capability failures are reported as [`TurnOutcome::Failed`] and never
    /// leave a partial assistant message behind. Rejections that happen
    /// before any call is made come back as `Err`:
    ///
    /// - [`LuminaError::SessionBusy`] while a turn is in flight
    /// - [`LuminaError::InputValidation`] for empty input, a missing upload,
    ///   or an intent that does not fit the current mode
    pub async fn handle_user_intent(
        &self,
        session: &mut Session,
        intent: UserIntent,
    ) -> Result<TurnOutcome> {
        if session.is_busy() {
            warn!(session_id = %session.id(), intent = intent.kind(), "intent rejected, session busy");
            return Err(LuminaError::SessionBusy(session.id().clone()));
        }
        debug!(
            session_id = %session.id(),
            mode = %session.mode(),
            state = session.state().as_str(),
            intent = intent.kind(),
            "handling intent"
        );
        session.clear_error();

        match intent {
            UserIntent::Reset => {
                session.reset();
                let _ = self.emitter.emit(TurnEvent::TranscriptReset {
                    mode: session.mode(),
                });
                Ok(TurnOutcome::SessionUpdated)
            }
            UserIntent::SetMode(mode) => {
                session.set_mode(mode);
                info!(session_id = %session.id(), %mode, "mode switched");
                let _ = self.emitter.emit(TurnEvent::ModeChanged { mode });
                Ok(TurnOutcome::SessionUpdated)
            }
            UserIntent::SetTts(enabled) => {
                session.set_tts(enabled);
                debug!(session_id = %session.id(), enabled, "tts toggled");
                Ok(TurnOutcome::SessionUpdated)
            }
            UserIntent::UploadImage { data, mime_type } => {
                require_mode(session, Mode::ImageReading)?;
                if data.is_empty() {
                    return Err(LuminaError::InputValidation(
                        "업로드된 이미지가 비어 있습니다.".into(),
                    ));
                }
                debug!(session_id = %session.id(), bytes = data.len(), %mime_type, "image uploaded");
                session.set_pending_image(PendingImage { data, mime_type });
                Ok(TurnOutcome::SessionUpdated)
            }
            UserIntent::SubmitText(text) => match session.mode() {
                Mode::Chat => self.handle_chat(session, &text).await,
                Mode::TalismanGeneration => self.handle_talisman(session, &text).await,
                Mode::ImageReading => Err(LuminaError::InputValidation(
                    "관상/손금 보기에서는 사진을 올린 뒤 분석을 요청해 주세요.".into(),
                )),
            },
            UserIntent::AnalyzeImage => {
                require_mode(session, Mode::ImageReading)?;
                self.handle_image_reading(session).await
            }
            UserIntent::SubmitWish(wish) => {
                require_mode(session, Mode::TalismanGeneration)?;
                self.handle_talisman(session, &wish).await
            }
        }
    }

    // ── Turn lifecycle helpers shared by the mode handlers ─────────────

    pub(super) fn start_turn(&self, session: &mut Session) -> TurnId {
        let turn_id = TurnId::new();
        session.begin_turn();
        info!(session_id = %session.id(), %turn_id, mode = %session.mode(), "turn started");
        let _ = self.emitter.emit(TurnEvent::TurnStarted {
            session_id: session.id().clone(),
            turn_id: turn_id.clone(),
            mode: session.mode(),
        });
        turn_id
    }

    pub(super) fn finish_turn(&self, session: &mut Session, turn_id: TurnId) {
        session.finish_turn();
        debug!(session_id = %session.id(), %turn_id, "turn finished");
        let _ = self.emitter.emit(TurnEvent::TurnFinished { turn_id });
    }

    pub(super) fn fail_turn(
        &self,
        session: &mut Session,
        turn_id: TurnId,
        error: LuminaError,
    ) -> TurnOutcome {
        warn!(
            session_id = %session.id(),
            %turn_id,
            category = error.category(),
            error = %error,
            "turn failed"
        );
        session.fail_turn(error.clone());
        let _ = self.emitter.emit(TurnEvent::TurnFailed {
            error: error.clone(),
        });
        let _ = self.emitter.emit(TurnEvent::TurnFinished { turn_id });
        TurnOutcome::Failed { error }
    }

    pub(super) fn append(&self, session: &mut Session, message: lumina_core::Message) {
        session.push(message.clone());
        let _ = self.emitter.emit(TurnEvent::MessageAppended { message });
    }
}

fn require_mode(session: &Session, expected: Mode) -> Result<()> {
    if session.mode() == expected {
        Ok(())
    } else {
        Err(LuminaError::InputValidation(format!(
            "'{}' 모드에서만 할 수 있습니다. 현재 모드: '{}'",
            expected.label(),
            session.mode().label()
        )))
    }
}
