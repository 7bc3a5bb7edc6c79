//! One handler per mode.
//!
//! Every handler follows the same shape: validate input (no call on
//! failure), start the turn, append the user message, call the primary
//! capability, then either append the assistant message or fail the turn.

use lumina_core::constants::ANALYSIS_PROMPT;
use lumina_core::{
    Capability, ChatRequest, ImageGenRequest, ImageRef, LuminaError, Message, Result,
    SpeechRequest, TurnId, VisionRequest,
};
use tracing::{debug, warn};

use super::orchestrator::Orchestrator;
use crate::events::TurnEvent;
use crate::session::Session;
use crate::types::TurnOutcome;

impl Orchestrator {
    /// Chat: full transcript to chat completions, then optional speech.
    pub(super) async fn handle_chat(&self, session: &mut Session, text: &str) -> Result<TurnOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LuminaError::InputValidation("고민을 입력해 주세요.".into()));
        }

        let turn_id = self.start_turn(session);
        self.append(session, Message::user(text));

        let request = ChatRequest {
            messages: session.transcript().to_vec(),
        };
        debug!(messages = request.messages.len(), "dispatching chat request");

        match self.clients.chat.chat(request).await {
            Ok(result) => Ok(self.complete_spoken_turn(session, turn_id, result.text).await),
            Err(e) => Ok(self.fail_turn(session, turn_id, e.into_lumina(Capability::Chat))),
        }
    }

    /// Image reading: pending upload plus the fixed prompt to vision, then
    /// optional speech.
    pub(super) async fn handle_image_reading(&self, session: &mut Session) -> Result<TurnOutcome> {
        let (Some(pending), Some(image_ref)) =
            (session.pending_image().cloned(), session.pending_image_ref())
        else {
            return Err(LuminaError::InputValidation(
                "먼저 손바닥이나 얼굴 사진을 올려 주세요.".into(),
            ));
        };

        let turn_id = self.start_turn(session);
        self.append(session, Message::user(ANALYSIS_PROMPT).with_image(image_ref));

        let request = VisionRequest {
            image: pending.data,
            mime_type: pending.mime_type,
            prompt: ANALYSIS_PROMPT.to_string(),
        };
        debug!(image_bytes = request.image.len(), "dispatching vision request");

        match self.clients.vision.analyze(request).await {
            Ok(result) => Ok(self.complete_spoken_turn(session, turn_id, result.text).await),
            Err(e) => Ok(self.fail_turn(session, turn_id, e.into_lumina(Capability::Vision))),
        }
    }

    /// Talisman: wish to image generation. Never spoken.
    pub(super) async fn handle_talisman(&self, session: &mut Session, wish: &str) -> Result<TurnOutcome> {
        let wish = wish.trim();
        if wish.is_empty() {
            return Err(LuminaError::InputValidation("소원을 입력해 주세요.".into()));
        }

        let turn_id = self.start_turn(session);
        self.append(session, Message::user(wish));

        let request = ImageGenRequest::for_wish(wish);
        debug!(prompt = %request.prompt, "dispatching image generation request");

        match self.clients.image.generate(request).await {
            Ok(result) => {
                let caption = talisman_caption(wish);
                let message = Message::assistant(caption.clone()).with_image(ImageRef::Hosted {
                    url: result.url.clone(),
                });
                self.append(session, message.clone());
                let _ = self.emitter.emit(TurnEvent::ImageReady {
                    url: result.url,
                    caption,
                });
                self.finish_turn(session, turn_id);
                Ok(TurnOutcome::Completed {
                    message,
                    audio: None,
                })
            }
            Err(e) => Ok(self.fail_turn(
                session,
                turn_id,
                e.into_lumina(Capability::ImageGeneration),
            )),
        }
    }

    /// Append the assistant answer, then synthesise speech for it when
    /// enabled. A speech failure downgrades to a warning.
    async fn complete_spoken_turn(
        &self,
        session: &mut Session,
        turn_id: TurnId,
        text: String,
    ) -> TurnOutcome {
        self.append(session, Message::assistant(text.clone()));

        let audio = if session.tts_enabled() && session.mode().speaks() {
            self.speak(session, text).await
        } else {
            None
        };

        let message = session
            .transcript()
            .last()
            .cloned()
            .unwrap_or_else(|| Message::assistant(String::new()));
        self.finish_turn(session, turn_id);
        TurnOutcome::Completed { message, audio }
    }

    async fn speak(&self, session: &mut Session, text: String) -> Option<Vec<u8>> {
        match self.clients.speech.synthesize(SpeechRequest { text }).await {
            Ok(result) => {
                session.attach_audio_to_last(result.audio.len());
                let _ = self.emitter.emit(TurnEvent::AudioReady {
                    bytes: result.audio.clone(),
                });
                Some(result.audio)
            }
            Err(e) => {
                let error = e.into_lumina(Capability::Speech);
                warn!(session_id = %session.id(), category = error.category(), error = %error, "speech synthesis failed, keeping text answer");
                let _ = self.emitter.emit(TurnEvent::Warning {
                    message: error.user_message(),
                });
                None
            }
        }
    }
}

/// Caption shown under a generated talisman.
pub fn talisman_caption(wish: &str) -> String {
    format!("'{wish}'을(를) 기원하는 부적입니다.")
}
