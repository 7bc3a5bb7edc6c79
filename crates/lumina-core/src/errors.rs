//! Error taxonomy shared by every Lumina crate.
//!
//! - [`LuminaError::Configuration`]: missing or invalid credentials, fatal at startup
//! - [`LuminaError::Capability`]: any failed capability call, recovered per turn
//! - [`LuminaError::InputValidation`]: rejected before dispatch, no call made
//! - [`LuminaError::SessionBusy`]: an intent arrived while a turn was in flight

use thiserror::Error;

use crate::capability::Capability;
use crate::ids::SessionId;

/// Top-level error type.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LuminaError {
    /// Credentials or endpoint configuration are missing or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A hosted capability call failed.
    #[error("{capability} failed ({category}): {message}")]
    Capability {
        /// Which capability failed.
        capability: Capability,
        /// Classification (`network`, `auth`, `rate_limit`, `api`, `parse`, ...).
        category: String,
        /// Underlying cause.
        message: String,
    },

    /// User input was rejected before any call was made.
    #[error("invalid input: {0}")]
    InputValidation(String),

    /// Another turn is still awaiting a capability response.
    #[error("session {0} is busy")]
    SessionBusy(SessionId),
}

impl LuminaError {
    /// Short classification string for logging.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Capability { category, .. } => category,
            Self::InputValidation(_) => "input_validation",
            Self::SessionBusy(_) => "session_busy",
        }
    }

    /// Whether the process cannot continue.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Text shown to the user in place of the expected result.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration(msg) => format!("설정 오류: {msg}"),
            Self::Capability {
                capability,
                message,
                ..
            } => match capability {
                Capability::Chat => format!("별들의 목소리가 닿지 않았습니다: {message}"),
                Capability::Vision => format!("분석 오류: {message}"),
                Capability::Speech => format!("TTS 오류: {message}"),
                Capability::ImageGeneration => format!(
                    "마력이 부족해서 부적 만들기에 실패했습니다. 토큰을 충전해주세요 ({message})"
                ),
            },
            Self::InputValidation(msg) => msg.clone(),
            Self::SessionBusy(_) => "루미나가 아직 답을 준비하고 있습니다. 잠시만 기다려 주세요.".into(),
        }
    }
}

/// Result alias over [`LuminaError`].
pub type Result<T> = std::result::Result<T, LuminaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn capability_err(capability: Capability) -> LuminaError {
        LuminaError::Capability {
            capability,
            category: "api".into(),
            message: "boom".into(),
        }
    }

    #[test]
    fn display_includes_capability_and_category() {
        let err = capability_err(Capability::Vision);
        assert_eq!(err.to_string(), "vision failed (api): boom");
    }

    #[test]
    fn categories() {
        assert_eq!(LuminaError::Configuration("x".into()).category(), "configuration");
        assert_eq!(capability_err(Capability::Chat).category(), "api");
        assert_eq!(LuminaError::InputValidation("x".into()).category(), "input_validation");
        assert_eq!(LuminaError::SessionBusy(SessionId::from("s")).category(), "session_busy");
    }

    #[test]
    fn only_configuration_is_fatal() {
        assert!(LuminaError::Configuration("no key".into()).is_fatal());
        assert!(!capability_err(Capability::Speech).is_fatal());
        assert!(!LuminaError::InputValidation("empty".into()).is_fatal());
    }

    #[test]
    fn user_message_names_failure() {
        assert!(capability_err(Capability::Speech).user_message().starts_with("TTS 오류"));
        assert!(
            capability_err(Capability::ImageGeneration)
                .user_message()
                .contains("부적 만들기에 실패")
        );
        assert_eq!(
            LuminaError::InputValidation("소원을 입력해 주세요.".into()).user_message(),
            "소원을 입력해 주세요."
        );
    }

    #[test]
    fn result_alias_propagates() {
        fn fails() -> Result<()> {
            Err(LuminaError::InputValidation("nope".into()))
        }
        assert_matches!(fails(), Err(LuminaError::InputValidation(_)));
    }
}
