//! Service modes offered by the front-end.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CHAT_PERSONA, TALISMAN_PERSONA, VISION_PERSONA};
use crate::errors::LuminaError;
use crate::messages::Message;

/// The capability pipeline a session is currently routed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Tarot consultation over chat completions.
    #[default]
    Chat,
    /// Face / palm reading over the vision capability.
    ImageReading,
    /// Lucky-talisman image generation.
    TalismanGeneration,
}

impl Mode {
    /// Every mode, in menu order.
    pub const ALL: [Mode; 3] = [Mode::Chat, Mode::ImageReading, Mode::TalismanGeneration];

    /// Persona text of the seed system message.
    #[must_use]
    pub const fn seed_prompt(self) -> &'static str {
        match self {
            Self::Chat => CHAT_PERSONA,
            Self::ImageReading => VISION_PERSONA,
            Self::TalismanGeneration => TALISMAN_PERSONA,
        }
    }

    /// The system message a fresh or reset transcript starts with.
    #[must_use]
    pub fn seed_message(self) -> Message {
        Message::system(self.seed_prompt())
    }

    /// Menu label shown by the Presentation Shell.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chat => "💬 타로 상담 (채팅)",
            Self::ImageReading => "✋ 관상/손금 보기",
            Self::TalismanGeneration => "🎨 행운의 부적 만들기",
        }
    }

    /// Whether turns in this mode can be followed by speech synthesis.
    #[must_use]
    pub const fn speaks(self) -> bool {
        matches!(self, Self::Chat | Self::ImageReading)
    }

    /// Short machine name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::ImageReading => "image_reading",
            Self::TalismanGeneration => "talisman_generation",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = LuminaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chat" | "tarot" => Ok(Self::Chat),
            "reading" | "image_reading" | "vision" | "palm" => Ok(Self::ImageReading),
            "talisman" | "talisman_generation" | "image" => Ok(Self::TalismanGeneration),
            other => Err(LuminaError::InputValidation(format!("unknown mode: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Role;

    #[test]
    fn seed_is_single_system_message() {
        for mode in Mode::ALL {
            let seed = mode.seed_message();
            assert_eq!(seed.role, Role::System);
            assert_eq!(seed.content, mode.seed_prompt());
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("chat".parse::<Mode>().unwrap(), Mode::Chat);
        assert_eq!("Reading".parse::<Mode>().unwrap(), Mode::ImageReading);
        assert_eq!(" talisman ".parse::<Mode>().unwrap(), Mode::TalismanGeneration);
        assert!("dance".parse::<Mode>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn only_text_modes_speak() {
        assert!(Mode::Chat.speaks());
        assert!(Mode::ImageReading.speaks());
        assert!(!Mode::TalismanGeneration.speaks());
    }
}
