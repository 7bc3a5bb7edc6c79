//! Slash-command parsing for the terminal shell.

use std::path::PathBuf;

use lumina_core::Mode;

/// One line of shell input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Blank line.
    Empty,
    /// Free text: a question in chat mode, a wish in talisman mode.
    Text(String),
    /// `/mode <chat|reading|talisman>`
    Mode(Mode),
    /// `/tts [on|off]`, `None` toggles.
    Tts(Option<bool>),
    /// `/upload <path>`
    Upload(PathBuf),
    /// `/analyze`
    Analyze,
    /// `/reset`
    Reset,
    /// `/history`
    History,
    /// `/help`
    Help,
    /// `/quit`
    Quit,
}

pub const HELP: &str = "\
명령어:
  /mode <chat|reading|talisman>  모드 전환 (대화가 새로 시작됩니다)
  /tts [on|off]                  음성 답변 켜기/끄기
  /upload <경로>                 손바닥/얼굴 사진 올리기 (reading 모드)
  /analyze                       올린 사진 분석하기 (reading 모드)
  /reset                         대화 초기화
  /history                       지금까지의 대화 보기
  /help                          도움말
  /quit                          종료
그 외 입력은 질문(chat) 또는 소원(talisman)으로 보냅니다.";

impl Command {
    /// Parse one input line. Errors carry the text to show the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }
        if !line.starts_with('/') {
            return Ok(Self::Text(line.to_string()));
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name {
            "/mode" => {
                if arg.is_empty() {
                    return Err("사용법: /mode <chat|reading|talisman>".into());
                }
                arg.parse::<Mode>()
                    .map(Self::Mode)
                    .map_err(|e| e.user_message())
            }
            "/tts" => match arg.to_lowercase().as_str() {
                "" => Ok(Self::Tts(None)),
                "on" | "true" | "1" => Ok(Self::Tts(Some(true))),
                "off" | "false" | "0" => Ok(Self::Tts(Some(false))),
                other => Err(format!("알 수 없는 값입니다: {other} (on/off)")),
            },
            "/upload" => {
                if arg.is_empty() {
                    Err("사용법: /upload <사진 경로>".into())
                } else {
                    Ok(Self::Upload(PathBuf::from(arg)))
                }
            }
            "/analyze" => Ok(Self::Analyze),
            "/reset" => Ok(Self::Reset),
            "/history" => Ok(Self::History),
            "/help" | "/?" => Ok(Self::Help),
            "/quit" | "/exit" => Ok(Self::Quit),
            other => Err(format!("알 수 없는 명령어입니다: {other} (/help)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text() {
        assert_eq!(
            Command::parse("  하는 일이 잘 될까요?  "),
            Ok(Command::Text("하는 일이 잘 될까요?".into()))
        );
    }

    #[test]
    fn blank_line() {
        assert_eq!(Command::parse("   "), Ok(Command::Empty));
    }

    #[test]
    fn mode_aliases() {
        assert_eq!(Command::parse("/mode chat"), Ok(Command::Mode(Mode::Chat)));
        assert_eq!(
            Command::parse("/mode reading"),
            Ok(Command::Mode(Mode::ImageReading))
        );
        assert_eq!(
            Command::parse("/mode  Talisman "),
            Ok(Command::Mode(Mode::TalismanGeneration))
        );
    }

    #[test]
    fn mode_requires_known_argument() {
        assert!(Command::parse("/mode").is_err());
        assert!(Command::parse("/mode dance").unwrap_err().contains("dance"));
    }

    #[test]
    fn tts_values() {
        assert_eq!(Command::parse("/tts"), Ok(Command::Tts(None)));
        assert_eq!(Command::parse("/tts on"), Ok(Command::Tts(Some(true))));
        assert_eq!(Command::parse("/tts OFF"), Ok(Command::Tts(Some(false))));
        assert!(Command::parse("/tts maybe").is_err());
    }

    #[test]
    fn upload_keeps_path_with_spaces() {
        assert_eq!(
            Command::parse("/upload /tmp/my palm.jpg"),
            Ok(Command::Upload(PathBuf::from("/tmp/my palm.jpg")))
        );
        assert!(Command::parse("/upload").is_err());
    }

    #[test]
    fn simple_commands() {
        assert_eq!(Command::parse("/analyze"), Ok(Command::Analyze));
        assert_eq!(Command::parse("/reset"), Ok(Command::Reset));
        assert_eq!(Command::parse("/history"), Ok(Command::History));
        assert_eq!(Command::parse("/help"), Ok(Command::Help));
        assert_eq!(Command::parse("/quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("/exit"), Ok(Command::Quit));
    }

    #[test]
    fn unknown_command() {
        assert!(Command::parse("/dance").unwrap_err().contains("/dance"));
    }
}
