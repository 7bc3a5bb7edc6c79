//! Terminal rendering of [`TurnEvent`]s.
//!
//! Audio is written to the output directory as an MP3 file and its path is
//! printed. Generated images are shown as their hosted URL.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use lumina_core::{ImageRef, Message, Role};
use lumina_runtime::TurnEvent;
use tracing::{debug, warn};

/// Writes events to a terminal-like sink.
pub struct Renderer {
    output_dir: PathBuf,
}

impl Renderer {
    /// Renderer that saves audio under `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Render one event.
    pub fn render<W: Write>(&self, out: &mut W, event: &TurnEvent) -> io::Result<()> {
        match event {
            TurnEvent::TurnStarted { mode, .. } => {
                writeln!(out, "🔮 {} · 별들의 목소리를 듣는 중...", mode.label())
            }
            TurnEvent::MessageAppended { message } => {
                if message.role == Role::Assistant && message.image.is_none() {
                    writeln!(out, "\n루미나: {}\n", message.content)?;
                }
                Ok(())
            }
            TurnEvent::AudioReady { bytes } => {
                match write_audio(&self.output_dir, bytes, Local::now()) {
                    Ok(path) => writeln!(out, "🔊 음성 답변: {}", path.display()),
                    Err(e) => {
                        warn!(dir = %self.output_dir.display(), error = %e, "failed to save audio");
                        writeln!(out, "⚠️  음성 파일을 저장하지 못했습니다: {e}")
                    }
                }
            }
            TurnEvent::ImageReady { url, caption } => {
                writeln!(out, "\n🎨 {caption}\n   {url}\n")
            }
            TurnEvent::Warning { message } => writeln!(out, "⚠️  {message}"),
            TurnEvent::TurnFailed { error } => writeln!(out, "❌ {}", error.user_message()),
            TurnEvent::TranscriptReset { mode } => {
                writeln!(out, "✨ {} · 새로운 이야기를 시작합니다.", mode.label())
            }
            TurnEvent::ModeChanged { mode } => {
                writeln!(out, "✨ {} 모드로 전환했습니다.", mode.label())
            }
            TurnEvent::TurnFinished { .. } => Ok(()),
        }
    }
}

/// Print the visible transcript.
pub fn render_history<'a, W: Write>(
    out: &mut W,
    messages: impl Iterator<Item = &'a Message>,
) -> io::Result<()> {
    let mut empty = true;
    for message in messages {
        let who = match message.role {
            Role::User => "나",
            Role::Assistant => "루미나",
            Role::System => continue,
        };
        empty = false;
        write!(out, "{who}: {}", message.content)?;
        match &message.image {
            Some(ImageRef::Inline { mime_type, data }) => {
                write!(out, " [사진 {mime_type}, {} bytes]", data.len())?;
            }
            Some(ImageRef::Hosted { url }) => write!(out, " [{url}]")?,
            None => {}
        }
        if message.audio_bytes.is_some() {
            write!(out, " 🔊")?;
        }
        writeln!(out)?;
    }
    if empty {
        writeln!(out, "(아직 대화가 없습니다)")?;
    }
    Ok(())
}

/// File name for an audio answer produced at `now`.
pub fn audio_file_name(now: DateTime<Local>) -> String {
    format!("lumina-{}.mp3", now.format("%Y%m%d-%H%M%S-%3f"))
}

/// Write MP3 bytes under `dir`, creating it if needed.
pub fn write_audio(dir: &Path, bytes: &[u8], now: DateTime<Local>) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(audio_file_name(now));
    std::fs::write(&path, bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "audio written");
    Ok(path)
}
