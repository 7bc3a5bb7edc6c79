//! Line-oriented terminal shell.
//!
//! Reads commands from an async line source, turns them into
//! [`UserIntent`]s and renders the resulting [`TurnEvent`]s while the turn
//! is still running.

use std::io::Write;

use anyhow::Result;
use lumina_runtime::{Orchestrator, Session, TurnEvent, UserIntent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::commands::{Command, HELP};
use crate::render::{Renderer, render_history};
use crate::upload::read_image;

/// Interactive shell bound to one session.
pub struct Shell<W: Write> {
    orchestrator: Orchestrator,
    session: Session,
    renderer: Renderer,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Build a shell writing to `out`.
    pub fn new(orchestrator: Orchestrator, session: Session, renderer: Renderer, out: W) -> Self {
        Self {
            orchestrator,
            session,
            renderer,
            out,
        }
    }

    /// The session driven by this shell.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until `/quit` or end of input.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.greet()?;
        let mut lines = input.lines();
        loop {
            self.prompt()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command).await?,
                Err(message) => writeln!(self.out, "{message}")?,
            }
        }
        writeln!(self.out, "\n루미나: 별빛이 당신의 길을 비추기를. 안녕히 가세요.")?;
        info!(session_id = %self.session.id(), "shell closed");
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Empty | Command::Quit => Ok(()),
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                Ok(())
            }
            Command::History => {
                render_history(&mut self.out, self.session.visible_messages())?;
                Ok(())
            }
            Command::Text(text) => self.dispatch(UserIntent::SubmitText(text)).await.map(drop),
            Command::Mode(mode) => self.dispatch(UserIntent::SetMode(mode)).await.map(drop),
            Command::Reset => self.dispatch(UserIntent::Reset).await.map(drop),
            Command::Analyze => self.dispatch(UserIntent::AnalyzeImage).await.map(drop),
            Command::Tts(value) => {
                let enabled = value.unwrap_or(!self.session.tts_enabled());
                if self.dispatch(UserIntent::SetTts(enabled)).await? {
                    let state = if enabled { "켜짐" } else { "꺼짐" };
                    writeln!(self.out, "🔊 음성 답변: {state}")?;
                }
                Ok(())
            }
            Command::Upload(path) => {
                let (data, mime_type) = match read_image(&path) {
                    Ok(image) => image,
                    Err(e) => {
                        writeln!(self.out, "⚠️  {e:#}")?;
                        return Ok(());
                    }
                };
                let len = data.len();
                if self.dispatch(UserIntent::UploadImage { data, mime_type }).await? {
                    writeln!(
                        self.out,
                        "📷 사진을 올렸습니다 ({len} bytes). /analyze 로 운세를 확인하세요."
                    )?;
                }
                Ok(())
            }
        }
    }

    /// Hand one intent to the orchestrator, rendering events as they arrive.
    ///
    /// Returns whether the intent was accepted.
    async fn dispatch(&mut self, intent: UserIntent) -> Result<bool> {
        let mut events = self.orchestrator.subscribe();
        debug!(intent = intent.kind(), "dispatching intent");

        // The turn always runs to completion so the session never stays busy;
        // a terminal write error is reported once it has finished.
        let mut write_error = None;
        let result = {
            let turn = self.orchestrator.handle_user_intent(&mut self.session, intent);
            tokio::pin!(turn);
            loop {
                tokio::select! {
                    result = &mut turn => break result,
                    Ok(event) = events.recv() => {
                        if let Err(e) = self.renderer.render(&mut self.out, &event) {
                            let _ = write_error.get_or_insert(e);
                        }
                    }
                }
            }
        };
        if let Some(e) = write_error {
            return Err(e.into());
        }
        while let Ok(event) = events.try_recv() {
            self.render(&event)?;
        }

        match result {
            Ok(_) => Ok(true),
            Err(e) => {
                writeln!(self.out, "⚠️  {}", e.user_message())?;
                Ok(false)
            }
        }
    }

    fn render(&mut self, event: &TurnEvent) -> Result<()> {
        self.renderer.render(&mut self.out, event)?;
        Ok(())
    }

    fn greet(&mut self) -> Result<()> {
        let mode = self.session.mode();
        writeln!(self.out, "🌙 루미나의 신비한 점집에 오신 것을 환영합니다.")?;
        writeln!(self.out, "현재 모드: {} (/help 로 명령어 보기)", mode.label())?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{}> ", self.session.mode().as_str())?;
        self.out.flush()?;
        Ok(())
    }
}
