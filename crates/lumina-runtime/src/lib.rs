//! # lumina-runtime
//!
//! Session state and turn orchestration.
//!
//! - **Session**: transcript, mode, TTS flag, pending upload, turn state
//! - **Orchestrator**: routes each [`UserIntent`] to the handler for the
//!   session's mode and drives the capability calls for one turn
//! - **Events**: [`TurnEvent`] broadcast for the presentation shell

#![deny(unsafe_code)]

pub mod events;
pub mod orchestrator;
pub mod session;
pub mod types;

pub use events::{EventEmitter, TurnEvent};
pub use orchestrator::{Orchestrator, talisman_caption};
pub use session::{PendingImage, Session, SessionState};
pub use types::{TurnOutcome, UserIntent};
