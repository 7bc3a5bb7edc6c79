//! # lumina-core
//!
//! Foundation types shared by every Lumina crate:
//!
//! - **Branded IDs**: `SessionId`, `TurnId`
//! - **Messages**: `Message` with `System`, `User`, `Assistant` roles and optional images
//! - **Modes**: `Mode` with its seed persona
//! - **Capabilities**: request/result value types per hosted capability
//! - **Errors**: `LuminaError` taxonomy via `thiserror`

#![deny(unsafe_code)]

pub mod capability;
pub mod constants;
pub mod errors;
pub mod ids;
pub mod messages;
pub mod mode;

pub use capability::{
    Capability, ChatRequest, ChatResult, ImageGenRequest, ImageGenResult, SpeechRequest,
    SpeechResult, VisionRequest, VisionResult,
};
pub use errors::{LuminaError, Result};
pub use ids::{SessionId, TurnId};
pub use messages::{ImageRef, Message, Role};
pub use mode::Mode;
