//! # lumina-llm
//!
//! Hosted AI capability clients.
//!
//! - [`capability`]: one trait per capability plus the [`CapabilityClients`] bundle
//! - [`azure`]: `AzureOpenAIClient` implementing all four traits over HTTP
//! - [`message_converter`]: transcript to chat-completions wire messages
//! - [`types`]: request and response bodies
//! - [`errors`]: `CapabilityError` classification
//!
//! # Authentication
//!
//! API key only, sent in the `api-key` header.

#![deny(unsafe_code)]

pub mod azure;
pub mod capability;
pub mod errors;
pub mod message_converter;
pub mod types;

pub use azure::AzureOpenAIClient;
pub use capability::{
    CapabilityClients, ChatCapability, ImageCapability, SpeechCapability, VisionCapability,
};
pub use errors::{CapabilityError, CapabilityResult};
