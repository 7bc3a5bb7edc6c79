//! # Capability traits
//!
//! One trait per hosted capability. The orchestrator depends only on these
//! traits, so tests substitute in-memory fakes and the hosted client can be
//! swapped without touching session logic.
//!
//! Implementors are stateless per call and must be `Send + Sync`.

use std::sync::Arc;

use async_trait::async_trait;
use lumina_core::{
    ChatRequest, ChatResult, ImageGenRequest, ImageGenResult, SpeechRequest, SpeechResult,
    VisionRequest, VisionResult,
};

use crate::errors::CapabilityResult;

/// Chat completions over a full transcript.
#[async_trait]
pub trait ChatCapability: Send + Sync {
    /// Return the first completion's text.
    async fn chat(&self, request: ChatRequest) -> CapabilityResult<ChatResult>;
}

/// Image analysis with a fixed persona.
#[async_trait]
pub trait VisionCapability: Send + Sync {
    /// Return the analysis text.
    async fn analyze(&self, request: VisionRequest) -> CapabilityResult<VisionResult>;
}

/// Text-to-speech.
#[async_trait]
pub trait SpeechCapability: Send + Sync {
    /// Return encoded audio bytes.
    async fn synthesize(&self, request: SpeechRequest) -> CapabilityResult<SpeechResult>;
}

/// Image generation.
#[async_trait]
pub trait ImageCapability: Send + Sync {
    /// Return the hosted URL of one generated image.
    async fn generate(&self, request: ImageGenRequest) -> CapabilityResult<ImageGenResult>;
}

/// The four capabilities the orchestrator dispatches to.
#[derive(Clone)]
pub struct CapabilityClients {
    /// Chat completions.
    pub chat: Arc<dyn ChatCapability>,
    /// Image analysis.
    pub vision: Arc<dyn VisionCapability>,
    /// Speech synthesis.
    pub speech: Arc<dyn SpeechCapability>,
    /// Image generation.
    pub image: Arc<dyn ImageCapability>,
}

impl CapabilityClients {
    /// Route every capability to one client that implements all four.
    pub fn from_single<C>(client: Arc<C>) -> Self
    where
        C: ChatCapability + VisionCapability + SpeechCapability + ImageCapability + 'static,
    {
        Self {
            chat: client.clone(),
            vision: client.clone(),
            speech: client.clone(),
            image: client,
        }
    }
}

impl std::fmt::Debug for CapabilityClients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityClients").finish_non_exhaustive()
    }
}
