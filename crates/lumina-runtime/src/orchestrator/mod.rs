//! Session orchestration: intent routing and the per-mode handlers.

pub mod handlers;
#[allow(clippy::module_inception)]
pub mod orchestrator;


pub use handlers::talisman_caption;
pub use orchestrator::Orchestrator;
