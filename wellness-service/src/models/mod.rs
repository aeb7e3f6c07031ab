//! Request and response shapes for the wellness API.
//!
//! Every value here lives for a single request/response cycle.

pub mod chat;
pub mod journal;
pub mod tips;

pub use chat::{ChatRequest, ChatResponse};
pub use journal::{JournalReflection, JournalRequest, JournalResponse};
pub use tips::Tips;

/// Top-level `error` text used when the provider call fails.
pub const PROVIDER_ERROR_MESSAGE: &str = "Gemini API error";
