//! OpenAI-compatible chat completion narrator
//!
//! Response parsing is always available so the failure mapping can be
//! tested offline. The HTTP client needs the `llm` feature.

#[cfg(feature = "llm")]
mod client;
mod response;

#[cfg(feature = "llm")]
pub use client::OpenAiNarrator;
pub use response::{chat_request, parse_chat_completion, status_error};
