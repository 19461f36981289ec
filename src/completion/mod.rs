//! Completion service boundary
//!
//! Every call to the language model goes through the `Completion` trait so
//! the session logic can be exercised against a scripted client in tests.

pub(crate) mod openai;
pub(crate) mod types;

use crate::error::CompletionError;

pub(crate) use openai::OpenAiClient;
pub(crate) use types::{ChatMessage, CompletionRequest};

/// One synchronous request/response exchange with a chat completion backend
pub(crate) trait Completion {
    /// Human-readable backend name for logs
    fn name(&self) -> &'static str;

    /// Send the request and return the raw completion text
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

/// Box type for dynamic dispatch
pub(crate) type BoxedCompletion = Box<dyn Completion>;
