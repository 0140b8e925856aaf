//! Generative-text backend abstraction.
//!
//! The insight pipeline only needs one operation: hand the backend a prompt,
//! get text back. The production implementation is [`GeminiClient`]; tests
//! substitute a scripted generator through the [`TextGenerator`] trait.

pub mod gemini;

pub use gemini::GeminiClient;

use crate::errors::Result;

/// A synchronous-from-the-caller's-view text completion backend.
#[allow(async_fn_in_trait)]
pub trait TextGenerator: Send + Sync {
    /// Sends `prompt` to the backend and returns its raw text output.
    ///
    /// May fail with a network/auth/quota error ([`crate::errors::Error::Ai`]);
    /// callers in the insight pipeline absorb that failure into canned text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
