//! Google Gemini implementation of the text generator.
//!
//! Calls the `generateContent` endpoint with the API key as a query
//! parameter and concatenates the text parts of the first candidate. The
//! response is treated as untrusted free text - all structure is imposed
//! downstream by the insight pipeline's defensive parser.

use super::TextGenerator;
use crate::errors::{Error, Result};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model, overridable through configuration.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

const MAX_OUTPUT_TOKENS: u32 = 800;
const TEMPERATURE: f64 = 0.7;

/// Text generation client backed by the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Creates a client for the given API key and model.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Ai {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Overrides the API base URL (for tests against a local stub).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl TextGenerator for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            }
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Ai {
                message: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read response body".to_string());
            return Err(Error::Ai {
                message: format!("HTTP {status}: {text}"),
            });
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(|e| Error::Ai {
                message: format!("unexpected response payload: {e}"),
            })?;

        let Some(candidate) = parsed.candidates.into_iter().next() else {
            return Err(Error::Ai {
                message: "response contained no candidates".to_string(),
            });
        };

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(Error::Ai {
                message: "candidate contained no text".to_string(),
            });
        }

        Ok(text)
    }
}
