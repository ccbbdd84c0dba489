//! Ollama HTTP client for journal entry analysis.
//!
//! This module provides a single-shot client for the Ollama generate API.
//! Each call issues exactly one outbound request with an explicit deadline;
//! retry policy, if any, belongs to the caller.

use crate::ai::prompts::analysis_prompt;
use crate::errors::{AIError, AppError, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Request body for text generation.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

/// Response from text generation.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// Client for requesting entry analysis from an Ollama endpoint.
///
/// The client performs no retries and no caching, so callers can apply one
/// policy uniformly to every failure kind.
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaClient {
    /// Creates a new Ollama client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the Ollama API (e.g., "http://127.0.0.1:11434")
    /// * `model` - Model name used for analysis (e.g., "llama2")
    /// * `timeout` - Total deadline for one request, connect through body
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build analysis HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            model: model.into(),
            client,
        })
    }

    /// Requests an analysis of the given entry text.
    ///
    /// Issues one POST to `/api/generate` and returns the model's free-text
    /// result. The returned string is never empty.
    ///
    /// # Errors
    ///
    /// - `AIError::Malformed` for empty input (no request is made), an
    ///   unparseable payload, or a response without a usable result
    /// - `AIError::Timeout` when the deadline elapses
    /// - `AIError::Unreachable` for any other transport failure or a
    ///   non-success status
    pub async fn analyze(&self, text: &str) -> Result<String, AIError> {
        if text.trim().is_empty() {
            return Err(AIError::Malformed(
                "analysis prompt cannot be empty".to_string(),
            ));
        }

        debug!("Requesting entry analysis with model: {}", self.model);

        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: analysis_prompt(text),
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?
            .error_for_status()
            .map_err(AIError::Unreachable)?;

        let generate: GenerateResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AIError::Timeout
            } else {
                AIError::Malformed(format!("failed to parse analysis response: {}", e))
            }
        })?;

        match generate.response {
            Some(text) if !text.trim().is_empty() => {
                debug!("Received analysis ({} chars)", text.len());
                Ok(text)
            }
            _ => Err(AIError::Malformed(
                "analysis response missing a usable result field".to_string(),
            )),
        }
    }
}

/// Maps a send-phase error onto the failure taxonomy: a hit deadline is
/// `Timeout`, everything else is the service being unreachable.
fn classify_transport_error(err: reqwest::Error) -> AIError {
    if err.is_timeout() {
        AIError::Timeout
    } else {
        AIError::Unreachable(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_client_creation() {
        let client =
            OllamaClient::new("http://localhost:11434", "llama2", Duration::from_secs(30)).unwrap();
        assert_eq!(client.base_url, "http://localhost:11434");
        assert_eq!(client.model, "llama2");
    }

    #[test]
    fn test_generate_request_serialization() {
        let request = GenerateRequest {
            model: "llama2".to_string(),
            prompt: "Analyze this".to_string(),
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama2");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_generate_response_tolerates_missing_field() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert!(parsed.response.is_none());
    }
}
