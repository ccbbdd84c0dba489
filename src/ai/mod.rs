//! Entry analysis via a local Ollama service.
//!
//! # Module Structure
//!
//! - `ollama`: HTTP client for the Ollama generate API
//! - `prompts`: Prompt builder for entry analysis
//!
//! The client is a single-shot adapter: one bounded outbound call per
//! invocation, no retries, no caching. Whether a failure matters is decided
//! by the caller — the journal write path treats analysis as best-effort.

pub mod ollama;
pub mod prompts;

// Re-export commonly used types
pub use ollama::OllamaClient;
