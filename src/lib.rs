/*!
# Wellspring

Wellspring is a small journaling server. It records free-text journal
entries, numeric metrics, and boolean habits, and enriches each journal
entry with a textual analysis generated by a local LLM (Ollama).

## Core Features

- Journal entries with automatic, best-effort analysis: the entry is stored
  whether or not the analysis service answers
- Metric tracking (named numeric measurements)
- Habit tracking with a completed-flag toggle
- JSON HTTP API backed by SQLite

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `api`: HTTP routing, request/response shapes, error-to-status mapping
- `ops`: validation and orchestration, including the analyzed write path
- `ai`: single-shot Ollama client with an explicit deadline
- `db`: SQLite storage behind a connection pool
- `config`: configuration loading and validation
- `errors`: error handling infrastructure

## Usage Example

```rust,no_run
use std::sync::Arc;
use wellspring::api::{self, AppState};
use wellspring::ai::OllamaClient;
use wellspring::db::Database;
use wellspring::Config;

#[tokio::main]
async fn main() -> wellspring::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let db = Database::open(&config.db_path)?;
    db.initialize_schema()?;

    let analysis = OllamaClient::new(
        &config.ollama_url,
        &config.analysis_model,
        config.ai_timeout,
    )?;

    let state = Arc::new(AppState {
        db,
        analysis,
        max_entry_len: config.max_entry_len,
    });
    api::serve(state, &config.bind_addr).await
}
```
*/

/// Entry analysis via a local Ollama service
pub mod ai;
/// HTTP API surface
pub mod api;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized constants and defaults
pub mod constants;
/// SQLite storage for entries, metrics, and habits
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Validation and orchestration on top of the store
pub mod ops;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
