//! Constants used throughout the application.
//!
//! This module contains all constants used in the wellspring application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "wellspring";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "Journaling server with LLM-assisted entry analysis, metrics, and habit tracking";

// Configuration Keys & Environment Variables
/// Environment variable for the SQLite database file path.
pub const ENV_VAR_DB: &str = "WELLSPRING_DB";
/// Environment variable for the HTTP bind address.
pub const ENV_VAR_ADDR: &str = "WELLSPRING_ADDR";
/// Environment variable for the base URL of the Ollama analysis service.
pub const ENV_VAR_OLLAMA_URL: &str = "WELLSPRING_OLLAMA_URL";
/// Environment variable for the analysis model name.
pub const ENV_VAR_MODEL: &str = "WELLSPRING_MODEL";
/// Environment variable for the analysis request deadline, in seconds.
pub const ENV_VAR_AI_TIMEOUT_SECS: &str = "WELLSPRING_AI_TIMEOUT_SECS";
/// Environment variable for the maximum journal entry length, in characters.
pub const ENV_VAR_MAX_ENTRY_LEN: &str = "WELLSPRING_MAX_ENTRY_LEN";

// Defaults
/// Default SQLite database file, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "wellspring.db";
/// Default HTTP bind address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";
/// Default base URL of the local Ollama service.
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
/// Default model used for entry analysis.
pub const DEFAULT_ANALYSIS_MODEL: &str = "llama2";
/// Default upper bound on how long a single analysis request may take.
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;
/// Default maximum journal entry length, in characters.
pub const DEFAULT_MAX_ENTRY_LEN: usize = 10_000;

// Database Parameters
/// How long a pooled connection waits on a locked database before giving up.
pub const DB_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Maximum number of pooled SQLite connections.
pub const DB_POOL_SIZE: u32 = 5;
