/*!
# Wellspring - Journaling Server

Wellspring serves a JSON HTTP API for journal entries, metrics, and habits.
Journal entries are enriched with analysis from a local Ollama service when
it is reachable, and stored without analysis when it is not.

This file contains the main application flow, coordinating configuration,
storage, the analysis client, and the HTTP server.

## Usage

```text
wellspring [OPTIONS]

Options:
  -a, --addr <ADDR>  Address to bind the HTTP server to (overrides WELLSPRING_ADDR)
      --db <DB>      Path to the SQLite database file (overrides WELLSPRING_DB)
  -v, --verbose      Print verbose output
  -h, --help         Print help information
  -V, --version      Print version information
```

## Configuration

The application can be configured with the following environment variables:
- `WELLSPRING_DB`: SQLite database file (defaults to ./wellspring.db)
- `WELLSPRING_ADDR`: HTTP bind address (defaults to 127.0.0.1:3001)
- `WELLSPRING_OLLAMA_URL`: Ollama base URL (defaults to http://127.0.0.1:11434)
- `WELLSPRING_MODEL`: Analysis model name (defaults to "llama2")
- `WELLSPRING_AI_TIMEOUT_SECS`: Analysis request deadline (defaults to 30)
- `WELLSPRING_MAX_ENTRY_LEN`: Maximum entry length in characters (defaults to 10000)
*/

use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wellspring::ai::OllamaClient;
use wellspring::api::{self, AppState};
use wellspring::cli::CliArgs;
use wellspring::config::Config;
use wellspring::db::Database;
use wellspring::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments
    let args = CliArgs::parse();

    // Initialize tracing; RUST_LOG takes precedence over --verbose.
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting wellspring");
    debug!("CLI arguments: {:?}", args);

    // Load and validate configuration, with CLI overrides applied first
    info!("Loading configuration");
    let mut config = Config::load()?;
    if let Some(addr) = args.addr {
        config.bind_addr = addr;
    }
    if let Some(db_path) = args.db {
        config.db_path = db_path;
    }
    config.validate()?;

    // Open the store and make sure the schema exists
    debug!("Database file: {:?}", config.db_path);
    let db = Database::open(&config.db_path)?;
    db.initialize_schema()?;

    // Analysis client; creation never contacts the service
    let analysis = OllamaClient::new(
        &config.ollama_url,
        &config.analysis_model,
        config.ai_timeout,
    )?;
    debug!(
        "Analysis service: {} (model {})",
        config.ollama_url, config.analysis_model
    );

    let state = Arc::new(AppState {
        db,
        analysis,
        max_entry_len: config.max_entry_len,
    });

    api::serve(state, &config.bind_addr).await
}
