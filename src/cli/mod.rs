use clap::Parser;
use std::path::PathBuf;

/// Journaling server with LLM-assisted entry analysis
#[derive(Parser, Debug)]
#[clap(name = "wellspring", about = "Journaling server with LLM-assisted entry analysis")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Address to bind the HTTP server to (overrides WELLSPRING_ADDR)
    #[clap(short, long)]
    pub addr: Option<String>,

    /// Path to the SQLite database file (overrides WELLSPRING_DB)
    #[clap(long)]
    pub db: Option<PathBuf>,

    /// Print verbose output
    #[clap(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
