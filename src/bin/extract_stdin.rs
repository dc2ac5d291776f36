//! Simple CLI that reads HTML from stdin and writes the extraction result
//! as JSON to stdout.
//!
//! Diagnostics go to stderr; set `RUST_LOG=rs_readability=debug` to see
//! the candidate scores.

use std::io;
use std::process::ExitCode;

use rs_readability::extract;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let result = match extract(io::stdin().lock()) {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(error = %err, "extraction failed");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize result");
            ExitCode::FAILURE
        }
    }
}
