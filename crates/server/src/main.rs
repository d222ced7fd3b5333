//! exscript entry point.
//!
//! Rewrites one HTML document from a file argument (or stdin) and prints the
//! result to stdout. Logging goes to stderr so the rewritten HTML on stdout
//! stays clean.

use std::io::Read;

use anyhow::{Context, Result};
use exscript_core::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    tracing::info!(output = %config.output.display(), mode = ?config.mode, "starting exscript");

    let html = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        }
    };

    let rewritten = exscript_core::rewrite(&html, &config.extract_options())?;
    print!("{rewritten}");

    Ok(())
}
