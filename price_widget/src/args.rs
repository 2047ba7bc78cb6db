//! Command-line arguments for the price widget.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use price_common::net::DEXSCREENER_PAIRS_URL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Pair address to look up at start-up. Used verbatim, without validation.
    #[clap(long)]
    pub pair_address: String,

    /// Pairs endpoint of the price service.
    #[clap(long, default_value = DEXSCREENER_PAIRS_URL)]
    pub api_url: String,

    /// Keep running and read addresses from stdin. An empty line re-fetches
    /// the current address, `q` quits.
    #[clap(long)]
    pub interactive: bool,

    /// Request timeout in seconds. Requests wait indefinitely when omitted.
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}

/// Trim whitespace and one pair of matching quotes from a CLI value.
pub fn normalize_value(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}
