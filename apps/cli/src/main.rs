//! # Daxie CLI
//!
//! Command-line front end for the financial-numeral converter.
//!
//! ```text
//! $ daxie 123.45
//! 壹佰贰拾叁元肆角伍分
//!
//! $ daxie -- -1.23
//! error: negative amounts cannot be converted: "-1.23"   (exit code 1)
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use daxie_core::{convert, CachedConverter};

/// Convert a decimal amount to Chinese uppercase (financial) numerals.
#[derive(Debug, Parser)]
#[command(name = "daxie", version, about)]
struct Args {
    /// Decimal amount to convert (e.g. 123.45). Fractions beyond two
    /// digits are truncated, never rounded.
    amount: String,

    /// Bypass the precomputation/memoization layer.
    ///
    /// Output is identical either way; this exists for comparing the two
    /// paths and for one-shot invocations where building the 10,000-entry
    /// group table is not worth it.
    #[arg(long)]
    uncached: bool,
}

fn main() -> ExitCode {
    // Quiet by default; RUST_LOG=debug shows which path ran.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .init();

    let args = Args::parse();

    let result = if args.uncached {
        debug!("converting via the plain pipeline");
        convert(&args.amount)
    } else {
        debug!("converting via the cached pipeline");
        CachedConverter::new().convert(&args.amount)
    };

    match result {
        Ok(rendering) => {
            println!("{rendering}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
