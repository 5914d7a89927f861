// src/cli.rs
use anyhow::{Context, Result};
use std::env;

use crate::{core::args, reporting, t};

/// Entry point for the `harness-relay` binary.
///
/// Resolves the launch configuration from `std::env::args()` and prints the
/// resulting launch plan. The test-execution engine consumes the same
/// configuration through the library API; this surface only resolves and
/// reports it.
///
/// Every fatal parse condition (missing flag value, unresolvable runner
/// class, unreadable filter or allowlist file, missing `--json-config`)
/// surfaces as an `Err`, which `main` maps to exit code 1. The parser itself
/// never terminates the process.
pub async fn run(locale: &str) -> Result<()> {
    let argv: Vec<String> = env::args().skip(1).collect();
    run_with_args(&argv, locale)
}

/// Same as [`run`], but over an explicit argument slice. Split out so the
/// whole command can be driven without touching process globals.
pub fn run_with_args(argv: &[String], locale: &str) -> Result<()> {
    let config = args::parse_args(argv)
        .with_context(|| t!("parse_failed", locale = locale).to_string())?;

    reporting::console::print_launch_plan(&config, locale);
    Ok(())
}
