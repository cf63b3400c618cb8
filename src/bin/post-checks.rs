// Copyright (c) 2025 - Cowboy AI, Inc.
//! Post-apply checks
//!
//! Run with: cargo run --bin post-checks -- <outputs.json>

use anyhow::{Context, Result};
use er_aws_elasticache::{config, post_checks};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> Result<ExitCode> {
    config::init_tracing();
    info!("Running post checks ...");

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        error!("Usage: post-checks <output_json>");
        return Ok(ExitCode::FAILURE);
    }

    let passed = post_checks::check_file(&args[1])
        .with_context(|| format!("Failed to read outputs from {}", args[1]))?;
    if !passed {
        return Ok(ExitCode::FAILURE);
    }

    info!("Post checks completed.");
    Ok(ExitCode::SUCCESS)
}
