// Copyright (c) 2025 - Cowboy AI, Inc.
//! Elasticache Stack Synthesizer
//!
//! Reads the input document, validates it and writes the Terraform JSON stack.
//!
//! Run with: cargo run --bin er-elasticache
//!
//! Environment:
//! - `ER_INPUT_FILE`: input document (default `/inputs/input.json`)
//! - `ER_OUTDIR`: output directory (default `cdktf.out`)
//! - `ER_STACK_ID`: stack id (default `CDKTF`)

use anyhow::{Context, Result};
use er_aws_elasticache::{config, synthesize, write_stack, AppInterfaceInput, RuntimeConfig};
use tracing::info;

fn main() -> Result<()> {
    config::init_tracing();

    let config = RuntimeConfig::from_env();
    info!("📋 Configuration loaded:");
    info!("  - Input: {}", config.input_file.display());
    info!("  - Outdir: {}", config.outdir.display());
    info!("  - Stack: {}", config.stack_id);

    let input = AppInterfaceInput::from_file(&config.input_file)
        .with_context(|| format!("Failed to load {}", config.input_file.display()))?;

    let document = synthesize(&input);
    let path = write_stack(&document, &config.outdir, &config.stack_id)
        .context("Failed to write stack")?;

    info!("✅ Synthesized {}", path.display());
    Ok(())
}
