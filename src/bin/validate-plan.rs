// Copyright (c) 2025 - Cowboy AI, Inc.
//! Elasticache Plan Validator
//!
//! Validates a `terraform show -json` plan against live AWS state before apply.
//!
//! Run with: cargo run --bin validate-plan -- <plan.json>
//!
//! Exits 1 and logs every finding when the plan is not safe to apply.

use anyhow::{bail, Context, Result};
use er_aws_elasticache::{
    config, inventory::AwsInventory, AppInterfaceInput, Plan, PlanValidator, RuntimeConfig,
};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    config::init_tracing();

    let Some(plan_path) = std::env::args().nth(1) else {
        bail!("Usage: validate-plan <plan.json>");
    };

    let config = RuntimeConfig::from_env();
    let input = AppInterfaceInput::from_file(&config.input_file)
        .with_context(|| format!("Failed to load {}", config.input_file.display()))?;

    info!("Running Elasticache terraform plan validation");
    let plan = Plan::from_file(&plan_path)
        .with_context(|| format!("Failed to load plan {}", plan_path))?;

    let inventory = AwsInventory::new(input.data.region.clone()).await;
    let report = PlanValidator::new(&plan, &input.data, &inventory)
        .validate()
        .await
        .context("Plan validation aborted")?;

    if !report.is_clean() {
        for finding in report.findings() {
            error!("{}", finding);
        }
        error!("❌ Validation failed with {} error(s)", report.findings().len());
        return Ok(ExitCode::FAILURE);
    }

    info!("✅ Validation ended successfully");
    Ok(ExitCode::SUCCESS)
}
