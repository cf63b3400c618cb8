// Copyright (c) 2025 - Cowboy AI, Inc.
//! Runtime configuration
//!
//! Entry points are configured through the environment:
//!
//! | Variable        | Default              |
//! |-----------------|----------------------|
//! | `ER_INPUT_FILE` | `/inputs/input.json` |
//! | `ER_OUTDIR`     | `cdktf.out`          |
//! | `ER_STACK_ID`   | `CDKTF`              |

use std::path::PathBuf;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

pub const INPUT_FILE_ENV: &str = "ER_INPUT_FILE";
pub const OUTDIR_ENV: &str = "ER_OUTDIR";
pub const STACK_ID_ENV: &str = "ER_STACK_ID";

pub const DEFAULT_INPUT_FILE: &str = "/inputs/input.json";
pub const DEFAULT_OUTDIR: &str = "cdktf.out";
pub const DEFAULT_STACK_ID: &str = "CDKTF";

/// Where to read input from and where to write synthesized stacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub input_file: PathBuf,
    pub outdir: PathBuf,
    pub stack_id: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            outdir: PathBuf::from(DEFAULT_OUTDIR),
            stack_id: DEFAULT_STACK_ID.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            input_file: lookup(INPUT_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.input_file),
            outdir: lookup(OUTDIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.outdir),
            stack_id: lookup(STACK_ID_ENV).unwrap_or(defaults.stack_id),
        }
    }
}

/// Log filter for entry points: `RUST_LOG` or INFO, with AWS SDK internals
/// kept at ERROR
pub fn log_filter() -> EnvFilter {
    let mut filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    for directive in [
        "aws_config=error",
        "aws_smithy_runtime=error",
        "aws_sdk_ec2=error",
        "aws_sdk_elasticache=error",
    ] {
        if let Ok(directive) = directive.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Install the global tracing subscriber
pub fn init_tracing() {
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();
}
