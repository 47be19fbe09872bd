//! Resolution of run settings from flags, config file and defaults.
//!
//! Precedence: command line > config file > built-in defaults.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use lbox_config::LboxConfig;
use lbox_engine::{EngineOptions, TraceFormat};
use lbox_types::{Seed, StepLimit};

pub(crate) const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Parser)]
#[command(
    name = "lbox",
    version,
    about = "Drive a value through binary truncation, bit-pair packing and ternary growth"
)]
pub(crate) struct Cli {
    /// Start value: a decimal integer or a power such as 3^40.
    /// Defaults to the configured seed, then 10031980.
    pub(crate) value: Option<Seed>,

    /// Step budget. The run halts when it is exhausted.
    #[arg(short = 'n', long)]
    pub(crate) max_steps: Option<StepLimit>,

    /// Pack unseen values with AI_PARADOX instead of A.
    #[arg(long)]
    pub(crate) paradox: bool,

    /// Trace output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,

    /// Print only the final status.
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for TraceFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => TraceFormat::Text,
            OutputFormat::Json => TraceFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunSettings {
    pub(crate) seed: Seed,
    pub(crate) options: EngineOptions,
    pub(crate) format: OutputFormat,
    pub(crate) quiet: bool,
}

impl RunSettings {
    pub(crate) fn resolve(cli: Cli, config: Option<&LboxConfig>) -> Result<Self> {
        let seed = match cli.value {
            Some(seed) => seed,
            None => config
                .map(LboxConfig::seed)
                .transpose()
                .context("invalid config")?
                .flatten()
                .unwrap_or_else(Seed::demo),
        };

        let limit = match cli.max_steps {
            Some(limit) => limit,
            None => config
                .map(LboxConfig::step_limit)
                .transpose()
                .context("invalid config")?
                .flatten()
                .unwrap_or_default(),
        };

        let paradox = cli.paradox || config.is_some_and(LboxConfig::paradox);

        Ok(Self {
            seed,
            options: EngineOptions::default()
                .with_limit(limit)
                .with_paradox(paradox),
            format: cli.format,
            quiet: cli.quiet,
        })
    }
}

/// Log filter directive when `RUST_LOG` is unset.
pub(crate) fn log_level(config: Option<&LboxConfig>) -> &str {
    config
        .and_then(LboxConfig::log_level)
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
