//! L-Box CLI - binary entry point.
//!
//! # Flow
//!
//! ```text
//! main() -> LboxConfig::load() -> init_tracing() -> RunSettings::resolve()
//!                                                          |
//!                                                          v
//!                         HybridEngine::run(TraceWriter<stdout>) -> status line
//! ```
//!
//! Stdout carries only the banner, the trace and the final status. Logs go
//! to stderr, filtered by `RUST_LOG` or the config `[log] level`.

mod settings;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use lbox_config::LboxConfig;
use lbox_engine::{HybridEngine, NullObserver, TerminationResult, TraceWriter};

use settings::{Cli, OutputFormat, RunSettings, log_level};

fn init_tracing(config: Option<&LboxConfig>) {
    let level = log_level(config);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(settings::DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = LboxConfig::load().context("failed to load config")?;
    init_tracing(config.as_ref());
    if let Some(path) = lbox_config::config_path()
        && config.is_some()
    {
        tracing::info!(path = %path.display(), "Using config file");
    }

    let settings = RunSettings::resolve(cli, config.as_ref())?;

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    execute(&settings, out).context("failed to write output")?;
    Ok(())
}

/// Run the engine and write banner, trace and status to `out`.
fn execute<W: Write>(settings: &RunSettings, mut out: W) -> io::Result<TerminationResult> {
    let engine = HybridEngine::new(&settings.seed, settings.options);

    if settings.format == OutputFormat::Text && !settings.quiet {
        writeln!(out, "--- STARTING L-BOX ENGINE WITH: {} ---", settings.seed)?;
    }

    let (result, mut out) = if settings.quiet {
        (engine.run(&mut NullObserver), out)
    } else {
        let mut writer = TraceWriter::new(out, settings.format.into());
        let result = engine.run(&mut writer);
        (result, writer.finish()?)
    };

    if result.is_halted() {
        tracing::info!(last_value = %result.final_value, "Step limit reached");
    }

    match settings.format {
        OutputFormat::Text => writeln!(out, "{result}")?,
        OutputFormat::Json => {
            let line = serde_json::to_string(&result).map_err(io::Error::other)?;
            writeln!(out, "{line}")?;
        }
    }
    out.flush()?;
    Ok(result)
}
