//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use lbox_engine::{EngineOptions, HybridEngine, Recorder, TerminationResult, TraceFormat, TraceWriter};
use lbox_types::Seed;
use num_bigint::BigUint;

pub fn seed(n: u64) -> Seed {
    Seed::new(BigUint::from(n)).expect("test seeds are positive")
}

/// Run to termination, capturing every record.
pub fn record(start: &Seed, options: EngineOptions) -> (TerminationResult, Recorder) {
    let mut recorder = Recorder::new();
    let result = HybridEngine::new(start, options).run(&mut recorder);
    (result, recorder)
}

/// Render a recorded run as the text trace, one line per record.
pub fn text_trace(recorder: &Recorder) -> String {
    recorder
        .records()
        .iter()
        .map(|r| TraceWriter::<Vec<u8>>::render(r, TraceFormat::Text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the `lbox` binary with an isolated config path and logging off.
pub fn lbox(args: &[&str], config: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lbox"))
        .args(args)
        .env("LBOX_CONFIG", config)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to spawn lbox")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}
