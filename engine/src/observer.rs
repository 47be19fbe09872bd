//! Step trace sinks.
//!
//! Observers receive one [`StepRecord`] per phase executed, in order. They
//! are informational only: nothing an observer does can change the run.

use std::io::{self, Write};

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

use crate::phase::Phase;

/// One executed phase and the value it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 1-based index of the step this phase belongs to.
    pub step: u64,
    #[serde(flatten)]
    pub phase: Phase,
    #[serde(serialize_with = "serialize_decimal")]
    pub value: BigUint,
}

pub(crate) fn serialize_decimal<S: Serializer>(
    value: &BigUint,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub trait Observer {
    fn on_step(&mut self, record: &StepRecord);
}

impl<F> Observer for F
where
    F: FnMut(&StepRecord),
{
    fn on_step(&mut self, record: &StepRecord) {
        self(record);
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn on_step(&mut self, _record: &StepRecord) {}
}

/// Captures records in memory for inspection or replay.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    records: Vec<StepRecord>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<StepRecord> {
        self.records
    }

    /// `(label, value)` pairs in emission order.
    #[must_use]
    pub fn labelled_values(&self) -> Vec<(String, String)> {
        self.records
            .iter()
            .map(|r| (r.phase.label(), r.value.to_string()))
            .collect()
    }

    /// Values produced by packing phases, in order.
    pub fn packed_values(&self) -> impl Iterator<Item = &BigUint> {
        self.records
            .iter()
            .filter(|r| matches!(r.phase, Phase::Packing { .. }))
            .map(|r| &r.value)
    }
}

impl Observer for Recorder {
    fn on_step(&mut self, record: &StepRecord) {
        self.records.push(record.clone());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceFormat {
    /// `Step N: [LABEL] -> value`, growth lines indented under their step.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

/// A record that failed to serialize still yields one valid JSON line.
fn json_error_line(step: u64, message: &str) -> String {
    serde_json::json!({ "step": step, "error": message }).to_string()
}

/// Indent for growth lines: lines up with the `[` of `Step N: [`.
const CONTINUATION_INDENT: &str = "           ";

/// Writes records to an `io::Write` sink.
///
/// The first write failure is kept and all later records are dropped, so a
/// closed pipe never interrupts the run. Call [`TraceWriter::finish`] to
/// surface the error.
#[derive(Debug)]
pub struct TraceWriter<W: Write> {
    out: W,
    format: TraceFormat,
    error: Option<io::Error>,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W, format: TraceFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    /// Render a record as one line, without the trailing newline.
    #[must_use]
    pub fn render(record: &StepRecord, format: TraceFormat) -> String {
        match format {
            TraceFormat::Text if record.phase.opens_step() => {
                format!("Step {}: [{}] -> {}", record.step, record.phase, record.value)
            }
            TraceFormat::Text => {
                format!("{CONTINUATION_INDENT}[{}] -> {}", record.phase, record.value)
            }
            TraceFormat::Json => serde_json::to_string(record)
                .unwrap_or_else(|e| json_error_line(record.step, &e.to_string())),
        }
    }

    fn write_record(&mut self, record: &StepRecord) -> io::Result<()> {
        let line = Self::render(record, self.format);
        writeln!(self.out, "{line}")
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Observer for TraceWriter<W> {
    fn on_step(&mut self, record: &StepRecord) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_record(record) {
            tracing::warn!("Trace output failed, dropping further records: {e}");
            self.error = Some(e);
        }
    }
}
