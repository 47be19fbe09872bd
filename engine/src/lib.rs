//! Hybrid transformation engine for L-Box.
//!
//! # Architecture
//!
//! ```text
//! Seed -> HybridEngine::new(seed, options) -> step()* -> TerminationResult
//!                      |
//!                      v
//!        Observer::on_step(StepRecord)   (trace sink, never feeds back)
//! ```
//!
//! Each step inspects the binary form of the current value:
//!
//! 1. Trailing zeros: truncation (divide out the power of two)
//! 2. Odd: mode selection from history, bit-pair packing, then ternary
//!    growth when the packed value is odd and above one
//!
//! The engine owns all run state. Independent runs share nothing.

mod hybrid;
mod observer;
mod outcome;
mod phase;

pub use hybrid::{EngineOptions, HybridEngine, run};
pub use observer::{NullObserver, Observer, Recorder, StepRecord, TraceFormat, TraceWriter};
pub use outcome::{Outcome, TerminationResult};
pub use phase::Phase;

pub use lbox_types::{BigUint, Mode, Seed, StepLimit};
