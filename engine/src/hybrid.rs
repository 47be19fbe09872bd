//! The hybrid transformation driver.

use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::One;

use lbox_types::{Mode, Seed, StepLimit, to_binary_digits, to_ternary_digits};

use crate::observer::{Observer, StepRecord};
use crate::outcome::TerminationResult;
use crate::phase::Phase;

/// Run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    pub limit: StepLimit,
    /// Pack with AI_PARADOX instead of A when a value has not been seen.
    pub paradox: bool,
}

impl EngineOptions {
    #[must_use]
    pub fn with_limit(mut self, limit: StepLimit) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_paradox(mut self, paradox: bool) -> Self {
        self.paradox = paradox;
        self
    }

    /// Mode used for values not yet in history.
    #[must_use]
    pub const fn base_mode(&self) -> Mode {
        if self.paradox { Mode::AiParadox } else { Mode::A }
    }
}

/// Iterative driver over a single start value.
///
/// # Invariants
///
/// - `x >= 1` at all times (every phase maps a positive value to a positive value)
/// - `history` holds only values produced by packing, never by truncation
///   or ternary growth, and is never pruned
/// - `steps <= options.limit`
#[derive(Debug, Clone)]
pub struct HybridEngine {
    x: BigUint,
    steps: u64,
    history: HashSet<BigUint>,
    options: EngineOptions,
}

impl HybridEngine {
    #[must_use]
    pub fn new(seed: &Seed, options: EngineOptions) -> Self {
        Self {
            x: seed.value().clone(),
            steps: 0,
            history: HashSet::new(),
            options,
        }
    }

    #[must_use]
    pub fn value(&self) -> &BigUint {
        &self.x
    }

    #[must_use]
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn has_visited(&self, value: &BigUint) -> bool {
        self.history.contains(value)
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.x <= BigUint::one() || self.steps >= self.options.limit.get()
    }

    /// `Some` once the run has terminated.
    #[must_use]
    pub fn result(&self) -> Option<TerminationResult> {
        self.is_finished()
            .then(|| TerminationResult::new(self.x.clone(), self.steps))
    }

    /// Mode the next packing phase would use for the current value.
    #[must_use]
    pub fn select_mode(&self) -> Mode {
        if self.history.contains(&self.x) {
            Mode::B
        } else {
            self.options.base_mode()
        }
    }

    /// Advance one step. Returns `false` without doing anything once finished.
    pub fn step<O>(&mut self, observer: &mut O) -> bool
    where
        O: Observer + ?Sized,
    {
        if self.is_finished() {
            return false;
        }

        let step = self.steps + 1;
        let binary = to_binary_digits(&self.x);

        if binary.ends_with_zero() {
            self.x = binary.trim_trailing_zeros().value();
            self.emit(observer, step, Phase::Truncation);
        } else {
            let mode = self.select_mode();
            let packed = binary.pack(mode);
            self.x = packed.value();
            self.history.insert(self.x.clone());
            self.emit(observer, step, Phase::Packing { mode });

            if self.x > BigUint::one() && !packed.ends_with_zero() {
                self.x = to_ternary_digits(&self.x).with_trailing_one().value();
                self.emit(observer, step, Phase::TernaryGrowth);
            }
        }

        self.steps = step;
        true
    }

    /// Step until the value is 1 or the limit is reached.
    pub fn run<O>(mut self, observer: &mut O) -> TerminationResult
    where
        O: Observer + ?Sized,
    {
        tracing::info!(
            start = %self.x,
            limit = self.options.limit.get(),
            base_mode = %self.options.base_mode(),
            "Starting run"
        );

        while self.step(observer) {}

        let result = TerminationResult::new(self.x, self.steps);
        tracing::info!(
            outcome = ?result.outcome,
            steps = result.steps_taken,
            history = self.history.len(),
            "Run finished"
        );
        result
    }

    fn emit<O>(&self, observer: &mut O, step: u64, phase: Phase)
    where
        O: Observer + ?Sized,
    {
        tracing::debug!(step, phase = %phase, value = %self.x, "Phase applied");
        let record = StepRecord {
            step,
            phase,
            value: self.x.clone(),
        };
        observer.on_step(&record);
    }
}

/// Run `seed` to termination with the default base mode.
pub fn run<O>(seed: &Seed, limit: StepLimit, observer: &mut O) -> TerminationResult
where
    O: Observer + ?Sized,
{
    HybridEngine::new(seed, EngineOptions::default().with_limit(limit)).run(observer)
}
