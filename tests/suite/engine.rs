//! Hybrid engine behaviour over whole runs

use lbox_engine::{EngineOptions, HybridEngine, Mode, Outcome, Phase, Recorder, StepLimit};
use num_bigint::BigUint;

use crate::common::{record, seed, text_trace};

#[test]
fn demo_trace_matches_fixture() {
    let (result, recorder) = record(&seed(10_031_980), EngineOptions::default());
    assert_eq!(result.outcome, Outcome::Stabilized);
    assert_eq!(result.steps_taken, 9);
    insta::assert_snapshot!(text_trace(&recorder), @r"
Step 1: [TRUNCATION] -> 2507995
Step 2: [L-BOX A] -> 8174
Step 3: [TRUNCATION] -> 4087
Step 4: [L-BOX A] -> 1366
Step 5: [TRUNCATION] -> 683
Step 6: [L-BOX A] -> 62
Step 7: [TRUNCATION] -> 31
Step 8: [L-BOX A] -> 21
           [TERNARY +1] -> 64
Step 9: [TRUNCATION] -> 1
");
}

#[test]
fn revisited_value_switches_to_mode_b() {
    let (result, recorder) = record(&seed(25), EngineOptions::default());
    assert!(result.is_stabilized());
    assert_eq!(result.steps_taken, 8);

    let packing: Vec<_> = recorder
        .records()
        .iter()
        .filter_map(|r| r.phase.mode().map(|mode| (r.step, mode)))
        .collect();
    assert_eq!(
        packing,
        [(1, Mode::A), (3, Mode::A), (5, Mode::B), (7, Mode::A)]
    );
}

#[test]
fn already_stable_start_takes_no_steps() {
    let (result, recorder) = record(&seed(1), EngineOptions::default());
    assert!(result.is_stabilized());
    assert_eq!(result.steps_taken, 0);
    assert!(recorder.records().is_empty());
}

#[test]
fn power_of_two_truncates_once() {
    let (result, recorder) = record(&seed(8), EngineOptions::default());
    assert_eq!(result.steps_taken, 1);
    assert_eq!(text_trace(&recorder), "Step 1: [TRUNCATION] -> 1");
}

#[test]
fn unseen_cycle_runs_to_the_limit() {
    // 5 -> 3 -> 10 -> 5 never packs the same value twice under mode A.
    let limit = StepLimit::new(30).unwrap();
    let (result, recorder) = record(&seed(5), EngineOptions::default().with_limit(limit));
    assert_eq!(result.outcome, Outcome::Halted);
    assert_eq!(result.steps_taken, 30);
    assert_eq!(result.final_value, BigUint::from(5u32));
    assert!(recorder.packed_values().all(|v| *v == BigUint::from(3u32)));
}

#[test]
fn default_limit_halts_the_cycle() {
    let mut engine = HybridEngine::new(&seed(5), EngineOptions::default());
    let result = engine.clone().run(&mut lbox_engine::NullObserver);
    assert!(result.is_halted());
    assert_eq!(result.steps_taken, StepLimit::DEFAULT);

    // Stepping by hand reaches the same state.
    while engine.step(&mut lbox_engine::NullObserver) {}
    assert_eq!(engine.result(), Some(result));
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn every_step_starts_with_truncation_or_packing() {
    let (_, recorder) = record(&seed(10_031_980), EngineOptions::default().with_paradox(true));
    let mut last_step = 0;
    for r in recorder.records() {
        if r.phase.opens_step() {
            assert_eq!(r.step, last_step + 1);
            last_step = r.step;
        } else {
            assert_eq!(r.phase, Phase::TernaryGrowth);
            assert_eq!(r.step, last_step);
        }
    }
    assert_eq!(last_step, 15);
}

#[test]
fn paradox_changes_the_path() {
    let (plain, _) = record(&seed(10_031_980), EngineOptions::default());
    let (paradox, recorder) =
        record(&seed(10_031_980), EngineOptions::default().with_paradox(true));
    assert_ne!(plain.steps_taken, paradox.steps_taken);
    assert_eq!(
        recorder.labelled_values()[..3],
        [
            ("TRUNCATION".to_string(), "2507995".to_string()),
            ("L-BOX AI_PARADOX".to_string(), "112342".to_string()),
            ("TRUNCATION".to_string(), "56171".to_string()),
        ]
    );
}

#[test]
fn huge_seed_from_power_notation() {
    let start = "3^40".parse().unwrap();
    let (result, _) = record(&start, EngineOptions::default());
    assert!(result.is_stabilized());
    assert_eq!(result.steps_taken, 14);
}

#[test]
fn closure_observer_sees_the_same_records() {
    let mut seen = Vec::new();
    let result = HybridEngine::new(&seed(25), EngineOptions::default())
        .run(&mut |r: &lbox_engine::StepRecord| seen.push(r.clone()));

    let (expected, recorder): (_, Recorder) = record(&seed(25), EngineOptions::default());
    assert_eq!(result, expected);
    assert_eq!(seen, recorder.into_records());
}
