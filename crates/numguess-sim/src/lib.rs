//! Adaptive number-guessing simulator.
//!
//! A [`Prober`] locates a hidden [`Target`] in `[1, 100]` by narrowing a
//! pair of inclusive bounds; the [`Evaluator`] scores any [`Strategy`] over a
//! seeded batch of 1000 targets.

pub mod batch;
pub mod compare;
pub mod domain;
pub mod evaluator;
pub mod guesser;
pub mod invariants;
pub mod report;
pub mod strategy;

pub use batch::{TrialBatch, TRIAL_COUNT};
pub use compare::{compare, run_score};
pub use domain::{Attempts, SearchBounds, Target, TargetError};
pub use evaluator::{evaluate, Evaluation, Evaluator, DEFAULT_SEED};
pub use guesser::{guess, trace_seeded, ProbeStep, Trial, MAX_ATTEMPTS};
pub use invariants::{check_invariants, InvariantSummary};
pub use report::{ReportMode, ScoreReport};
pub use strategy::{
    from_fn, FnStrategy, Midpoint, Prober, RandomProbe, Strategy, StrategyKind, StrategyKindError,
};
