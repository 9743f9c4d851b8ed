//! Exhaustive invariant check: trace every target of the domain and verify
//! termination, correctness and narrowing for each trial.

use crate::domain::Target;
use crate::guesser::{Trial, MAX_ATTEMPTS};
use crate::strategy::Prober;
use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvariantSummary {
    pub strategy: String,
    pub seed: u64,
    pub targets_checked: u32,
    pub worst_attempts: u32,
    pub worst_target: u32,
}

pub fn check_invariants<S: Prober + ?Sized>(strategy: &S, seed: u64) -> Result<InvariantSummary> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut summary = InvariantSummary {
        strategy: strategy.name().to_string(),
        seed,
        targets_checked: 0,
        worst_attempts: 0,
        worst_target: Target::MIN,
    };

    for target in Target::all() {
        let trial = strategy.trace(target, &mut rng);
        check_trial(&trial).with_context(|| {
            format!(
                "strategy '{}' broke an invariant (target {}, seed {})",
                strategy.name(),
                target,
                seed
            )
        })?;
        summary.targets_checked += 1;
        if trial.attempts > summary.worst_attempts {
            summary.worst_attempts = trial.attempts;
            summary.worst_target = target.get();
        }
    }

    tracing::info!(
        strategy = strategy.name(),
        seed,
        targets = summary.targets_checked,
        worst_attempts = summary.worst_attempts,
        "invariants held"
    );
    Ok(summary)
}

pub fn check_trial(trial: &Trial) -> Result<()> {
    let target = trial.target.get();

    if trial.attempts == 0 || trial.attempts > MAX_ATTEMPTS {
        bail!(
            "Invariant Broken: {} attempts (allowed 1..={})",
            trial.attempts,
            MAX_ATTEMPTS
        );
    }
    if trial.attempts as usize != trial.steps.len() {
        bail!(
            "Invariant Broken: attempt count {} does not match {} recorded probes",
            trial.attempts,
            trial.steps.len()
        );
    }

    for (i, step) in trial.steps.iter().enumerate() {
        if step.bounds.is_empty() || !step.bounds.contains(target) {
            bail!(
                "Invariant Broken: step {} bounds [{}, {}] lost the target",
                i,
                step.bounds.low,
                step.bounds.high
            );
        }
        if !step.bounds.contains(step.probe) {
            bail!(
                "Invariant Broken: step {} probed {} outside [{}, {}]",
                i,
                step.probe,
                step.bounds.low,
                step.bounds.high
            );
        }
    }

    for (i, pair) in trial.steps.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.bounds.len() >= prev.bounds.len() || next.bounds.contains(prev.probe) {
            bail!(
                "Invariant Broken: bounds did not narrow after step {} ([{}, {}] -> [{}, {}])",
                i,
                prev.bounds.low,
                prev.bounds.high,
                next.bounds.low,
                next.bounds.high
            );
        }
    }

    if trial.last_probe() != Some(target) {
        bail!(
            "Invariant Broken: final probe {:?} is not the target {}",
            trial.last_probe(),
            target
        );
    }

    Ok(())
}
