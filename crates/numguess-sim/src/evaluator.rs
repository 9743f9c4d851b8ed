//! Monte Carlo evaluation of a strategy over a seeded batch of targets.

use crate::batch::TrialBatch;
use crate::domain::Attempts;
use crate::strategy::Strategy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::BTreeMap;

/// Seed used whenever a caller does not pick one.
pub const DEFAULT_SEED: u64 = 1;

/// Aggregated outcome of running one strategy over one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub strategy: String,
    pub seed: u64,
    pub trials: usize,
    pub batch_fingerprint: String,
    pub total_attempts: u64,
    /// Integer mean, truncated.
    pub mean_attempts: u32,
    pub min_attempts: Attempts,
    pub max_attempts: Attempts,
    /// attempts -> number of trials that needed exactly that many.
    pub histogram: BTreeMap<Attempts, u32>,
}

impl Evaluation {
    pub fn summary_line(&self) -> String {
        format!(
            "Your algorithm guesses the number in an average of: {} attempts",
            self.mean_attempts
        )
    }
}

#[derive(Debug, Clone)]
pub struct Evaluator {
    seed: u64,
}

impl Evaluator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws the batch, then lends the same generator to the strategy for
    /// every trial, in batch order.
    pub fn run<S: Strategy + ?Sized>(&self, strategy: &S) -> Evaluation {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let batch = TrialBatch::generate(&mut rng);
        self.run_batch(strategy, &batch, &mut rng)
    }

    pub(crate) fn run_batch<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
        batch: &TrialBatch,
        rng: &mut StdRng,
    ) -> Evaluation {
        let fingerprint = batch.fingerprint();
        tracing::debug!(
            strategy = strategy.name(),
            seed = self.seed,
            trials = batch.len(),
            batch = %fingerprint,
            "evaluation started"
        );

        let mut total: u64 = 0;
        let mut min = Attempts::MAX;
        let mut max: Attempts = 0;
        let mut histogram = BTreeMap::new();

        for (i, target) in batch.iter().enumerate() {
            let attempts = strategy.guess(target, &mut *rng);
            tracing::trace!(index = i, target = target.get(), attempts, "trial finished");
            total += u64::from(attempts);
            min = min.min(attempts);
            max = max.max(attempts);
            *histogram.entry(attempts).or_insert(0) += 1;
        }

        let trials = batch.len();
        let mean = if trials == 0 {
            0
        } else {
            (total / trials as u64) as u32
        };
        if trials == 0 {
            min = 0;
        }

        tracing::debug!(
            strategy = strategy.name(),
            seed = self.seed,
            total_attempts = total,
            mean_attempts = mean,
            "evaluation finished"
        );

        Evaluation {
            strategy: strategy.name().to_string(),
            seed: self.seed,
            trials,
            batch_fingerprint: fingerprint,
            total_attempts: total,
            mean_attempts: mean,
            min_attempts: min,
            max_attempts: max,
            histogram,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Scores `strategy` under the default seed, prints the summary line and
/// returns the mean number of attempts.
pub fn evaluate<S: Strategy + ?Sized>(strategy: &S) -> u32 {
    let evaluation = Evaluator::default().run(strategy);
    println!("{}", evaluation.summary_line());
    evaluation.mean_attempts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::TRIAL_COUNT;
    use crate::strategy::{from_fn, Midpoint, RandomProbe};
    use std::cell::Cell;

    #[test]
    fn seed_one_reference_random() {
        let eval = Evaluator::new(1).run(&RandomProbe);
        assert_eq!(eval.trials, TRIAL_COUNT);
        assert_eq!(eval.total_attempts, 7436);
        assert_eq!(eval.mean_attempts, 7);
        assert_eq!(eval.max_attempts, 17);
        assert!(eval.min_attempts >= 1);
    }

    #[test]
    fn seed_one_reference_midpoint() {
        let eval = Evaluator::new(1).run(&Midpoint);
        assert_eq!(eval.total_attempts, 5793);
        assert_eq!(eval.mean_attempts, 5);
        assert_eq!(eval.max_attempts, 7);
    }

    #[test]
    fn evaluation_is_reproducible() {
        let a = Evaluator::default().run(&RandomProbe);
        let b = Evaluator::default().run(&RandomProbe);
        assert_eq!(a, b);
    }

    #[test]
    fn strategies_share_the_batch() {
        let random = Evaluator::new(42).run(&RandomProbe);
        let midpoint = Evaluator::new(42).run(&Midpoint);
        assert_eq!(random.batch_fingerprint, midpoint.batch_fingerprint);
        assert_ne!(
            random.batch_fingerprint,
            Evaluator::new(43).run(&RandomProbe).batch_fingerprint
        );
    }

    #[test]
    fn mean_is_in_empirical_band() {
        for seed in [1, 2, 3, 42, 1234] {
            let eval = Evaluator::new(seed).run(&RandomProbe);
            assert!(
                (4..=12).contains(&eval.mean_attempts),
                "seed {seed}: mean {}",
                eval.mean_attempts
            );
        }
    }

    #[test]
    fn histogram_accounts_for_every_trial() {
        let eval = Evaluator::default().run(&RandomProbe);
        let trials: u32 = eval.histogram.values().sum();
        let attempts: u64 = eval
            .histogram
            .iter()
            .map(|(a, n)| u64::from(*a) * u64::from(*n))
            .sum();
        assert_eq!(trials as usize, eval.trials);
        assert_eq!(attempts, eval.total_attempts);
    }

    #[test]
    fn summary_line_wording() {
        let eval = Evaluator::default().run(&Midpoint);
        assert_eq!(
            eval.summary_line(),
            "Your algorithm guesses the number in an average of: 5 attempts"
        );
        assert_eq!(evaluate(&Midpoint), 5);
    }

    #[test]
    fn plain_closure_can_be_scored() {
        let calls = Cell::new(0u32);
        let bisect = from_fn("bisect-fn", |target| {
            calls.set(calls.get() + 1);
            Midpoint.guess(target, &mut StdRng::seed_from_u64(0))
        });

        let eval = Evaluator::new(1).run(&bisect);
        assert_eq!(calls.get() as usize, TRIAL_COUNT);
        assert_eq!(eval.strategy, "bisect-fn");
        assert_eq!(
            eval.total_attempts,
            Evaluator::new(1).run(&Midpoint).total_attempts
        );
        assert_eq!(evaluate(&from_fn("constant", |_| 4)), 4);
    }

    #[test]
    fn empty_batch_reports_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let batch = TrialBatch::generate_len(&mut rng, 0);
        let eval = Evaluator::new(1).run_batch(&RandomProbe, &batch, &mut rng);
        assert_eq!(eval.mean_attempts, 0);
        assert_eq!(eval.min_attempts, 0);
        assert!(eval.histogram.is_empty());
    }
}
