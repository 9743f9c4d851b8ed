use crate::evaluator::Evaluator;
use crate::report::{ReportMode, ScoreReport};
use crate::strategy::Strategy;
use std::time::Instant;

/// Scores a single strategy.
pub fn run_score<S: Strategy + ?Sized>(strategy: &S, seed: u64) -> ScoreReport {
    let mut report = ScoreReport::new(ReportMode::Score, seed);
    report.add_evaluation(Evaluator::new(seed).run(strategy));
    report
}

/// Scores every strategy against the same seeded batch.
pub fn compare(strategies: &[&dyn Strategy], seed: u64) -> ScoreReport {
    let mut report = ScoreReport::new(ReportMode::Compare, seed);
    let evaluator = Evaluator::new(seed);

    for strategy in strategies {
        let start = Instant::now();
        let evaluation = evaluator.run(*strategy);
        tracing::info!(
            strategy = strategy.name(),
            mean_attempts = evaluation.mean_attempts,
            duration_ms = start.elapsed().as_millis() as u64,
            "strategy scored"
        );
        report.add_evaluation(evaluation);
    }

    report
}
