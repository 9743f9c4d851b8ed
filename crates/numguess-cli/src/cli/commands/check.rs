use crate::cli::args::CheckArgs;
use crate::exit_codes::{EXIT_INVARIANT_FAILED, EXIT_SUCCESS};
use anyhow::Result;
use numguess_sim::{check_invariants, DEFAULT_SEED};

pub fn run(args: CheckArgs) -> Result<i32> {
    match check_invariants(args.strategy.as_prober(), DEFAULT_SEED) {
        Ok(summary) => {
            println!(
                "Invariants held for '{}': {} targets checked, worst case {} attempts (target {})",
                summary.strategy, summary.targets_checked, summary.worst_attempts, summary.worst_target
            );
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Invariant check failed: {:#}", e);
            Ok(EXIT_INVARIANT_FAILED)
        }
    }
}
