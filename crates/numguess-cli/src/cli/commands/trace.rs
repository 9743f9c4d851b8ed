use crate::cli::args::{OutputFormat, TraceArgs};
use crate::exit_codes::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use anyhow::{Context, Result};
use numguess_sim::{trace_seeded, Target, Trial, DEFAULT_SEED};

pub fn run(args: TraceArgs) -> Result<i32> {
    let target = match Target::new(args.target) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    let trial = trace_seeded(args.strategy.as_prober(), target, DEFAULT_SEED);
    match args.format {
        OutputFormat::Text => print!("{}", render_text(args.strategy.name(), &trial)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&trial).context("failed to serialize trial")?
        ),
    }
    Ok(EXIT_SUCCESS)
}

fn render_text(strategy: &str, trial: &Trial) -> String {
    let mut out = format!("Tracing '{}' against target {}\n", strategy, trial.target);
    for (i, step) in trial.steps.iter().enumerate() {
        let verdict = match step.probe.cmp(&trial.target.get()) {
            std::cmp::Ordering::Less => "too low",
            std::cmp::Ordering::Greater => "too high",
            std::cmp::Ordering::Equal => "found",
        };
        out.push_str(&format!(
            "  #{:<3} [{:>3}, {:>3}] -> {:>3} {}\n",
            i + 1,
            step.bounds.low,
            step.bounds.high,
            step.probe,
            verdict
        ));
    }
    out.push_str(&format!("Found in {} attempts\n", trial.attempts));
    out
}
