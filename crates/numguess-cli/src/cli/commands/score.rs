use crate::cli::args::{OutputFormat, ScoreArgs};
use crate::exit_codes::EXIT_SUCCESS;
use anyhow::{Context, Result};
use numguess_sim::{run_score, DEFAULT_SEED};

pub fn run(args: ScoreArgs) -> Result<i32> {
    let report = run_score(args.strategy.as_strategy(), DEFAULT_SEED);

    match args.format {
        OutputFormat::Text => println!("{}", report.to_text()),
        OutputFormat::Json => println!(
            "{}",
            report.to_json().context("failed to serialize score report")?
        ),
    }
    Ok(EXIT_SUCCESS)
}
