use crate::cli::args::{CompareArgs, OutputFormat};
use crate::exit_codes::EXIT_SUCCESS;
use anyhow::{Context, Result};
use numguess_sim::{compare, Strategy, StrategyKind, DEFAULT_SEED};

pub fn run(args: CompareArgs) -> Result<i32> {
    let strategies: Vec<&dyn Strategy> = StrategyKind::ALL
        .iter()
        .map(|kind| kind.as_strategy())
        .collect();
    let report = compare(&strategies, DEFAULT_SEED);

    match args.format {
        OutputFormat::Text => println!("{}", report.to_text()),
        OutputFormat::Json => println!(
            "{}",
            report
                .to_json()
                .context("failed to serialize comparison report")?
        ),
    }
    Ok(EXIT_SUCCESS)
}
