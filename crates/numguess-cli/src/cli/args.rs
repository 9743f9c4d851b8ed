use clap::{Parser, Subcommand, ValueEnum};
use numguess_sim::StrategyKind;

#[derive(Parser, Debug)]
#[command(
    name = "numguess",
    version,
    about = "Adaptive number-guessing simulator: score guessing strategies over a fixed, seeded batch of targets"
)]
pub struct Cli {
    /// Defaults to `score` when omitted
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score one strategy over 1000 seeded trials
    Score(ScoreArgs),
    /// Score every built-in strategy against the same batch
    Compare(CompareArgs),
    /// Show the probe sequence for a single target
    Trace(TraceArgs),
    /// Check termination, correctness and narrowing for every target
    Check(CheckArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct ScoreArgs {
    /// Guessing strategy (random, midpoint)
    #[arg(long, default_value = "random")]
    pub strategy: StrategyKind,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Clone, Debug)]
pub struct CompareArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Clone, Debug)]
pub struct TraceArgs {
    /// Hidden number to search for (1..=100)
    #[arg(long, allow_negative_numbers = true)]
    pub target: i64,

    /// Guessing strategy (random, midpoint)
    #[arg(long, default_value = "random")]
    pub strategy: StrategyKind,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Clone, Debug)]
pub struct CheckArgs {
    /// Guessing strategy (random, midpoint)
    #[arg(long, default_value = "random")]
    pub strategy: StrategyKind,
}
