use super::args::*;

pub mod check;
pub mod compare;
pub mod score;
pub mod trace;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        None => score::run(ScoreArgs::default()),
        Some(Command::Score(args)) => score::run(args),
        Some(Command::Compare(args)) => compare::run(args),
        Some(Command::Trace(args)) => trace::run(args),
        Some(Command::Check(args)) => check::run(args),
    }
}
