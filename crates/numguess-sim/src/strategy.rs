//! Guessing strategies.
//!
//! The evaluator only needs [`Strategy::guess`]. Strategies that narrow a
//! pair of bounds implement [`Prober`] instead and let the search loop in
//! [`crate::guesser`] do the bookkeeping, so every prober inherits the same
//! termination guarantee and can be traced.

use crate::domain::{Attempts, SearchBounds, Target};
use crate::guesser::{self, Trial};
use rand::{Rng, RngCore};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub trait Strategy {
    /// Stable identifier used in reports and on the command line.
    fn name(&self) -> &str;

    /// Attempts needed to find `target`. `rng` is the evaluation's generator.
    fn guess(&self, target: Target, rng: &mut dyn RngCore) -> Attempts;
}

/// A strategy driven by the bounded search loop.
pub trait Prober: Strategy {
    /// Next probe. Must lie within `bounds`.
    fn probe(&self, bounds: SearchBounds, rng: &mut dyn RngCore) -> u32;

    fn trace(&self, target: Target, rng: &mut dyn RngCore) -> Trial {
        let mut steps = Vec::new();
        let attempts = guesser::search(self, target, rng, |step| steps.push(step));
        Trial {
            target,
            attempts,
            steps,
        }
    }
}

/// Black-box guesser: any `Fn(Target) -> Attempts` with a name.
///
/// The closure owns whatever randomness it uses; the evaluation generator is
/// not passed on.
pub struct FnStrategy<F> {
    name: String,
    f: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(Target) -> Attempts,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Strategy for FnStrategy<F>
where
    F: Fn(Target) -> Attempts,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn guess(&self, target: Target, _rng: &mut dyn RngCore) -> Attempts {
        (self.f)(target)
    }
}

pub fn from_fn<F>(name: impl Into<String>, f: F) -> FnStrategy<F>
where
    F: Fn(Target) -> Attempts,
{
    FnStrategy::new(name, f)
}

/// Probes a uniformly random point of the current bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomProbe;

impl Strategy for RandomProbe {
    fn name(&self) -> &str {
        "random"
    }

    fn guess(&self, target: Target, rng: &mut dyn RngCore) -> Attempts {
        guesser::search(self, target, rng, |_| {})
    }
}

impl Prober for RandomProbe {
    fn probe(&self, bounds: SearchBounds, rng: &mut dyn RngCore) -> u32 {
        rng.gen_range(bounds.low..=bounds.high)
    }
}

/// Textbook bisection: always probes the lower midpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct Midpoint;

impl Strategy for Midpoint {
    fn name(&self) -> &str {
        "midpoint"
    }

    fn guess(&self, target: Target, rng: &mut dyn RngCore) -> Attempts {
        guesser::search(self, target, rng, |_| {})
    }
}

impl Prober for Midpoint {
    fn probe(&self, bounds: SearchBounds, _rng: &mut dyn RngCore) -> u32 {
        bounds.low + (bounds.high - bounds.low) / 2
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyKindError {
    #[error("unknown strategy '{0}' (expected one of: random, midpoint)")]
    Unknown(String),
}

/// Built-in strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Random,
    Midpoint,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Random, StrategyKind::Midpoint];

    pub fn as_strategy(self) -> &'static dyn Strategy {
        match self {
            StrategyKind::Random => &RandomProbe,
            StrategyKind::Midpoint => &Midpoint,
        }
    }

    pub fn as_prober(self) -> &'static dyn Prober {
        match self {
            StrategyKind::Random => &RandomProbe,
            StrategyKind::Midpoint => &Midpoint,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Midpoint => "midpoint",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(StrategyKind::Random),
            "midpoint" | "bisect" => Ok(StrategyKind::Midpoint),
            other => Err(StrategyKindError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
