//! Value types shared by the guesser and the evaluator.
//!
//! A [`Target`] can only be built inside `[Target::MIN, Target::MAX]`, so the
//! search loop never sees a value it cannot reach.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of guesses made within one trial.
pub type Attempts = u32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("target {value} is outside the guessing domain [{min}, {max}]")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

/// Hidden number for one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Target(u32);

impl Target {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;

    pub fn new(value: i64) -> Result<Self, TargetError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(TargetError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Every value of the domain, ascending.
    pub fn all() -> impl Iterator<Item = Target> {
        (Self::MIN..=Self::MAX).map(Target)
    }

    /// Callers guarantee `value` is inside the domain (checked in debug builds).
    pub(crate) fn from_domain(value: u32) -> Self {
        debug_assert!((Self::MIN..=Self::MAX).contains(&value));
        Self(value)
    }
}

impl TryFrom<i64> for Target {
    type Error = TargetError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Target> for u32 {
    fn from(t: Target) -> Self {
        t.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range known to contain the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchBounds {
    pub low: u32,
    pub high: u32,
}

impl SearchBounds {
    pub fn full() -> Self {
        Self {
            low: Target::MIN,
            high: Target::MAX,
        }
    }

    pub fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.high - self.low + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    pub fn contains(&self, value: u32) -> bool {
        self.low <= value && value <= self.high
    }

    /// Drops `probe` and everything on the wrong side of it.
    ///
    /// Only meaningful when `probe != target`; the probe is always excluded so
    /// the range shrinks by at least one value.
    pub fn narrow(self, probe: u32, target: Target) -> Self {
        if probe < target.get() {
            Self {
                low: probe + 1,
                high: self.high,
            }
        } else {
            Self {
                low: self.low,
                high: probe - 1,
            }
        }
    }
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self::full()
    }
}
