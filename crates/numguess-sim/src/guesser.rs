//! The bounded search loop shared by every strategy.

use crate::domain::{Attempts, SearchBounds, Target};
use crate::strategy::{Prober, RandomProbe, Strategy};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;

/// Upper bound on attempts for any strategy that keeps its probes in bounds.
pub const MAX_ATTEMPTS: Attempts = Target::MAX - Target::MIN + 1;

/// One probe together with the bounds it was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbeStep {
    pub bounds: SearchBounds,
    pub probe: u32,
}

/// Instrumented record of a single trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trial {
    pub target: Target,
    pub attempts: Attempts,
    pub steps: Vec<ProbeStep>,
}

impl Trial {
    pub fn probes(&self) -> impl Iterator<Item = u32> + '_ {
        self.steps.iter().map(|s| s.probe)
    }

    pub fn last_probe(&self) -> Option<u32> {
        self.steps.last().map(|s| s.probe)
    }
}

/// Runs the search loop, calling `on_probe` for every probe made.
///
/// The strategy must keep its probes inside the bounds it is given; a probe
/// outside them is clamped so the loop still terminates.
pub(crate) fn search<S, F>(
    strategy: &S,
    target: Target,
    rng: &mut dyn RngCore,
    mut on_probe: F,
) -> Attempts
where
    S: Prober + ?Sized,
    F: FnMut(ProbeStep),
{
    let mut bounds = SearchBounds::full();
    let mut count: Attempts = 0;

    loop {
        let raw = strategy.probe(bounds, rng);
        count += 1;
        on_probe(ProbeStep { bounds, probe: raw });

        let probe = raw.clamp(bounds.low, bounds.high);
        if probe == target.get() {
            return count;
        }
        bounds = bounds.narrow(probe, target);
    }
}

/// Attempts the randomized probe needs to find `target`.
pub fn guess(target: Target, rng: &mut dyn RngCore) -> Attempts {
    RandomProbe.guess(target, rng)
}

/// Traces one trial with a fresh generator seeded from `seed`.
pub fn trace_seeded<S: Prober + ?Sized>(strategy: &S, target: Target, seed: u64) -> Trial {
    let mut rng = StdRng::seed_from_u64(seed);
    strategy.trace(target, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Midpoint;

    fn t(v: i64) -> Target {
        Target::new(v).unwrap()
    }

    #[test]
    fn finds_lower_edge() {
        let mut rng = StdRng::seed_from_u64(7);
        let trial = RandomProbe.trace(t(1), &mut rng);
        assert_eq!(trial.last_probe(), Some(1));
        assert!(trial.attempts >= 1 && trial.attempts <= MAX_ATTEMPTS);
    }

    #[test]
    fn finds_upper_edge() {
        let mut rng = StdRng::seed_from_u64(7);
        let trial = RandomProbe.trace(t(100), &mut rng);
        assert_eq!(trial.last_probe(), Some(100));
        assert_eq!(trial.attempts as usize, trial.steps.len());
    }

    #[test]
    fn midrange_is_fast() {
        let mut rng = StdRng::seed_from_u64(1);
        let attempts = guess(t(50), &mut rng);
        assert!((1..=20).contains(&attempts), "attempts = {attempts}");
    }

    #[test]
    fn seeded_trace_is_stable() {
        let trial = trace_seeded(&RandomProbe, t(50), 1);
        let probes: Vec<u32> = trial.probes().collect();
        assert_eq!(probes, vec![83, 66, 15, 24, 56, 32, 55, 50]);
        assert_eq!(trial.attempts, 8);
    }

    #[test]
    fn midpoint_probes_are_fixed() {
        let mut rng = StdRng::seed_from_u64(0);
        let trial = Midpoint.trace(t(1), &mut rng);
        let probes: Vec<u32> = trial.probes().collect();
        assert_eq!(probes, vec![50, 25, 12, 6, 3, 1]);
        assert_eq!(Midpoint.guess(t(50), &mut rng), 1);
        assert_eq!(Midpoint.guess(t(100), &mut rng), 7);
    }

    #[test]
    fn bounds_shrink_every_step() {
        let mut rng = StdRng::seed_from_u64(99);
        for target in Target::all() {
            let trial = RandomProbe.trace(target, &mut rng);
            for pair in trial.steps.windows(2) {
                let (prev, next) = (pair[0], pair[1]);
                assert!(next.bounds.len() < prev.bounds.len());
                assert!(!next.bounds.contains(prev.probe));
                assert!(next.bounds.contains(target.get()));
            }
        }
    }

    struct OutOfBounds;

    impl Strategy for OutOfBounds {
        fn name(&self) -> &str {
            "out-of-bounds"
        }

        fn guess(&self, target: Target, rng: &mut dyn RngCore) -> Attempts {
            search(self, target, rng, |_| {})
        }
    }

    impl Prober for OutOfBounds {
        fn probe(&self, bounds: SearchBounds, _rng: &mut dyn RngCore) -> u32 {
            bounds.high + 10
        }
    }

    #[test]
    fn stray_probes_are_clamped() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(OutOfBounds.guess(t(1), &mut rng), 100);
    }
}
