use numguess_sim::Prober as _;
use numguess_sim::{check_invariants, guess, Evaluator, Midpoint, RandomProbe, Target, MAX_ATTEMPTS};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn random_probe_terminates_on_target(seed in any::<u64>(), value in 1i64..=100) {
        let target = Target::new(value).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let trial = RandomProbe.trace(target, &mut rng);

        prop_assert!(trial.attempts >= 1 && trial.attempts <= MAX_ATTEMPTS);
        prop_assert_eq!(trial.last_probe(), Some(target.get()));
        for pair in trial.steps.windows(2) {
            prop_assert!(pair[1].bounds.len() < pair[0].bounds.len());
            prop_assert!(!pair[1].bounds.contains(pair[0].probe));
        }
    }

    #[test]
    fn trace_and_guess_agree(seed in any::<u64>(), value in 1i64..=100) {
        let target = Target::new(value).unwrap();
        let traced = RandomProbe.trace(target, &mut StdRng::seed_from_u64(seed));
        let counted = guess(target, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(traced.attempts, counted);
    }

    #[test]
    fn out_of_domain_targets_are_rejected(value in prop_oneof![i64::MIN..1i64, 101i64..i64::MAX]) {
        prop_assert!(Target::new(value).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn evaluation_is_a_function_of_the_seed(seed in any::<u64>()) {
        let a = Evaluator::new(seed).run(&RandomProbe);
        let b = Evaluator::new(seed).run(&RandomProbe);
        prop_assert_eq!(&a, &b);
        prop_assert!(a.mean_attempts > 1 && a.mean_attempts < 100);
        prop_assert!(a.mean_attempts >= 4 && a.mean_attempts <= 12);
    }

    #[test]
    fn invariants_hold_for_any_seed(seed in any::<u64>()) {
        prop_assert!(check_invariants(&RandomProbe, seed).is_ok());
        prop_assert!(check_invariants(&Midpoint, seed).is_ok());
    }
}
