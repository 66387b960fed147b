use proptest::prelude::*;
use sairedis_utils::{time_to_reach, value_after_decay};

proptest! {
    #[test]
    fn value_is_initial_at_zero_elapsed(
        half_life in 1u64..10_000_000_000,
        initial in any::<u32>(),
    ) {
        prop_assert_eq!(value_after_decay(0, half_life, initial), initial);
    }

    #[test]
    fn value_never_increases(
        half_life in 1u64..10_000_000_000,
        initial in 1u32..,
        a in 0u64..100_000_000_000,
        b in 0u64..100_000_000_000,
    ) {
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let late_value = value_after_decay(late, half_life, initial);
        let early_value = value_after_decay(early, half_life, initial);
        prop_assert!(late_value <= early_value);
    }

    #[test]
    fn value_never_exceeds_initial(
        elapsed in any::<u64>(),
        half_life in any::<u64>(),
        initial in any::<u32>(),
    ) {
        prop_assert!(value_after_decay(elapsed, half_life, initial) <= initial);
    }

    #[test]
    fn target_not_below_initial_takes_no_time(
        half_life in any::<u64>(),
        initial in any::<u32>(),
        extra in 0u32..1000,
    ) {
        let target = initial.saturating_add(extra);
        prop_assert_eq!(time_to_reach(half_life, initial, target), 0);
    }

    #[test]
    fn decaying_for_time_to_reach_lands_on_target(
        half_life in 1_000_000u64..1_000_000_000,
        initial in 2u32..1_000_000,
        target_permille in 1u32..1000,
    ) {
        let target = ((initial as u64 * target_permille as u64) / 1000).max(1) as u32;
        prop_assume!(target < initial);

        let t = time_to_reach(half_life, initial, target);
        prop_assert!(t > 0);

        let reached = value_after_decay(t, half_life, initial);
        prop_assert!(
            (reached as i64 - target as i64).abs() <= 1,
            "reached {} for target {}",
            reached,
            target
        );
    }
}
