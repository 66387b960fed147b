//! Half-life decay
//!
//! Exponential decay in the form `N(t) = N(0) * 2^(-t / half_life)`, used to
//! age counters and telemetry estimates. Times are in microseconds.

use std::time::Duration;

/// Time needed for `initial` to decay to `target`
///
/// `t = -half_life * log2(target / initial)`, truncated to whole
/// microseconds. Returns 0 when any input is zero or when `target` is not
/// below `initial`.
pub fn time_to_reach(half_life_usec: u64, initial: u32, target: u32) -> u64 {
    if initial == 0 || target == 0 || target >= initial || half_life_usec == 0 {
        return 0;
    }

    let ratio = target as f64 / initial as f64;
    (-(half_life_usec as f64) * ratio.log2()) as u64
}

/// Value left of `initial` after decaying for `elapsed_usec`
///
/// Returns `initial` unchanged when `initial`, `elapsed_usec` or
/// `half_life_usec` is zero.
pub fn value_after_decay(elapsed_usec: u64, half_life_usec: u64, initial: u32) -> u32 {
    if initial == 0 || elapsed_usec == 0 || half_life_usec == 0 {
        return initial;
    }

    let ratio = elapsed_usec as f64 / half_life_usec as f64;
    (initial as f64 * 0.5f64.powf(ratio)) as u32
}

/// Half-life with `Duration` based helpers
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HalfLife(Duration);

impl HalfLife {
    pub fn new(duration: Duration) -> Self {
        HalfLife(duration)
    }

    pub fn from_secs(secs: u64) -> Self {
        HalfLife(Duration::from_secs(secs))
    }

    pub fn from_millis(millis: u64) -> Self {
        HalfLife(Duration::from_millis(millis))
    }

    #[inline]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    #[inline]
    fn as_usec(self) -> u64 {
        self.0.as_micros().min(u64::MAX as u128) as u64
    }

    /// See [`time_to_reach`]
    pub fn time_to_reach(self, initial: u32, target: u32) -> Duration {
        Duration::from_micros(time_to_reach(self.as_usec(), initial, target))
    }

    /// See [`value_after_decay`]
    pub fn value_after(self, elapsed: Duration, initial: u32) -> u32 {
        let elapsed_usec = elapsed.as_micros().min(u64::MAX as u128) as u64;
        value_after_decay(elapsed_usec, self.as_usec(), initial)
    }
}

impl From<Duration> for HalfLife {
    fn from(duration: Duration) -> Self {
        HalfLife(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_half_lives() {
        assert_eq!(time_to_reach(1000, 100, 25), 2000);
        assert_eq!(value_after_decay(2000, 1000, 100), 25);
    }

    #[test]
    fn test_one_half_life() {
        assert_eq!(time_to_reach(1_000_000, 64, 32), 1_000_000);
        assert_eq!(value_after_decay(1_000_000, 1_000_000, 64), 32);
    }

    #[test]
    fn test_time_to_reach_degenerate() {
        assert_eq!(time_to_reach(0, 100, 25), 0);
        assert_eq!(time_to_reach(1000, 0, 25), 0);
        assert_eq!(time_to_reach(1000, 100, 0), 0);
        assert_eq!(time_to_reach(1000, 100, 100), 0);
        assert_eq!(time_to_reach(1000, 100, 200), 0);
    }

    #[test]
    fn test_value_after_decay_degenerate() {
        assert_eq!(value_after_decay(0, 1000, 100), 100);
        assert_eq!(value_after_decay(1000, 0, 100), 100);
        assert_eq!(value_after_decay(1000, 1000, 0), 0);
    }

    #[test]
    fn test_value_decays_to_zero() {
        assert_eq!(value_after_decay(64_000, 1000, u32::MAX), 0);
    }

    #[test]
    fn test_half_life_durations() {
        let half_life = HalfLife::from_millis(1);

        assert_eq!(half_life.time_to_reach(100, 25), Duration::from_millis(2));
        assert_eq!(half_life.value_after(Duration::from_millis(2), 100), 25);
        assert_eq!(half_life.value_after(Duration::ZERO, 100), 100);
        assert_eq!(HalfLife::default().time_to_reach(100, 25), Duration::ZERO);
    }
}
