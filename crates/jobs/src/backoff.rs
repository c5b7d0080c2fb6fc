use std::time::Duration;

const DEFAULT_INITIAL: Duration = Duration::from_secs(30);
const DEFAULT_MAX: Duration = Duration::from_secs(30 * 60);
const JITTER_FRACTION: f64 = 0.2;

/// Exponential backoff with symmetric jitter.
///
/// After `k` consecutive failures the base delay is
/// `min(max, initial * 2^(k-1))`; the jittered delay is drawn uniformly from
/// `base * [0.8, 1.2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    initial: Duration,
    max: Duration,
}

impl Backoff {
    /// Zero durations fall back to the defaults (30s and 30min).
    pub fn new(initial: Duration, max: Duration) -> Self {
        let initial = if initial.is_zero() { DEFAULT_INITIAL } else { initial };
        let max = if max.is_zero() { DEFAULT_MAX } else { max };
        Self { initial, max }
    }

    pub fn initial(&self) -> Duration {
        self.initial
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn base_delay(&self, failures: u32) -> Duration {
        let exponent = failures.saturating_sub(1).min(63);
        let factor = 1u64 << exponent;
        let scaled = self
            .initial
            .checked_mul(u32::try_from(factor).unwrap_or(u32::MAX))
            .unwrap_or(self.max);
        scaled.min(self.max)
    }

    pub fn delay(&self, failures: u32) -> Duration {
        self.jittered(self.base_delay(failures), fastrand::f64())
    }

    /// `unit` in [0, 1) maps linearly onto [-20%, +20%]. Saturates at `max`
    /// when the jittered value does not fit a `Duration`.
    fn jittered(&self, base: Duration, unit: f64) -> Duration {
        let offset = (unit * 2.0 - 1.0) * JITTER_FRACTION;
        Duration::try_from_secs_f64(base.as_secs_f64() * (1.0 + offset)).unwrap_or(self.max)
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL, DEFAULT_MAX)
    }
}
