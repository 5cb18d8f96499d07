//! Advisory rate limiting.

use chrono::{DateTime, Duration, Utc};

/// Minimum minutes between two advisory evaluations.
pub const DEFAULT_WINDOW_MINUTES: i64 = 5;

/// Rate limiter for advisory evaluations.
///
/// `should_check` never records implicitly -- the caller decides which
/// evaluations count by calling `record` after acting on a true result.
#[derive(Debug, Clone)]
pub struct AdvisoryThrottle {
    window: Duration,
    last_checked_at: Option<DateTime<Utc>>,
}

impl Default for AdvisoryThrottle {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisoryThrottle {
    pub fn new() -> Self {
        Self::with_window_minutes(DEFAULT_WINDOW_MINUTES)
    }

    pub fn with_window_minutes(minutes: i64) -> Self {
        Self {
            window: Duration::minutes(minutes),
            last_checked_at: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn last_checked_at(&self) -> Option<DateTime<Utc>> {
        self.last_checked_at
    }

    /// True if no check was ever recorded, or the window has fully elapsed.
    pub fn should_check(&self, now: DateTime<Utc>) -> bool {
        match self.last_checked_at {
            None => true,
            Some(last) => now - last > self.window,
        }
    }

    pub fn record(&mut self, now: DateTime<Utc>) {
        self.last_checked_at = Some(now);
    }

    /// Forget the last check, e.g. on disembark or aircraft unload.
    pub fn reset(&mut self) {
        self.last_checked_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn first_call_is_always_due() {
        let throttle = AdvisoryThrottle::new();
        assert!(throttle.should_check(t0()));
    }

    #[test]
    fn window_must_fully_elapse() {
        let mut throttle = AdvisoryThrottle::with_window_minutes(5);
        throttle.record(t0());
        assert!(!throttle.should_check(t0() + Duration::minutes(4)));
        // boundary is strict: exactly the window is still inside it
        assert!(!throttle.should_check(t0() + Duration::minutes(5)));
        assert!(throttle.should_check(t0() + Duration::minutes(5) + Duration::seconds(1)));
    }

    #[test]
    fn reset_reopens_the_gate() {
        let mut throttle = AdvisoryThrottle::new();
        throttle.record(t0());
        assert!(!throttle.should_check(t0() + Duration::seconds(1)));
        throttle.reset();
        assert!(throttle.should_check(t0() + Duration::seconds(1)));
        assert_eq!(throttle.last_checked_at(), None);
    }
}
