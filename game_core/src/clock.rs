use std::time::Duration;

/// Match timer measured against an external millisecond clock
#[derive(Debug, Clone, Copy)]
pub struct MatchClock {
    started_at: u64,
    elapsed: Duration,
    duration: Duration,
}

impl MatchClock {
    pub fn new(now_ms: u64, duration: Duration) -> Self {
        Self {
            started_at: now_ms,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Advance elapsed time to `now_ms`. Elapsed never moves backwards.
    pub fn update(&mut self, now_ms: u64) {
        let since_start = Duration::from_millis(now_ms.saturating_sub(self.started_at));
        self.elapsed = self.elapsed.max(since_start);
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_full() {
        let clock = MatchClock::new(5_000, Duration::from_secs(60));
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.remaining(), Duration::from_secs(60));
        assert_eq!(clock.duration(), Duration::from_secs(60));
        assert!(!clock.is_expired());
    }

    #[test]
    fn test_clock_expires_at_duration() {
        let mut clock = MatchClock::new(0, Duration::from_secs(1));
        clock.update(999);
        assert!(!clock.is_expired());
        clock.update(1_000);
        assert!(clock.is_expired(), "Elapsed equal to duration is over");
        clock.update(1_100);
        assert!(clock.is_expired());
        assert_eq!(clock.remaining(), Duration::ZERO, "Remaining saturates at zero");
    }

    #[test]
    fn test_clock_elapsed_is_monotonic() {
        let mut clock = MatchClock::new(1_000, Duration::from_secs(60));
        clock.update(3_000);
        assert_eq!(clock.elapsed(), Duration::from_secs(2));
        clock.update(2_000);
        assert_eq!(clock.elapsed(), Duration::from_secs(2), "Earlier timestamp is ignored");
        clock.update(500);
        assert_eq!(clock.elapsed(), Duration::from_secs(2), "Timestamp before start is ignored");
    }
}
