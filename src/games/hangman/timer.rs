/// Turn timing. No threads and no ticking: callers sample it with an instant.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of "now" for the engine.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time, so a test
/// can keep one handle while the game owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset_ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let millis = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.offset_ms.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + Duration::from_millis(self.offset_ms.load(Ordering::SeqCst))
    }
}

/// Result of sampling the turn timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPoll {
    NotExpired,
    Expired,
}

#[derive(Debug, Clone)]
pub struct TurnTimer {
    started_at: Option<Instant>,
    duration: Duration,
}

impl TurnTimer {
    pub fn new(duration: Duration) -> Self {
        Self { started_at: None, duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Overwrites any earlier start.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.started_at.map(|start| now.saturating_duration_since(start))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.elapsed(now).is_some_and(|elapsed| elapsed >= self.duration)
    }

    /// Seconds left, rounded up: a fresh 15s turn reads 15, and the count
    /// only reaches 0 once the turn has expired.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let Some(elapsed) = self.elapsed(now) else {
            return 0;
        };
        let left = self.duration.saturating_sub(elapsed);
        left.as_secs() + u64::from(left.subsec_nanos() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TURN: Duration = Duration::from_secs(15);

    #[test]
    fn idle_timer_reports_nothing() {
        let timer = TurnTimer::new(TURN);
        let now = Instant::now();
        assert!(!timer.is_running());
        assert!(!timer.is_expired(now));
        assert_eq!(timer.remaining_secs(now), 0);
        assert_eq!(timer.elapsed(now), None);
    }

    #[test]
    fn counts_down_in_whole_seconds() {
        let clock = ManualClock::new();
        let mut timer = TurnTimer::new(TURN);
        timer.start(clock.now());
        assert_eq!(timer.remaining_secs(clock.now()), 15);

        clock.advance(Duration::from_millis(400));
        assert_eq!(timer.remaining_secs(clock.now()), 15);

        clock.advance(Duration::from_millis(600));
        assert_eq!(timer.remaining_secs(clock.now()), 14);

        clock.advance(Duration::from_secs(13));
        assert_eq!(timer.remaining_secs(clock.now()), 1);
        assert!(!timer.is_expired(clock.now()));
    }

    #[test]
    fn expires_at_exactly_the_duration() {
        let clock = ManualClock::new();
        let mut timer = TurnTimer::new(TURN);
        timer.start(clock.now());

        clock.advance(TURN);
        assert!(timer.is_expired(clock.now()));
        assert_eq!(timer.remaining_secs(clock.now()), 0);

        clock.advance(Duration::from_secs(60));
        assert_eq!(timer.remaining_secs(clock.now()), 0);
    }

    #[test]
    fn sub_second_turns_read_zero_only_when_expired() {
        let clock = ManualClock::new();
        let mut timer = TurnTimer::new(Duration::from_millis(1500));
        timer.start(clock.now());
        assert_eq!(timer.remaining_secs(clock.now()), 2);

        clock.advance(Duration::from_millis(1200));
        assert!(!timer.is_expired(clock.now()));
        assert_eq!(timer.remaining_secs(clock.now()), 1);

        clock.advance(Duration::from_millis(300));
        assert!(timer.is_expired(clock.now()));
        assert_eq!(timer.remaining_secs(clock.now()), 0);
    }

    #[test]
    fn restart_overwrites_the_start() {
        let clock = ManualClock::new();
        let mut timer = TurnTimer::new(TURN);
        timer.start(clock.now());
        clock.advance(Duration::from_secs(10));

        timer.start(clock.now());
        clock.advance(Duration::from_secs(10));
        assert!(!timer.is_expired(clock.now()));
        assert_eq!(timer.remaining_secs(clock.now()), 5);
    }

    #[test]
    fn stop_clears_the_start() {
        let clock = ManualClock::new();
        let mut timer = TurnTimer::new(TURN);
        timer.start(clock.now());
        timer.stop();
        clock.advance(Duration::from_secs(30));
        assert!(!timer.is_expired(clock.now()));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let before = other.now();
        clock.advance(Duration::from_secs(3));
        assert_eq!(other.now() - before, Duration::from_secs(3));
    }
}
