//! Single-shot re-armable countdown for debouncing one input channel.
//!
//! Provides [`Debounce`], the per-channel anti-chatter mechanism: every
//! qualifying edge restarts the countdown from the full duration, so only a
//! quiet period of at least the full duration leads to an expiry.

use crate::time::{TimeDuration, TimeInstant};

/// The armed/idle status of a debounce countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// No countdown in flight.
    Idle,
    /// Counting down; will expire once the full duration elapses with no
    /// further restart.
    Armed,
}

/// A single-shot countdown of fixed duration, restartable while running.
///
/// Created once per channel at initialization and never destroyed. Restarting
/// while armed discards the in-flight countdown (most-recent-edge-wins):
/// rapid electrical bounce keeps re-arming the countdown and only the final
/// quiet period produces an expiry.
///
/// The countdown is sampled, not callback-driven: the owner calls
/// [`poll`](Debounce::poll) with the current instant and observes at most one
/// expiry per arm/re-arm cycle.
#[derive(Clone, Copy)]
pub struct Debounce<I: TimeInstant> {
    duration: I::Duration,
    armed_at: Option<I>,
}

impl<I: TimeInstant> Debounce<I> {
    /// Creates an idle countdown with the given duration.
    pub fn new(duration: I::Duration) -> Self {
        Self {
            duration,
            armed_at: None,
        }
    }

    /// Returns the configured countdown duration.
    pub fn duration(&self) -> I::Duration {
        self.duration
    }

    /// Returns the current armed/idle status.
    pub fn state(&self) -> DebounceState {
        match self.armed_at {
            Some(_) => DebounceState::Armed,
            None => DebounceState::Idle,
        }
    }

    /// (Re)starts the countdown from the full duration.
    ///
    /// If already armed, the in-flight countdown is discarded. Bounded,
    /// allocation-free work; safe to call from the edge detector.
    #[inline]
    pub fn restart(&mut self, now: I) {
        self.armed_at = Some(now);
    }

    /// Checks for expiry, firing at most once per arm/re-arm cycle.
    ///
    /// Returns `true` and disarms if the full duration has elapsed since the
    /// most recent restart. Returns `false` while idle or still counting.
    pub fn poll(&mut self, now: I) -> bool {
        match self.armed_at {
            Some(armed_at)
                if now.duration_since(armed_at).as_millis() >= self.duration.as_millis() =>
            {
                self.armed_at = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the time left until expiry, or `None` while idle.
    ///
    /// An armed countdown whose deadline has already passed reports
    /// [`TimeDuration::ZERO`].
    pub fn time_remaining(&self, now: I) -> Option<I::Duration> {
        self.armed_at
            .map(|armed_at| self.duration.saturating_sub(now.duration_since(armed_at)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock Duration type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct TestDuration(u64);

    impl TimeDuration for TestDuration {
        const ZERO: Self = TestDuration(0);

        fn as_millis(&self) -> u64 {
            self.0
        }

        fn from_millis(millis: u64) -> Self {
            TestDuration(millis)
        }

        fn saturating_sub(self, other: Self) -> Self {
            TestDuration(self.0.saturating_sub(other.0))
        }
    }

    // Mock Instant type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct TestInstant(u64);

    impl TimeInstant for TestInstant {
        type Duration = TestDuration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            TestDuration(self.0 - earlier.0)
        }
    }

    #[test]
    fn starts_idle() {
        let mut debounce = Debounce::<TestInstant>::new(TestDuration(50));
        assert_eq!(debounce.state(), DebounceState::Idle);
        assert!(!debounce.poll(TestInstant(1000)));
        assert_eq!(debounce.time_remaining(TestInstant(1000)), None);
    }

    #[test]
    fn fires_once_after_full_duration() {
        let mut debounce = Debounce::<TestInstant>::new(TestDuration(50));

        debounce.restart(TestInstant(0));
        assert_eq!(debounce.state(), DebounceState::Armed);

        assert!(!debounce.poll(TestInstant(49)));
        assert!(debounce.poll(TestInstant(50)));
        assert_eq!(debounce.state(), DebounceState::Idle);

        // Exactly once per arm cycle
        assert!(!debounce.poll(TestInstant(51)));
        assert!(!debounce.poll(TestInstant(1000)));
    }

    #[test]
    fn restart_while_armed_discards_pending_expiry() {
        let mut debounce = Debounce::<TestInstant>::new(TestDuration(50));

        debounce.restart(TestInstant(0));
        debounce.restart(TestInstant(40));

        // Original deadline has passed, but the countdown was re-armed
        assert!(!debounce.poll(TestInstant(60)));

        // New deadline is 40 + 50 = 90
        assert!(!debounce.poll(TestInstant(89)));
        assert!(debounce.poll(TestInstant(90)));
    }

    #[test]
    fn bounce_storm_keeps_deferring_expiry() {
        let mut debounce = Debounce::<TestInstant>::new(TestDuration(50));

        // Edges every 10ms for 200ms, each within the previous window
        for t in (0..=200).step_by(10) {
            debounce.restart(TestInstant(t));
            assert!(!debounce.poll(TestInstant(t + 9)));
        }

        // Quiet period after the last edge finally expires
        assert!(debounce.poll(TestInstant(250)));
    }

    #[test]
    fn time_remaining_counts_down() {
        let mut debounce = Debounce::<TestInstant>::new(TestDuration(50));

        debounce.restart(TestInstant(100));
        assert_eq!(
            debounce.time_remaining(TestInstant(100)),
            Some(TestDuration(50))
        );
        assert_eq!(
            debounce.time_remaining(TestInstant(130)),
            Some(TestDuration(20))
        );

        // Past the deadline but not yet polled: clamped to zero
        assert_eq!(
            debounce.time_remaining(TestInstant(200)),
            Some(TestDuration(0))
        );
    }

    #[test]
    fn restart_after_expiry_arms_fresh_cycle() {
        let mut debounce = Debounce::<TestInstant>::new(TestDuration(50));

        debounce.restart(TestInstant(0));
        assert!(debounce.poll(TestInstant(50)));

        debounce.restart(TestInstant(200));
        assert!(!debounce.poll(TestInstant(249)));
        assert!(debounce.poll(TestInstant(250)));
    }
}
