use std::time::{Duration, Instant};

/// Fixed-period repaint ticker.
///
/// A `Ticker` is an explicitly owned resource: it is disarmed until
/// [`start`](Self::start) and holds no OS timer — the event loop sleeps
/// with `ControlFlow::WaitUntil(deadline())` and calls
/// [`fire`](Self::fire) when it wakes.
///
/// Missed deadlines are skipped in whole periods: after a stall the next
/// deadline is realigned past `now` rather than firing a burst of
/// catch-up ticks. Frames are dropped, never compensated.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    /// Creates a disarmed ticker with the given period.
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero());
        Self { period, next: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Arms the ticker. The first tick is due immediately.
    ///
    /// Starting an already running ticker restarts its cadence.
    pub fn start(&mut self) {
        self.next = Some(Instant::now());
    }

    /// Disarms the ticker. Idempotent; call before the surface it drives
    /// is torn down so no tick can arrive after teardown.
    pub fn stop(&mut self) {
        self.next = None;
    }

    /// Returns the next due instant while running.
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Reports whether a tick is due at `now` and advances the deadline.
    ///
    /// Returns `false` while disarmed or before the deadline. On a due
    /// tick the deadline advances by enough whole periods to land after
    /// `now`, keeping the cadence aligned to the original start instant.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(due) = self.next else {
            return false;
        };
        if now < due {
            return false;
        }

        let behind = now.duration_since(due);
        let periods = (behind.as_nanos() / self.period.as_nanos()) as u32 + 1;
        self.next = Some(due + self.period * periods);

        true
    }
}

impl Default for Ticker {
    /// ~60 Hz repaint cadence.
    fn default() -> Self {
        Self::new(Duration::from_millis(16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn disarmed_ticker_never_fires() {
        let mut t = Ticker::new(ms(16));
        assert!(!t.is_running());
        assert!(t.deadline().is_none());
        assert!(!t.fire(Instant::now()));
    }

    #[test]
    fn start_makes_first_tick_due_immediately() {
        let mut t = Ticker::new(ms(16));
        t.start();
        assert!(t.is_running());
        assert!(t.fire(Instant::now()));
    }

    #[test]
    fn stop_is_idempotent() {
        let mut t = Ticker::new(ms(16));
        t.start();
        t.stop();
        t.stop();
        assert!(!t.is_running());
        assert!(!t.fire(Instant::now()));
    }

    // ── cadence ───────────────────────────────────────────────────────────

    #[test]
    fn fire_before_deadline_is_false() {
        let mut t = Ticker::new(ms(1000));
        t.start();
        let due = t.deadline().unwrap();
        assert!(t.fire(due));
        // Immediately after firing the next deadline is a full period away.
        assert!(!t.fire(due + ms(1)));
        assert_eq!(t.deadline().unwrap(), due + ms(1000));
    }

    #[test]
    fn deadline_advances_by_one_period_on_time() {
        let mut t = Ticker::new(ms(16));
        t.start();
        let due = t.deadline().unwrap();
        assert!(t.fire(due));
        assert_eq!(t.deadline().unwrap(), due + ms(16));
    }

    #[test]
    fn missed_periods_are_skipped_not_bursted() {
        let mut t = Ticker::new(ms(16));
        t.start();
        let due = t.deadline().unwrap();

        // Stall of a little over 5 periods.
        assert!(t.fire(due + ms(81)));

        // The new deadline is past `now`, aligned to the original cadence.
        let next = t.deadline().unwrap();
        assert_eq!(next, due + ms(96));
        assert!(!t.fire(due + ms(90)));
    }
}
