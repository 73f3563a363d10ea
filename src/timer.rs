//! Session-scoped interval timers, driven by elapsed time instead of
//! wall-clock callbacks so tests can advance a game deterministically.

/// The periodic callbacks a session registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// One-second apple/bomb elapsed-time counter step.
    Counter,
    /// Thirty-second bomb relocation and arming.
    BombRespawn,
}

#[derive(Clone, Debug)]
struct Interval {
    period_ms: f64,
    elapsed_ms: f64,
    event: TimerEvent,
}

/// A set of repeating timers owned by one session.
#[derive(Clone, Debug, Default)]
pub struct IntervalTimers {
    intervals: Vec<Interval>,
}

impl IntervalTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, period_ms: f64, event: TimerEvent) {
        self.intervals.push(Interval {
            period_ms,
            elapsed_ms: 0.0,
            event,
        });
    }

    /// Push time forward and collect every event that came due, in
    /// firing order. A long enough step fires the same interval more
    /// than once; leftover time carries into the next period.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<TimerEvent> {
        let mut fired = Vec::new();
        for interval in &mut self.intervals {
            interval.elapsed_ms += dt_ms;
            while interval.elapsed_ms >= interval.period_ms {
                interval.elapsed_ms -= interval.period_ms;
                fired.push(interval.event);
            }
        }
        fired
    }

    /// Drop every registered interval. Clearing an empty set is a no-op.
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_when_the_period_elapses() {
        let mut timers = IntervalTimers::new();
        timers.register(1_000.0, TimerEvent::Counter);

        assert!(timers.advance(999.0).is_empty());
        assert_eq!(timers.advance(1.0), vec![TimerEvent::Counter]);
        assert!(timers.advance(500.0).is_empty());
    }

    #[test]
    fn a_large_step_fires_repeatedly() {
        let mut timers = IntervalTimers::new();
        timers.register(1_000.0, TimerEvent::Counter);

        let fired = timers.advance(3_500.0);
        assert_eq!(fired, vec![TimerEvent::Counter; 3]);
        // The half period left over counts toward the next fire.
        assert_eq!(timers.advance(500.0), vec![TimerEvent::Counter]);
    }

    #[test]
    fn sources_fire_in_registration_order() {
        let mut timers = IntervalTimers::new();
        timers.register(1_000.0, TimerEvent::Counter);
        timers.register(3_000.0, TimerEvent::BombRespawn);

        let fired = timers.advance(3_000.0);
        assert_eq!(
            fired,
            vec![
                TimerEvent::Counter,
                TimerEvent::Counter,
                TimerEvent::Counter,
                TimerEvent::BombRespawn
            ]
        );
    }

    #[test]
    fn clear_cancels_and_is_idempotent() {
        let mut timers = IntervalTimers::new();
        timers.register(1_000.0, TimerEvent::Counter);

        timers.clear();
        assert!(timers.is_empty());
        assert!(timers.advance(10_000.0).is_empty());

        // Double stop is a no-op.
        timers.clear();
        assert!(timers.is_empty());
    }
}
