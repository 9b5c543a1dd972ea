//! Minute-aligned re-render loop.
//!
//! The ticker fires once immediately, then on every wall-clock minute
//! boundary. Each tick reads the clock afresh, so a tick delayed by system
//! sleep renders the current moment and missed ticks are skipped rather than
//! replayed. When a tick lands away from `:00` (after a suspend or a
//! wall-clock step), the schedule is re-aligned to the next boundary.
//!
//! ## Usage
//!
//! ```ignore
//! let ticker = MinuteTicker::new(SystemClock);
//! ticker
//!     .run(
//!         |now| writeln!(out, "{}", render(&timetable.status_at(now), &timetable, locale)),
//!         tokio::signal::ctrl_c(),
//!     )
//!     .await?;
//! ```

use std::future::Future;
use std::time::Duration;

use chrono::{NaiveDateTime, Timelike};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

const MINUTE: Duration = Duration::from_secs(60);

/// How far from `:00` a tick may land before the schedule is re-aligned.
const DRIFT_TOLERANCE: Duration = Duration::from_secs(2);

/// Source of local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always reports the same moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Time left until the next `:00` second.
pub fn delay_to_next_minute(now: NaiveDateTime) -> Duration {
    let into_minute = Duration::new(u64::from(now.second()), now.nanosecond() % 1_000_000_000);
    MINUTE.saturating_sub(into_minute)
}

fn off_boundary(now: NaiveDateTime) -> bool {
    let delay = delay_to_next_minute(now);
    delay > DRIFT_TOLERANCE && delay < MINUTE - DRIFT_TOLERANCE
}

fn aligned_interval(now: NaiveDateTime) -> Interval {
    let delay = delay_to_next_minute(now);
    tracing::debug!(delay_ms = delay.as_millis() as u64, "aligning to minute boundary");
    let mut interval = interval_at(Instant::now() + delay, MINUTE);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

pub struct MinuteTicker<C> {
    clock: C,
}

impl<C: Clock> MinuteTicker<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Call `on_tick` now and at each minute boundary until `shutdown` resolves.
    ///
    /// Returns the number of ticks delivered, or the first error `on_tick`
    /// returns. An error stops the loop at once.
    pub async fn run<F, E, S>(&self, mut on_tick: F, shutdown: S) -> Result<u64, E>
    where
        F: FnMut(NaiveDateTime) -> Result<(), E>,
        S: Future,
    {
        let now = self.clock.now();
        on_tick(now)?;
        let mut ticks = 1;

        let mut interval = aligned_interval(now);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::debug!(ticks, "ticker stopped");
                    return Ok(ticks);
                }
                _ = interval.tick() => {}
            }

            let now = self.clock.now();
            tracing::trace!(%now, "tick");
            on_tick(now)?;
            ticks += 1;

            if off_boundary(now) {
                tracing::debug!(%now, "tick off the minute boundary");
                interval = aligned_interval(now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::convert::Infallible;
    use std::rc::Rc;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 12)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    /// Wall clock driven by tokio's (paused) clock, with an adjustable step.
    struct TestClock {
        start: Instant,
        base: NaiveDateTime,
        step_secs: Rc<Cell<i64>>,
    }

    impl TestClock {
        fn starting_at(base: NaiveDateTime) -> Self {
            Self {
                start: Instant::now(),
                base,
                step_secs: Rc::new(Cell::new(0)),
            }
        }
    }

    impl Clock for TestClock {
        fn now(&self) -> NaiveDateTime {
            self.base
                + chrono::Duration::from_std(self.start.elapsed()).unwrap()
                + chrono::Duration::seconds(self.step_secs.get())
        }
    }

    #[test]
    fn delay_to_next_minute_from_mid_minute() {
        assert_eq!(delay_to_next_minute(at(8, 54, 30, 0)), Duration::from_secs(30));
        assert_eq!(delay_to_next_minute(at(8, 54, 59, 750)), Duration::from_millis(250));
    }

    #[test]
    fn delay_on_exact_boundary_is_a_full_minute() {
        assert_eq!(delay_to_next_minute(at(9, 0, 0, 0)), MINUTE);
    }

    #[test]
    fn ticks_near_the_boundary_are_not_drift() {
        assert!(!off_boundary(at(9, 0, 0, 0)));
        assert!(!off_boundary(at(9, 0, 1, 500)));
        assert!(!off_boundary(at(8, 59, 59, 0)));
        assert!(off_boundary(at(9, 0, 20, 0)));
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_immediately_then_on_each_boundary() {
        let ticker = MinuteTicker::new(TestClock::starting_at(at(8, 54, 30, 0)));
        let mut seen = Vec::new();
        // Boundaries fall at +30s and +90s; stop before the one at +150s.
        let ticks = ticker
            .run(
                |now| {
                    seen.push(now.second());
                    Ok::<(), Infallible>(())
                },
                tokio::time::sleep(Duration::from_secs(125)),
            )
            .await
            .unwrap();
        assert_eq!(ticks, 3);
        assert_eq!(seen, [30, 0, 0]);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_before_first_boundary() {
        let ticker = MinuteTicker::new(FixedClock(at(8, 54, 0, 0)));
        let mut count = 0;
        let ticks = ticker
            .run(
                |_| {
                    count += 1;
                    Ok::<(), Infallible>(())
                },
                tokio::time::sleep(Duration::from_secs(10)),
            )
            .await
            .unwrap();
        assert_eq!(ticks, 1);
        assert_eq!(count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn callback_error_stops_the_loop() {
        let ticker = MinuteTicker::new(TestClock::starting_at(at(8, 54, 30, 0)));
        let mut count = 0;
        let result = ticker
            .run(
                |_| {
                    count += 1;
                    if count == 2 {
                        Err("output closed")
                    } else {
                        Ok(())
                    }
                },
                std::future::pending::<()>(),
            )
            .await;
        assert_eq!(result, Err("output closed"));
        assert_eq!(count, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn wall_clock_step_is_realigned() {
        let clock = TestClock::starting_at(at(8, 54, 30, 0));
        let step = Rc::clone(&clock.step_secs);
        let ticker = MinuteTicker::new(clock);
        let mut seen = Vec::new();
        // After the +30s tick the wall clock jumps 20s ahead. The +90s tick
        // lands on :20, so the next one is pulled in to +130s (:00).
        let ticks = ticker
            .run(
                |now| {
                    seen.push(now.second());
                    if seen.len() == 2 {
                        step.set(20);
                    }
                    Ok::<(), Infallible>(())
                },
                tokio::time::sleep(Duration::from_secs(135)),
            )
            .await
            .unwrap();
        assert_eq!(seen, [30, 0, 20, 0]);
        assert_eq!(ticks, 4);
    }
}
