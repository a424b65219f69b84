// SPDX-License-Identifier: MPL-2.0
//! Auto-hide timers.
//!
//! The controller does not own a clock or a thread. It asks a [`Timer`] to
//! start and cancel deadlines, and on every tick asks which ones expired.
//! Iced hosts drive the tick from a `time::every` subscription.

use super::notification::ToastKey;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Handle identifying one started timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Timer service used by the notification controller.
pub trait Timer {
    /// Starts a timer that expires `after` from now for `key`.
    fn start(&mut self, key: ToastKey, after: Duration) -> TimerHandle;

    /// Cancels a timer. Unknown or already expired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Removes and returns the keys whose timers expired, oldest deadline first.
    fn expired(&mut self) -> Vec<ToastKey>;

    /// Number of timers still running.
    fn pending(&self) -> usize;
}

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock advanced by hand. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Moves time forward for every clone of this clock.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

#[derive(Debug, Clone, Copy)]
struct Deadline {
    handle: TimerHandle,
    key: ToastKey,
    at: Instant,
}

/// Timer keeping a list of deadlines checked against a [`Clock`].
#[derive(Debug)]
pub struct DeadlineTimer<C: Clock = SystemClock> {
    clock: C,
    deadlines: Vec<Deadline>,
    next_handle: u64,
}

impl DeadlineTimer<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DeadlineTimer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DeadlineTimer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            deadlines: Vec::new(),
            next_handle: 0,
        }
    }
}

impl<C: Clock> Timer for DeadlineTimer<C> {
    fn start(&mut self, key: ToastKey, after: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.deadlines.push(Deadline {
            handle,
            key,
            at: self.clock.now() + after,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.deadlines.retain(|d| d.handle != handle);
    }

    fn expired(&mut self) -> Vec<ToastKey> {
        let now = self.clock.now();
        let (mut due, running): (Vec<Deadline>, Vec<Deadline>) =
            std::mem::take(&mut self.deadlines)
                .into_iter()
                .partition(|d| d.at <= now);
        self.deadlines = running;
        // Stable sort keeps start order for equal deadlines.
        due.sort_by_key(|d| d.at);
        due.into_iter().map(|d| d.key).collect()
    }

    fn pending(&self) -> usize {
        self.deadlines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u32) -> ToastKey {
        ToastKey::from_parts(0, n)
    }

    #[test]
    fn nothing_expires_before_deadline() {
        let clock = ManualClock::new();
        let mut timer = DeadlineTimer::with_clock(clock.clone());
        timer.start(key(1), Duration::from_millis(2000));

        clock.advance(Duration::from_millis(1999));
        assert!(timer.expired().is_empty());
        assert_eq!(timer.pending(), 1);
    }

    #[test]
    fn expires_at_deadline_and_only_once() {
        let clock = ManualClock::new();
        let mut timer = DeadlineTimer::with_clock(clock.clone());
        timer.start(key(1), Duration::from_millis(2000));

        clock.advance(Duration::from_millis(2000));
        assert_eq!(timer.expired(), vec![key(1)]);
        assert!(timer.expired().is_empty());
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn expired_keys_are_ordered_by_deadline() {
        let clock = ManualClock::new();
        let mut timer = DeadlineTimer::with_clock(clock.clone());
        timer.start(key(1), Duration::from_millis(300));
        timer.start(key(2), Duration::from_millis(100));
        timer.start(key(3), Duration::from_millis(200));

        clock.advance(Duration::from_secs(1));
        assert_eq!(timer.expired(), vec![key(2), key(3), key(1)]);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let clock = ManualClock::new();
        let mut timer = DeadlineTimer::with_clock(clock.clone());
        let handle = timer.start(key(1), Duration::from_millis(10));
        timer.cancel(handle);
        timer.cancel(handle);

        clock.advance(Duration::from_secs(1));
        assert!(timer.expired().is_empty());
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let before = other.now();
        clock.advance(Duration::from_millis(5));
        assert_eq!(other.now() - before, Duration::from_millis(5));
    }
}
