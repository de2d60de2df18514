//! Press-and-hold auto-repeat.
//!
//! A press runs its step immediately; [`HoldRepeat`] then schedules the
//! repeats: one after [`INITIAL_DELAY`], then one every [`REPEAT_INTERVAL`]
//! until released. Times are passed in so the schedule is testable.

use std::time::{Duration, Instant};

pub const INITIAL_DELAY: Duration = Duration::from_millis(150);
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy)]
struct Held<T> {
    target: T,
    next_fire: Instant,
}

/// Repeat schedule for at most one held target.
#[derive(Debug, Clone, Copy)]
pub struct HoldRepeat<T> {
    held: Option<Held<T>>,
}

impl<T> Default for HoldRepeat<T> {
    fn default() -> Self {
        Self { held: None }
    }
}

impl<T: Copy> HoldRepeat<T> {
    /// Begin holding `target`, replacing any previous hold.
    pub fn start(&mut self, target: T, now: Instant) {
        self.held = Some(Held {
            target,
            next_fire: now + INITIAL_DELAY,
        });
    }

    pub fn stop(&mut self) {
        self.held = None;
    }

    pub fn is_active(&self) -> bool {
        self.held.is_some()
    }

    /// Number of repeats due at `now` for the held target.
    ///
    /// Catches up if several intervals passed since the last poll.
    pub fn poll(&mut self, now: Instant) -> Option<(T, u32)> {
        let held = self.held.as_mut()?;
        let mut fired = 0;
        while held.next_fire <= now {
            fired += 1;
            held.next_fire += REPEAT_INTERVAL;
        }
        (fired > 0).then_some((held.target, fired))
    }

    /// How long the event loop may sleep before the next repeat.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.held
            .as_ref()
            .map(|held| held.next_fire.saturating_duration_since(now))
    }
}
