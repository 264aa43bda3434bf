//! Time source and story id generation.
//!
//! Story ids are creation timestamps in milliseconds. Two submissions in
//! the same millisecond would collide, so the generator never hands out an
//! id that is already in use.

use std::cell::Cell;

use crate::story::StoryId;

/// Source of the current wall-clock time.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    millis: Cell<i64>,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: Cell::new(millis),
        }
    }

    pub fn set(&self, millis: i64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }
}

/// Issues clock-based story ids that never collide with ids in use.
#[derive(Debug)]
pub struct IdGenerator<C: Clock> {
    clock: C,
    /// Lowest and highest id issued or observed so far.
    used: Option<(i64, i64)>,
}

impl<C: Clock> IdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, used: None }
    }

    /// Record an id already in use so it is never issued again.
    pub fn observe(&mut self, id: StoryId) {
        self.used = Some(match self.used {
            Some((low, high)) => (low.min(id.0), high.max(id.0)),
            None => (id.0, id.0),
        });
    }

    /// Issue the next id.
    ///
    /// This is the current time when it lies above every used id, otherwise
    /// one past the highest used id. Once the highest id is `i64::MAX`, ids
    /// are taken from below the lowest used id instead.
    pub fn next_id(&mut self) -> StoryId {
        let now = self.clock.now_millis();
        let id = match self.used {
            None => now,
            Some((_, high)) if now > high => now,
            Some((low, high)) => match high.checked_add(1) {
                Some(next) => next,
                None => match low.checked_sub(1) {
                    Some(below) => below,
                    // both ends of the i64 range are in use
                    None => now,
                },
            },
        };
        self.observe(StoryId(id));
        StoryId(id)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
