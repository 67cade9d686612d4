use std::{fmt, time::Duration};

/// A deferred piece of work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Identifies a timer. Each slot holds at most one pending task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerSlot(&'static str);

impl TimerSlot {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TimerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SchedulerService: Send + Sync + 'static {
    /// Runs `task` once `delay` has elapsed.
    ///
    /// A task still pending in the same `slot` is cancelled and replaced.
    fn schedule(&self, slot: TimerSlot, delay: Duration, task: Task);

    /// Cancels the task pending in `slot`. Returns whether a task was pending.
    fn cancel(&self, slot: TimerSlot) -> bool;
}

#[cfg(feature = "mock")]
impl MockSchedulerService {
    /// Expects one task in `slot` and runs it immediately.
    pub fn with_schedule_now(mut self, slot: TimerSlot, delay: Duration) -> Self {
        self.expect_schedule()
            .once()
            .with(
                mockall::predicate::eq(slot),
                mockall::predicate::eq(delay),
                mockall::predicate::always(),
            )
            .returning(|_, _, task| task());
        self
    }

    pub fn with_cancel(mut self, slot: TimerSlot, pending: bool) -> Self {
        self.expect_cancel()
            .once()
            .with(mockall::predicate::eq(slot))
            .return_const(pending);
        self
    }
}
