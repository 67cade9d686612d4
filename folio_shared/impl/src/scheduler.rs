use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use folio_di::Build;
use folio_shared_contracts::scheduler::{SchedulerService, Task, TimerSlot};
use folio_utils::trace_instrument;
use tokio::task::JoinHandle;
use tracing::trace;

/// Runs scheduled tasks on the tokio runtime.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone, Default, Build)]
pub struct TokioSchedulerService {
    #[state]
    timers: Arc<Mutex<HashMap<TimerSlot, JoinHandle<()>>>>,
}

impl TokioSchedulerService {
    fn timers(&self) -> MutexGuard<'_, HashMap<TimerSlot, JoinHandle<()>>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SchedulerService for TokioSchedulerService {
    #[trace_instrument(skip(self, task))]
    fn schedule(&self, slot: TimerSlot, delay: Duration, task: Task) {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trace!(%slot, "running scheduled task");
            task();
        });

        if let Some(previous) = self.timers().insert(slot, handle) {
            if !previous.is_finished() {
                trace!(%slot, "replacing pending task");
            }
            previous.abort();
        }
    }

    #[trace_instrument(skip(self))]
    fn cancel(&self, slot: TimerSlot) -> bool {
        self.timers().remove(&slot).is_some_and(|handle| {
            let pending = !handle.is_finished();
            handle.abort();
            pending
        })
    }
}
