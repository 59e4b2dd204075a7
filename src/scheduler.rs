//! Scheduler adapter: the periodic-tick primitive behind the engine
//!
//! The engine never talks to a runtime directly. Components are driven
//! through the `Scheduler` seam, so production code runs on tokio while tests
//! drive ticks by hand with `ManualScheduler`.

use log::trace;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// A recurring callback, fired once per second while scheduled.
pub type TickFn = Box<dyn FnMut() + Send>;

/// Handle to one scheduled recurring tick.
///
/// `cancel` stops the exact callback that was started; dropping the handle
/// without cancelling leaves the tick running. Holding the handle is what
/// ties a component's `running` flag to a live callback.
pub struct TickHandle {
    cancel: Box<dyn FnOnce() + Send>,
}

impl TickHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Box::new(cancel),
        }
    }

    /// Stop the scheduled callback.
    pub fn cancel(self) {
        (self.cancel)();
    }
}

/// Start and cancel recurring 1 Hz callbacks.
pub trait Scheduler: Send + Sync {
    fn every_second(&self, tick: TickFn) -> TickHandle;
}

/// Production scheduler backed by `tokio::time::interval`.
///
/// Must be used from within a tokio runtime. Missed ticks are skipped with
/// no catch-up burst: a process suspended for a while resumes ticking at the
/// next whole second.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl TokioScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for TokioScheduler {
    fn every_second(&self, mut tick: TickFn) -> TickHandle {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick resolves immediately; consume it so the
            // callback cadence starts one second from now.
            interval.tick().await;
            loop {
                interval.tick().await;
                tick();
            }
        });
        TickHandle::new(move || {
            trace!("cancelling scheduled tick");
            task.abort();
        })
    }
}

struct ManualTick {
    alive: Arc<AtomicBool>,
    tick: TickFn,
}

#[derive(Default)]
struct ManualInner {
    next_id: u64,
    ticks: HashMap<u64, ManualTick>,
}

/// Hand-driven scheduler: callbacks fire only when `fire_all` is called.
///
/// Used by tests and headless embedders that own their own loop. A callback
/// is checked out of the registry while it runs, so it may cancel its own
/// handle (or start new ticks) without deadlocking.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live scheduled callbacks.
    pub fn active_ticks(&self) -> usize {
        self.lock().ticks.len()
    }

    /// Fire every live callback once, in registration order.
    pub fn fire_all(&self) {
        let mut ids: Vec<u64> = self.lock().ticks.keys().copied().collect();
        ids.sort_unstable();

        for id in ids {
            let entry = self.lock().ticks.remove(&id);
            let Some(mut entry) = entry else { continue };
            if entry.alive.load(Ordering::SeqCst) {
                (entry.tick)();
            }
            // Re-insert unless the callback cancelled itself while it ran.
            if entry.alive.load(Ordering::SeqCst) {
                self.lock().ticks.insert(id, entry);
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Scheduler for ManualScheduler {
    fn every_second(&self, tick: TickFn) -> TickHandle {
        let alive = Arc::new(AtomicBool::new(true));
        let id = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.ticks.insert(
                id,
                ManualTick {
                    alive: alive.clone(),
                    tick,
                },
            );
            id
        };

        let registry = self.inner.clone();
        TickHandle::new(move || {
            alive.store(false, Ordering::SeqCst);
            registry
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .ticks
                .remove(&id);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU64;

    #[test]
    fn manual_ticks_fire_on_demand_and_cancel_exactly() {
        let scheduler = ManualScheduler::new();
        let count = Arc::new(AtomicU64::new(0));

        let c = count.clone();
        let handle = scheduler.every_second(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(scheduler.active_ticks(), 1);

        scheduler.fire_all();
        scheduler.fire_all();
        assert_eq!(count.load(Ordering::SeqCst), 2);

        handle.cancel();
        assert_eq!(scheduler.active_ticks(), 0);
        scheduler.fire_all();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn manual_tick_may_cancel_itself_while_firing() {
        let scheduler = ManualScheduler::new();
        let handle: Arc<Mutex<Option<TickHandle>>> = Arc::new(Mutex::new(None));

        let slot = handle.clone();
        let started = scheduler.every_second(Box::new(move || {
            if let Some(h) = slot.lock().unwrap().take() {
                h.cancel();
            }
        }));
        *handle.lock().unwrap() = Some(started);

        scheduler.fire_all();
        assert_eq!(scheduler.active_ticks(), 0);
        scheduler.fire_all(); // nothing left to fire
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_ticks_once_per_second_until_cancelled() {
        let scheduler = TokioScheduler::new();
        let count = Arc::new(AtomicU64::new(0));

        let c = count.clone();
        let handle = scheduler.every_second(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        // Paused-clock auto-advance drives the interval deterministically.
        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        handle.cancel();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
