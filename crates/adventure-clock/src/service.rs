//! The time service and its single-shot worker.

use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::{ClockConfig, ClockError};

/// `strftime` pattern for published times, e.g. `1:03pm, Tuesday, September 13, 2016`.
pub const TIME_FORMAT: &str = "%-I:%M%P, %A, %B %-d, %Y";

/// Formats `at` with [`TIME_FORMAT`].
pub fn format_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format(TIME_FORMAT).to_string()
}

/// A published time value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStamp {
    /// When the worker read the clock.
    pub at: DateTime<Local>,
    /// `at` rendered with [`TIME_FORMAT`].
    pub text: String,
    /// 1 for the first publish, then incremented by every worker.
    pub sequence: u64,
}

/// Contents of the shared slot.
#[derive(Debug, Default)]
struct Slot {
    latest: Option<TimeStamp>,
    publishes: u64,
}

/// Owner-side handle of the clock protocol.
///
/// Created once per process and dropped (or [`shutdown`](Self::shutdown))
/// at the end. Between requests the service holds the slot lock, so the
/// pending worker cannot run.
///
/// ## The lock handoff
///
/// The slot is guarded by a [`tokio::sync::Mutex`], and the service keeps
/// an [`OwnedMutexGuard`] in `guard` for as long as no request is running.
/// The worker for the *next* request is spawned right away, but the first
/// thing it does is `lock().await`, so it parks until the service lets go.
///
/// A request therefore goes through four steps:
///
/// 1. **Release**: drop `guard`. The parked worker can now take the lock.
/// 2. **Join**: await the worker's `JoinHandle`. Waiting on the task, not
///    on the lock, is what makes the value fresh: the lock could be free
///    before the worker ever ran, but the task only finishes after it has
///    read the clock and published.
/// 3. **Re-acquire**: lock the slot again and spawn the next worker, which
///    immediately parks behind the new guard.
/// 4. **Read**: take the value out of the slot. Taking (rather than
///    cloning) means a value can be handed out at most once.
///
/// Main never tries to lock while already holding the guard, so the two
/// actors cannot deadlock, and there is never more than one worker alive.
///
/// ## Failure
///
/// If a worker fails, the service is left without a worker and is marked
/// failed. Every later [`request`](Self::request) returns
/// [`ClockError::Stopped`] instead of touching the slot, so no stale value
/// can ever be returned as a success.
pub struct TimeService {
    config: ClockConfig,
    slot: Arc<Mutex<Slot>>,
    /// Main's exclusive hold. `None` only while a request is in flight.
    guard: Option<OwnedMutexGuard<Slot>>,
    /// The worker waiting for the next request.
    worker: Option<JoinHandle<Result<(), ClockError>>>,
    spawned: u64,
    failed: bool,
}

impl TimeService {
    /// Takes the lock and spawns the first worker. Must be called from
    /// within a Tokio runtime.
    pub async fn start(config: ClockConfig) -> Self {
        let slot = Arc::new(Mutex::new(Slot::default()));
        let guard = Arc::clone(&slot).lock_owned().await;
        let mut service = Self {
            config: config.validated(),
            slot,
            guard: Some(guard),
            worker: None,
            spawned: 0,
            failed: false,
        };
        service.worker = Some(service.spawn_worker());
        debug!(mirror = ?service.config.mirror_file, "time service started");
        service
    }

    /// Returns a time computed after this call began.
    ///
    /// Releases the lock, waits for the pending worker to finish its
    /// publish, takes the lock back, spawns the worker for the next
    /// request, and returns what was published.
    ///
    /// The first error puts the service into a failed state; from then
    /// on every call returns [`ClockError::Stopped`].
    pub async fn request(&mut self) -> Result<TimeStamp, ClockError> {
        if self.failed {
            return Err(ClockError::Stopped);
        }
        match self.handoff().await {
            Ok(stamp) => {
                debug!(sequence = stamp.sequence, time = %stamp.text, "time published");
                Ok(stamp)
            }
            Err(e) => {
                warn!(error = %e, "time service failed");
                self.failed = true;
                Err(e)
            }
        }
    }

    async fn handoff(&mut self) -> Result<TimeStamp, ClockError> {
        let worker = self.worker.take().ok_or(ClockError::Stopped)?;
        drop(self.guard.take());
        trace!("waiting on time worker");
        worker.await??;

        let mut guard = Arc::clone(&self.slot).lock_owned().await;
        self.worker = Some(self.spawn_worker());
        let stamp = guard.latest.take();
        self.guard = Some(guard);

        stamp.ok_or(ClockError::NothingPublished)
    }

    /// `true` once a request has failed. A failed service never recovers.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// `true` while the service holds the slot lock, which is always the
    /// case outside of [`request`](Self::request).
    pub fn holds_lock(&self) -> bool {
        self.guard.is_some()
    }

    /// Number of values published so far.
    pub fn publishes(&self) -> u64 {
        self.guard.as_ref().map_or(0, |slot| slot.publishes)
    }

    /// Number of workers spawned so far, including the pending one.
    pub fn workers_spawned(&self) -> u64 {
        self.spawned
    }

    /// Releases the lock and lets the pending worker run to completion.
    pub async fn shutdown(mut self) -> Result<(), ClockError> {
        drop(self.guard.take());
        if let Some(worker) = self.worker.take() {
            worker.await??;
        }
        debug!(workers = self.spawned, "time service stopped");
        Ok(())
    }

    fn spawn_worker(&mut self) -> JoinHandle<Result<(), ClockError>> {
        self.spawned += 1;
        tokio::spawn(publish(
            Arc::clone(&self.slot),
            self.config.mirror_file.clone(),
        ))
    }
}

/// Worker body: lock, read the clock, publish, unlock.
async fn publish(slot: Arc<Mutex<Slot>>, mirror: Option<PathBuf>) -> Result<(), ClockError> {
    let mut slot = slot.lock().await;
    let at = Local::now();
    let text = format_time(&at);

    if let Some(path) = mirror {
        tokio::fs::write(&path, format!("{text}\n"))
            .await
            .map_err(|source| ClockError::Publish { path, source })?;
    }

    slot.publishes += 1;
    slot.latest = Some(TimeStamp {
        at,
        text,
        sequence: slot.publishes,
    });
    Ok(())
}
