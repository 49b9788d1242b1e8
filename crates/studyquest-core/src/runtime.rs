//! Serialized execution context for the engine.
//!
//! [`spawn`] moves a [`Store`] into a single tokio task. User commands are
//! queued over an mpsc channel and timer ticks come from an interval inside
//! the same `select!` loop, so a tick can never interleave with a
//! user-initiated mutation.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use uuid::Uuid;

use crate::error::{ActionError, StoreClosed};
use crate::events::{EventBus, Notification};
use crate::model::PomodoroConfiguration;
use crate::storage::Snapshot;
use crate::store::Store;
use crate::timer::TimerMode;

type Job = Box<dyn FnOnce(&mut Store) + Send>;

/// Pending commands before senders wait.
const QUEUE_DEPTH: usize = 64;

/// Cloneable handle to a running store task.
///
/// The task stops once every handle is dropped and hands the store back
/// through its [`JoinHandle`].
#[derive(Debug, Clone)]
pub struct StoreHandle {
    jobs: mpsc::Sender<Job>,
    bus: EventBus,
}

/// Run `store` on its own task, ticking the timer every `tick_interval`.
pub fn spawn(mut store: Store, tick_interval: Duration) -> (StoreHandle, JoinHandle<Store>) {
    let (jobs, mut queue) = mpsc::channel::<Job>(QUEUE_DEPTH);
    let handle = StoreHandle {
        jobs,
        bus: store.bus().clone(),
    };

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::debug!(?tick_interval, "store task started");
        loop {
            tokio::select! {
                job = queue.recv() => match job {
                    Some(job) => job(&mut store),
                    None => break,
                },
                _ = ticker.tick() => {
                    store.tick();
                }
            }
        }
        tracing::debug!("store task stopped");
        store
    });

    (handle, task)
}

impl StoreHandle {
    /// Run `f` against the store on its task and return the result.
    pub async fn call<R, F>(&self, f: F) -> Result<R, StoreClosed>
    where
        R: Send + 'static,
        F: FnOnce(&mut Store) -> R + Send + 'static,
    {
        let (reply, response) = oneshot::channel();
        let job: Job = Box::new(move |store| {
            // The caller may have gone away; nothing to do then.
            let _ = reply.send(f(store));
        });
        self.jobs.send(job).await.map_err(|_| StoreClosed)?;
        response.await.map_err(|_| StoreClosed)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.bus.subscribe()
    }

    pub async fn snapshot(&self) -> Result<Snapshot, StoreClosed> {
        self.call(|store| store.snapshot().clone()).await
    }

    pub async fn add_task(
        &self,
        title: String,
        subject_id: Uuid,
        expected_minutes: u32,
    ) -> Result<Result<Uuid, ActionError>, StoreClosed> {
        self.call(move |store| store.add_task(&title, subject_id, expected_minutes))
            .await
    }

    pub async fn toggle_task(&self, task_id: Uuid) -> Result<Result<bool, ActionError>, StoreClosed> {
        self.call(move |store| store.toggle_task(task_id)).await
    }

    pub async fn gain_xp(&self, amount: u32) -> Result<(), StoreClosed> {
        self.call(move |store| store.gain_xp(amount)).await
    }

    pub async fn update_pomodoro(
        &self,
        config: PomodoroConfiguration,
    ) -> Result<Result<(), ActionError>, StoreClosed> {
        self.call(move |store| store.update_pomodoro(config)).await
    }

    pub async fn start_timer(&self, mode: TimerMode) -> Result<(), StoreClosed> {
        self.call(move |store| store.start_timer(mode)).await
    }

    pub async fn pause_timer(&self) -> Result<Result<(), ActionError>, StoreClosed> {
        self.call(|store| store.pause_timer()).await
    }

    pub async fn resume_timer(&self) -> Result<Result<(), ActionError>, StoreClosed> {
        self.call(|store| store.resume_timer()).await
    }

    pub async fn stop_timer(&self) -> Result<(), StoreClosed> {
        self.call(|store| store.stop_timer()).await
    }
}
