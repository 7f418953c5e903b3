use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

pub const DEFAULT_DEBOUNCE_WAIT: Duration = Duration::from_millis(300);

/// Collapses bursts of calls into one trailing call.
///
/// Every [`Debouncer::call`] aborts the pending invocation, if any, and
/// schedules a fresh one `wait` later with the newest arguments. Only the
/// last call of a burst ever reaches the callback. Must be called from
/// within a tokio runtime.
pub struct Debouncer<A> {
    callback: Arc<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// Wraps `callback` in a [`Debouncer`] with the given quiet period.
pub fn debounce<A, F>(callback: F, wait: Duration) -> Debouncer<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debouncer::new(callback, wait)
}

impl<A> Debouncer<A>
where
    A: Send + 'static,
{
    pub fn new<F>(callback: F, wait: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            wait,
            pending: Mutex::new(None),
        }
    }

    pub fn with_default_wait<F>(callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::new(callback, DEFAULT_DEBOUNCE_WAIT)
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn call(&self, args: A) {
        let callback = self.callback.clone();
        let wait = self.wait;
        let next = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback(args);
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.replace(next) {
            if !previous.is_finished() {
                trace!("debounced call superseded");
            }
            previous.abort();
        }
    }
}
