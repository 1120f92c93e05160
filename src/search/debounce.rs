// src/search/debounce.rs

//! Call coalescing for search-as-you-type.
//!
//! A [`Debounced`] wrapper owns at most one pending timer. Every call aborts
//! the pending timer, if any, and arms a new one carrying the latest
//! arguments. The callback runs once the caller has been quiet for `wait`.
//!
//! ```text
//! Idle ──call──▶ Pending ──call──▶ Pending (timer reset, args replaced)
//!                   │
//!                   └──wait elapsed──▶ callback(last args) ──▶ Idle
//! ```
//!
//! There is no cancel or flush: after the last call the pending timer still
//! fires once.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

/// Observable state of a debounced wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// No timer armed
    Idle,
    /// A timer is armed and has not fired yet
    Pending,
}

/// Wrap `f` so bursts of calls collapse into one call after `wait` of quiet.
///
/// Multi-argument callbacks take a tuple. Each call to `debounce` creates an
/// independent wrapper with its own timer.
pub fn debounce<A, F>(f: F, wait: Duration) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced::new(f, wait)
}

/// Debounce an asynchronous callback.
///
/// When the timer fires the future is spawned detached: nothing awaits it and
/// later calls never cancel it. A failed future is reported through
/// `log::warn!`.
pub fn debounce_async<A, F, Fut, E>(f: F, wait: Duration) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: fmt::Display + Send + 'static,
{
    Debounced::new(
        move |args| {
            let task = f(args);
            tokio::spawn(async move {
                if let Err(e) = task.await {
                    log::warn!("Debounced task failed: {}", e);
                }
            });
        },
        wait,
    )
}

/// A callback wrapper holding a single replaceable pending invocation.
///
/// Clones share the same timer slot.
pub struct Debounced<A> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    callback: Arc<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debounced<A> {
    /// Create a wrapper around `f`.
    pub fn new<F>(f: F, wait: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                callback: Arc::new(f),
                wait,
                pending: Mutex::new(None),
            }),
        }
    }

    /// Quiet period before the callback fires.
    pub fn wait(&self) -> Duration {
        self.inner.wait
    }

    /// Record a call, restarting the quiet period with `args`.
    ///
    /// Must run inside a tokio runtime; otherwise the call is dropped with a
    /// warning.
    pub fn call(&self, args: A) {
        let Ok(runtime) = Handle::try_current() else {
            log::warn!("Debounced call dropped: no tokio runtime is running");
            return;
        };

        let callback = Arc::clone(&self.inner.callback);

        let mut pending = self.lock_pending();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        // Taken under the lock: the last caller to lock holds the latest deadline.
        let deadline = Instant::now() + self.inner.wait;
        *pending = Some(runtime.spawn(async move {
            sleep_until(deadline).await;
            callback(args);
        }));
    }

    /// Whether a timer is currently armed.
    pub fn state(&self) -> DebounceState {
        match self.lock_pending().as_ref() {
            Some(timer) if !timer.is_finished() => DebounceState::Pending,
            _ => DebounceState::Idle,
        }
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.inner.wait)
            .finish_non_exhaustive()
    }
}
