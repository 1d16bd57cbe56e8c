//! Observable screen state and the load sequencing shared by every screen.
//!
//! # Design
//! `StateController<T>` is a single-value publish/subscribe store built on a
//! `tokio::sync::watch` channel. Consumers get read-only views (`state`,
//! `subscribe`); the only writer is [`StateController::launch`].
//!
//! Overlapping launches are sequenced: each launch takes the next number,
//! and a completion is applied only when its number is higher than the last
//! one applied. A stale result that resolves after a newer one is dropped.
//! `loading` stays true while any launch is still outstanding.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// What a screen renders from: the loaded data plus a loading flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState<T> {
    pub data: T,
    pub loading: bool,
}

#[derive(Debug, Default)]
struct LoadTracker {
    next_seq: u64,
    applied_seq: u64,
    in_flight: usize,
}

struct Shared<T> {
    state: watch::Sender<ScreenState<T>>,
    tracker: Mutex<LoadTracker>,
}

/// One outstanding launch. Releasing it decrements the in-flight count
/// and recomputes `loading`; that happens on completion, abort and unwind.
struct LoadSlot<T> {
    shared: Arc<Shared<T>>,
    seq: u64,
    released: bool,
}

impl<T> LoadSlot<T> {
    fn complete(mut self, data: T) {
        self.released = true;
        let mut tracker = self.shared.tracker.lock();
        tracker.in_flight -= 1;
        let update = if self.seq > tracker.applied_seq {
            tracker.applied_seq = self.seq;
            Some(data)
        } else {
            tracing::debug!(seq = self.seq, applied = tracker.applied_seq, "discarding superseded load result");
            None
        };
        let loading = tracker.in_flight > 0;
        self.shared.state.send_modify(move |state| {
            if let Some(data) = update {
                state.data = data;
            }
            state.loading = loading;
        });
    }
}

impl<T> Drop for LoadSlot<T> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        let mut tracker = self.shared.tracker.lock();
        tracker.in_flight -= 1;
        let loading = tracker.in_flight > 0;
        tracing::debug!(seq = self.seq, "load ended without a result");
        self.shared.state.send_modify(|state| state.loading = loading);
    }
}

/// Owner of one screen's [`ScreenState`].
pub struct StateController<T> {
    shared: Arc<Shared<T>>,
}

impl<T> StateController<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                state: watch::Sender::new(ScreenState::default()),
                tracker: Mutex::new(LoadTracker::default()),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ScreenState<T> {
        self.shared.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.borrow().loading
    }

    /// A receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState<T>> {
        self.shared.state.subscribe()
    }

    /// Wait until no load is outstanding and return the state at that point.
    pub async fn settled(&self) -> ScreenState<T> {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(|state| !state.loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }

    /// Mark the screen as loading, then run `work` on the Tokio runtime and
    /// publish its output when it resolves.
    ///
    /// `loading` is already true when this returns. The returned handle may
    /// be awaited or dropped; dropping it does not cancel the load. If the
    /// task is aborted or `work` panics, nothing is published and the load
    /// no longer counts towards `loading`.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn launch<F>(&self, work: F) -> JoinHandle<()>
    where
        F: Future<Output = T> + Send + 'static,
    {
        let seq = {
            let mut tracker = self.shared.tracker.lock();
            tracker.next_seq += 1;
            tracker.in_flight += 1;
            self.shared.state.send_modify(|state| state.loading = true);
            tracker.next_seq
        };

        let slot = LoadSlot {
            shared: Arc::clone(&self.shared),
            seq,
            released: false,
        };
        tokio::spawn(async move {
            let data = work.await;
            slot.complete(data);
        })
    }
}

impl<T> Default for StateController<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for StateController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateController")
            .field("state", &*self.shared.state.borrow())
            .finish_non_exhaustive()
    }
}
