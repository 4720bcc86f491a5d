//! [`ReadinessCoordinator`] implementation.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::marshal::{ReadyCallback, ReadyForwarder};
use crate::signal::{ReadySignal, SubscriptionHandle};

/// Bridges a one-shot "resource ready" callback to a set of reactions.
///
/// The handle type `H` is whatever the resource owner produces, typically a
/// cheap clonable reference to the ready map.
///
/// # Threading
///
/// Every method is memory-safe from any thread, but reactions run on
/// whichever thread calls [`on_external_ready`](Self::on_external_ready) or
/// [`add_reaction`](Self::add_reaction). Drive the coordinator from a single
/// event thread. When the resource owner reports readiness from a worker
/// thread, hand it the [`ReadyCallback`] from [`marshalled`](Self::marshalled)
/// and run the paired [`ReadyForwarder`] on the event thread instead of
/// calling `on_external_ready` directly.
pub struct ReadinessCoordinator<H> {
    signal: ReadySignal<H>,
    reactions: Mutex<Vec<SubscriptionHandle>>,
    torn_down: AtomicBool,
}

impl<H> Default for ReadinessCoordinator<H> {
    fn default() -> Self {
        Self {
            signal: ReadySignal::default(),
            reactions: Mutex::new(Vec::new()),
            torn_down: AtomicBool::new(false),
        }
    }
}

impl<H> fmt::Debug for ReadinessCoordinator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadinessCoordinator")
            .field("signal", &self.signal)
            .field("reactions", &self.reactions.lock().len())
            .field("torn_down", &self.is_torn_down())
            .finish()
    }
}

impl<H> ReadinessCoordinator<H>
where
    H: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the external resource is ready.
    ///
    /// Expected at most once per resource lifetime. Repeat calls are emitted
    /// as-is; after teardown no reaction remains to observe them.
    ///
    /// Reactions run synchronously on the calling thread, so call this from
    /// the event thread. Callers on other threads go through
    /// [`marshalled`](Self::marshalled).
    pub fn on_external_ready(&self, handle: H) {
        if self.is_torn_down() {
            debug!("Resource became ready after teardown; no reactions remain");
        } else {
            info!(
                reactions = self.reaction_count(),
                "External resource ready"
            );
        }
        self.signal.emit(handle);
    }

    /// Register a reaction to run with the ready handle.
    ///
    /// Runs before returning if the resource is already ready, otherwise as
    /// soon as it becomes ready. Returns `None` if the coordinator is torn
    /// down, either before this call (the reaction never runs) or by the
    /// reaction itself during its replay. In both cases nothing stays
    /// registered.
    pub fn add_reaction<F>(&self, reaction: F) -> Option<SubscriptionHandle>
    where
        F: Fn(&H) + Send + Sync + 'static,
    {
        if self.is_torn_down() {
            warn!("Reaction added after teardown; ignoring");
            return None;
        }

        let handle = self.signal.subscribe(reaction);
        self.reactions.lock().push(handle);

        // Torn down by the replay or by a concurrent teardown; the push above
        // may have landed after teardown emptied the list.
        if self.is_torn_down() {
            self.reactions.lock().retain(|h| *h != handle);
            self.signal.unsubscribe(handle);
            return None;
        }

        debug!(ready = self.signal.is_ready(), "Reaction registered");
        Some(handle)
    }

    /// Remove a single reaction. Unknown handles are ignored.
    pub fn remove_reaction(&self, handle: SubscriptionHandle) {
        self.reactions.lock().retain(|h| *h != handle);
        self.signal.unsubscribe(handle);
    }

    /// Release every reaction. Safe to call repeatedly.
    pub fn teardown(&self) {
        if self.torn_down.swap(true, Ordering::AcqRel) {
            return;
        }

        let handles = std::mem::take(&mut *self.reactions.lock());
        for handle in &handles {
            self.signal.unsubscribe(*handle);
        }
        let stragglers = self.signal.clear();

        info!(
            reactions = handles.len(),
            stragglers,
            ready = self.signal.is_ready(),
            "Readiness coordinator torn down"
        );
    }

    /// Pair a thread-safe one-shot callback with a forwarder that delivers
    /// its value on whichever task runs [`ReadyForwarder::run`].
    ///
    /// Cancelling `cancel` ends the forwarder without delivering.
    pub fn marshalled(
        self: &Arc<Self>,
        cancel: CancellationToken,
    ) -> (ReadyCallback<H>, ReadyForwarder<H>) {
        let (tx, rx) = oneshot::channel();
        (
            ReadyCallback::new(tx),
            ReadyForwarder::new(rx, Arc::clone(self), cancel),
        )
    }

    /// The ready handle, once known.
    pub fn ready_handle(&self) -> Option<H> {
        self.signal.current()
    }
}

impl<H> ReadinessCoordinator<H> {
    pub fn is_ready(&self) -> bool {
        self.signal.is_ready()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::Acquire)
    }

    /// Number of reactions still registered.
    pub fn reaction_count(&self) -> usize {
        self.reactions.lock().len()
    }
}
