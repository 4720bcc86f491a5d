//! Moving a readiness callback from the resource owner's thread onto the
//! event loop.

use std::fmt;
use std::sync::Arc;

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::readiness::ReadinessCoordinator;

/// One-shot completion callback handed to the resource owner.
///
/// `ready` consumes the callback, so the resource can signal at most once.
/// Dropping it without calling `ready` means the resource never became
/// ready; the paired forwarder then finishes without delivering.
pub struct ReadyCallback<H> {
    tx: oneshot::Sender<H>,
}

impl<H> ReadyCallback<H> {
    pub(super) fn new(tx: oneshot::Sender<H>) -> Self {
        Self { tx }
    }

    /// Signal readiness. Callable from any thread.
    pub fn ready(self, handle: H) {
        if self.tx.send(handle).is_err() {
            debug!("Readiness forwarder already gone; dropping ready handle");
        }
    }

    /// Whether the forwarder has stopped listening.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<H> fmt::Debug for ReadyCallback<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadyCallback")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Receiving half of a [`ReadyCallback`], bound to its coordinator.
///
/// Run it on the event loop; it calls
/// [`ReadinessCoordinator::on_external_ready`] there.
pub struct ReadyForwarder<H> {
    rx: oneshot::Receiver<H>,
    coordinator: Arc<ReadinessCoordinator<H>>,
    cancel: CancellationToken,
}

impl<H> fmt::Debug for ReadyForwarder<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadyForwarder")
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

impl<H> ReadyForwarder<H>
where
    H: Clone + Send + Sync + 'static,
{
    pub(super) fn new(
        rx: oneshot::Receiver<H>,
        coordinator: Arc<ReadinessCoordinator<H>>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            rx,
            coordinator,
            cancel,
        }
    }

    /// Wait for readiness and forward it.
    ///
    /// Returns `true` if a handle was delivered to the coordinator, `false`
    /// if the callback was dropped or `cancel` fired first.
    pub async fn run(self) -> bool {
        let Self {
            rx,
            coordinator,
            cancel,
        } = self;

        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                debug!("Readiness forwarding cancelled");
                false
            }
            result = rx => match result {
                Ok(handle) => {
                    coordinator.on_external_ready(handle);
                    true
                }
                Err(_) => {
                    debug!("Ready callback dropped without signalling");
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_forwards_handle_from_another_thread() {
        let coordinator = Arc::new(ReadinessCoordinator::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        coordinator.add_reaction(move |h: &u32| {
            assert_eq!(*h, 7);
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        let (callback, forwarder) = coordinator.marshalled(CancellationToken::new());
        let owner = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(10));
            callback.ready(7);
        });

        assert!(forwarder.run().await);
        owner.join().expect("owner thread should not panic");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_reactions_run_on_forwarder_thread() {
        let coordinator = Arc::new(ReadinessCoordinator::new());
        let ran_on = Arc::new(parking_lot::Mutex::new(None));
        {
            let ran_on = Arc::clone(&ran_on);
            coordinator.add_reaction(move |_: &u32| {
                *ran_on.lock() = Some(std::thread::current().id());
            });
        }

        let (callback, forwarder) = coordinator.marshalled(CancellationToken::new());
        let owner = std::thread::spawn(move || {
            callback.ready(3);
            std::thread::current().id()
        });

        assert!(forwarder.run().await);
        let owner_id = owner.join().expect("owner thread should not panic");
        let ran_on = ran_on.lock().expect("reaction should have run");
        assert_eq!(ran_on, std::thread::current().id());
        assert_ne!(ran_on, owner_id);
    }

    #[tokio::test]
    async fn test_dropped_callback_ends_forwarder() {
        let coordinator: Arc<ReadinessCoordinator<u32>> = Arc::new(ReadinessCoordinator::new());
        let (callback, forwarder) = coordinator.marshalled(CancellationToken::new());
        drop(callback);

        assert!(!forwarder.run().await);
        assert!(!coordinator.is_ready());
    }

    #[tokio::test]
    async fn test_cancel_wins_over_pending_callback() {
        let coordinator: Arc<ReadinessCoordinator<u32>> = Arc::new(ReadinessCoordinator::new());
        let cancel = CancellationToken::new();
        let (callback, forwarder) = coordinator.marshalled(cancel.clone());

        cancel.cancel();
        assert!(!forwarder.run().await);

        assert!(callback.is_closed());
        callback.ready(1);
        assert!(!coordinator.is_ready());
    }
}
