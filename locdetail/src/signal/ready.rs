//! [`ReadySignal`] implementation.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

/// Callback invoked with each delivered value.
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync + 'static>;

/// Opaque token identifying one subscription.
///
/// Passing it to [`ReadySignal::unsubscribe`] more than once is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

struct Subscriber<T> {
    id: u64,
    /// Sequence number of the last emission this subscriber received.
    delivered: u64,
    listener: Listener<T>,
}

struct State<T> {
    latest: Option<(u64, T)>,
    last_seq: u64,
    next_id: u64,
    subscribers: Vec<Subscriber<T>>,
    /// True while some call to `emit` is walking the subscriber list.
    dispatching: bool,
    /// Emissions raised during an in-flight delivery, in emission order.
    pending: VecDeque<(u64, T)>,
}

/// Replay-latest publish/subscribe channel.
///
/// Listeners are never invoked while the internal lock is held, so a
/// listener may freely emit, subscribe or unsubscribe on the same signal.
/// An emission raised from inside a listener is queued and delivered after
/// the current one finishes, keeping every listener's view in emission order.
pub struct ReadySignal<T> {
    state: Mutex<State<T>>,
}

impl<T> Default for ReadySignal<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(State {
                latest: None,
                last_seq: 0,
                next_id: 0,
                subscribers: Vec::new(),
                dispatching: false,
                pending: VecDeque::new(),
            }),
        }
    }
}

impl<T> fmt::Debug for ReadySignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ReadySignal")
            .field("ready", &state.latest.is_some())
            .field("emissions", &state.last_seq)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

impl<T: Clone> ReadySignal<T> {
    /// Create an empty signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` as the latest and deliver it to current subscribers.
    ///
    /// Subscribers are visited in subscription order. A subscriber removed
    /// part way through is not invoked; the others are each invoked once.
    pub fn emit(&self, value: T) {
        let mut next = {
            let mut state = self.state.lock();
            state.last_seq += 1;
            let seq = state.last_seq;
            state.latest = Some((seq, value.clone()));

            if state.dispatching {
                trace!(seq, "Emission queued behind in-flight delivery");
                state.pending.push_back((seq, value));
                return;
            }

            state.dispatching = true;
            debug!(
                seq,
                subscribers = state.subscribers.len(),
                "ReadySignal emitting"
            );
            (seq, value)
        };

        let mut guard = DispatchGuard {
            state: &self.state,
            armed: true,
        };

        loop {
            self.deliver(next.0, &next.1);

            let mut state = self.state.lock();
            match state.pending.pop_front() {
                Some(queued) => next = queued,
                None => {
                    state.dispatching = false;
                    guard.armed = false;
                    break;
                }
            }
        }
    }

    /// Register `listener` for future values.
    ///
    /// If a value has already been emitted, `listener` receives it before
    /// this call returns.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionHandle
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let listener: Listener<T> = Arc::new(listener);

        let (id, replay) = {
            let mut state = self.state.lock();
            state.next_id += 1;
            let id = state.next_id;
            let replay = state.latest.clone();
            state.subscribers.push(Subscriber {
                id,
                delivered: replay.as_ref().map_or(0, |(seq, _)| *seq),
                listener: Arc::clone(&listener),
            });
            (id, replay)
        };

        if let Some((seq, value)) = replay {
            if self.is_subscribed(id) {
                trace!(id, seq, "Replaying latest value to new subscriber");
                listener(&value);
            }
        }

        SubscriptionHandle(id)
    }

    /// The most recently emitted value, if any.
    pub fn current(&self) -> Option<T> {
        self.state.lock().latest.as_ref().map(|(_, v)| v.clone())
    }

    fn deliver(&self, seq: u64, value: &T) {
        let ids: Vec<u64> = self.state.lock().subscribers.iter().map(|s| s.id).collect();

        for id in ids {
            let listener = {
                let mut state = self.state.lock();
                match state.subscribers.iter_mut().find(|s| s.id == id) {
                    Some(sub) if sub.delivered < seq => {
                        sub.delivered = seq;
                        Arc::clone(&sub.listener)
                    }
                    _ => continue,
                }
            };
            listener(value);
        }
    }
}

impl<T> ReadySignal<T> {
    /// Remove a subscription. Unknown or already-removed handles are ignored.
    ///
    /// Returns whether a subscriber was actually removed.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let mut state = self.state.lock();
        let before = state.subscribers.len();
        state.subscribers.retain(|s| s.id != handle.0);
        let removed = state.subscribers.len() != before;
        if removed {
            debug!(id = handle.0, "Unsubscribed from ReadySignal");
        }
        removed
    }

    /// Drop every subscriber. The latest value is kept.
    ///
    /// Returns the number of subscribers removed.
    pub fn clear(&self) -> usize {
        let mut state = self.state.lock();
        let count = state.subscribers.len();
        state.subscribers.clear();
        count
    }

    /// Whether a value has been emitted.
    pub fn is_ready(&self) -> bool {
        self.state.lock().latest.is_some()
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subscribers.len()
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.state.lock().subscribers.iter().any(|s| s.id == id)
    }
}

/// Resets dispatch state if a listener panics mid-delivery.
struct DispatchGuard<'a, T> {
    state: &'a Mutex<State<T>>,
    armed: bool,
}

impl<T> Drop for DispatchGuard<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            let mut state = self.state.lock();
            state.dispatching = false;
            state.pending.clear();
        }
    }
}
