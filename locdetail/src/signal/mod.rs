//! Single-slot replaying event channel.
//!
//! [`ReadySignal`] remembers the most recent value it was given and hands it
//! to every new subscriber immediately, then keeps delivering later values.
//! It is the primitive behind "run this once the map exists", where the map
//! may become ready before or after the reaction is registered.
//!
//! ```text
//!   emit(v1) ──► latest = v1 ──► listeners present now
//!   subscribe(f) ──► f(latest) immediately, then f(v2), f(v3), ...
//! ```
//!
//! Only the latest value is retained. A subscriber that joins after `v2`
//! superseded `v1` sees `v2` and never `v1`.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use locdetail::signal::ReadySignal;
//!
//! let signal = ReadySignal::new();
//! signal.emit(7u32);
//!
//! let seen = Arc::new(AtomicU32::new(0));
//! let seen_clone = Arc::clone(&seen);
//! let handle = signal.subscribe(move |v: &u32| {
//!     seen_clone.store(*v, Ordering::SeqCst);
//! });
//!
//! assert_eq!(seen.load(Ordering::SeqCst), 7);
//! signal.unsubscribe(handle);
//! ```

mod ready;

pub use ready::{Listener, ReadySignal, SubscriptionHandle};
