//! Readiness coordination for an externally initialised resource.
//!
//! The map widget becomes usable only after its owner fires a one-shot
//! completion callback. [`ReadinessCoordinator`] feeds that callback into a
//! [`ReadySignal`](crate::signal::ReadySignal) and owns the reactions that
//! must run once the resource is ready, whichever happens first.
//!
//! # Architecture
//!
//! ```text
//!  resource owner                 event loop
//!  (any thread)                   (single thread)
//!
//!  ReadyCallback::ready(h) ──oneshot──► ReadyForwarder::run()
//!                                          │
//!                                          ▼
//!                              ReadinessCoordinator::on_external_ready(h)
//!                                          │
//!                                          ▼
//!                                 ReadySignal::emit(h) ──► reactions
//! ```
//!
//! `teardown()` releases every reaction and makes later readiness a no-op.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use locdetail::coordinator::ReadinessCoordinator;
//!
//! let coordinator = ReadinessCoordinator::new();
//! coordinator.on_external_ready("map-1");
//!
//! let fired = Arc::new(AtomicBool::new(false));
//! let fired_clone = Arc::clone(&fired);
//! coordinator.add_reaction(move |_map: &&str| fired_clone.store(true, Ordering::SeqCst));
//!
//! assert!(fired.load(Ordering::SeqCst));
//! coordinator.teardown();
//! ```

mod marshal;
mod readiness;

pub use marshal::{ReadyCallback, ReadyForwarder};
pub use readiness::ReadinessCoordinator;
