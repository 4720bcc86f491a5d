//! Host-facing lifecycle for the location detail screen.
//!
//! [`LocationDetailScreen`] wires the core together the way the host UI
//! expects: the detail text is derived and rendered once on start, and the
//! "place marker" reaction runs as soon as the map widget reports ready.
//! Rendering, the map widget and its map object stay behind the
//! [`DetailRenderer`], [`MapWidget`] and [`MapHandle`] traits.
//!
//! # Lifecycle
//!
//! ```text
//! new ──► start ──► resume ⇄ pause ──► teardown
//!          │                              ▲
//!          └── returns ReadyForwarder     └── also run on Drop
//! ```

mod collaborators;
mod detail_screen;

pub use collaborators::{DetailRenderer, MapHandle, MapWidget};
pub use detail_screen::LocationDetailScreen;
