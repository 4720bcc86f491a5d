//! Traits for the external pieces the screen drives.

use crate::coordinator::ReadyCallback;
use crate::detail::{DetailViewState, LatLng};

/// A ready-to-use map object.
///
/// Cloned into reactions, so it should be a cheap shared reference.
pub trait MapHandle: Clone + Send + Sync + 'static {
    /// Drop a marker at `position`.
    fn add_marker(&self, position: LatLng);

    /// Center the camera on `position` at `zoom`.
    fn move_camera(&self, position: LatLng, zoom: f32);
}

/// The embedded map widget and its lifecycle hooks.
///
/// Hooks default to no-ops for widgets that don't need them.
pub trait MapWidget {
    type Map: MapHandle;

    /// Called once when the screen starts.
    fn init(&mut self) {}

    /// Screen became visible.
    fn activate(&mut self) {}

    /// Screen was hidden.
    fn deactivate(&mut self) {}

    /// Called once on teardown, after all reactions are released.
    fn dispose(&mut self) {}

    /// Begin asynchronous map initialisation.
    ///
    /// The widget calls `callback.ready(map)` when the map is usable, from
    /// any thread, or drops the callback if it never will be.
    fn request_map(&mut self, callback: ReadyCallback<Self::Map>);
}

/// Presents the derived detail text.
pub trait DetailRenderer {
    fn render(&mut self, state: &DetailViewState);
}
