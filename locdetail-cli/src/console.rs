//! Console stand-ins for the screen's UI collaborators.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use locdetail::coordinator::ReadyCallback;
use locdetail::detail::{DetailViewState, LatLng};
use locdetail::screen::{DetailRenderer, MapHandle, MapWidget};
use tokio::sync::Notify;
use tracing::debug;

/// Prints the detail text to stdout.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    fn lines(state: &DetailViewState) -> Vec<String> {
        vec![
            state.title.clone(),
            format!("  Address:   {}", state.address),
            format!("  Latitude:  {}", state.latitude_text),
            format!("  Longitude: {}", state.longitude_text),
            format!("  Arrival:   {}", state.arrival_text),
        ]
    }
}

impl DetailRenderer for ConsoleRenderer {
    fn render(&mut self, state: &DetailViewState) {
        for line in Self::lines(state) {
            println!("{}", line);
        }
    }
}

/// Map that prints marker and camera calls.
///
/// `placed` is notified once the camera has been moved onto the marker.
#[derive(Clone)]
pub struct ConsoleMap {
    placed: Arc<Notify>,
}

impl ConsoleMap {
    pub fn new(placed: Arc<Notify>) -> Self {
        Self { placed }
    }
}

impl MapHandle for ConsoleMap {
    fn add_marker(&self, position: LatLng) {
        println!("  Marker:    {}", position);
    }

    fn move_camera(&self, position: LatLng, zoom: f32) {
        println!("  Camera:    {} @ zoom {}", position, zoom);
        self.placed.notify_one();
    }
}

/// Widget whose map becomes ready on its own thread.
///
/// With `ready_after = None` the callback is held and never fired.
pub struct SimulatedMapWidget {
    map: ConsoleMap,
    ready_after: Option<Duration>,
    parked: Option<ReadyCallback<ConsoleMap>>,
}

impl SimulatedMapWidget {
    pub fn new(map: ConsoleMap, ready_after: Option<Duration>) -> Self {
        Self {
            map,
            ready_after,
            parked: None,
        }
    }
}

impl MapWidget for SimulatedMapWidget {
    type Map = ConsoleMap;

    fn init(&mut self) {
        debug!("Simulated map widget created");
    }

    fn request_map(&mut self, callback: ReadyCallback<ConsoleMap>) {
        let Some(delay) = self.ready_after else {
            self.parked = Some(callback);
            return;
        };

        let map = self.map.clone();
        // Detached: a slow map outliving the screen just finds the
        // forwarder gone.
        thread::spawn(move || {
            thread::sleep(delay);
            callback.ready(map);
        });
    }

    fn dispose(&mut self) {
        self.parked = None;
        debug!("Simulated map widget disposed");
    }
}
