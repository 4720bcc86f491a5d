//! [`LocationDetailScreen`] implementation.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::collaborators::{DetailRenderer, MapHandle, MapWidget};
use crate::config::DetailConfig;
use crate::coordinator::{ReadinessCoordinator, ReadyForwarder};
use crate::detail::{DetailViewState, LocationRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Started,
    TornDown,
}

/// One location detail screen, from open to close.
pub struct LocationDetailScreen<W: MapWidget> {
    record: LocationRecord,
    state: DetailViewState,
    widget: W,
    coordinator: Arc<ReadinessCoordinator<W::Map>>,
    cancel: CancellationToken,
    marker_zoom: f32,
    phase: Phase,
}

impl<W: MapWidget> LocationDetailScreen<W> {
    /// Create the screen and derive its display text.
    pub fn new(record: LocationRecord, widget: W, config: &DetailConfig) -> Self {
        let state = DetailViewState::derive(
            &record,
            &config.labels,
            config.display.coordinate_precision,
        );

        Self {
            record,
            state,
            widget,
            coordinator: Arc::new(ReadinessCoordinator::new()),
            cancel: CancellationToken::new(),
            marker_zoom: config.map.marker_zoom,
            phase: Phase::Created,
        }
    }

    /// Render the detail text, register the marker reaction and ask the
    /// widget for its map.
    ///
    /// The returned forwarder must be run on the event loop for the marker
    /// to be placed. Returns `None` if the screen was already started or torn
    /// down.
    pub fn start(
        &mut self,
        renderer: &mut dyn DetailRenderer,
    ) -> Option<ReadyForwarder<W::Map>> {
        if self.phase != Phase::Created {
            warn!(phase = ?self.phase, "Detail screen start ignored");
            return None;
        }

        self.widget.init();
        renderer.render(&self.state);

        let position = self.record.position();
        let zoom = self.marker_zoom;
        let name = self.record.name.clone();
        self.coordinator.add_reaction(move |map: &W::Map| {
            map.add_marker(position);
            map.move_camera(position, zoom);
            info!(location = %name, %position, zoom, "Marker placed");
        });

        let (callback, forwarder) = self.coordinator.marshalled(self.cancel.child_token());
        self.widget.request_map(callback);

        self.phase = Phase::Started;
        info!(location = %self.record.name, "Detail screen started");
        Some(forwarder)
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Started {
            self.widget.activate();
        }
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Started {
            self.widget.deactivate();
        }
    }

    /// Release reactions, stop forwarding and dispose the widget.
    ///
    /// Idempotent. Also runs when the screen is dropped.
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }

        let was_started = self.phase == Phase::Started;
        self.phase = Phase::TornDown;

        self.cancel.cancel();
        self.coordinator.teardown();
        if was_started {
            self.widget.dispose();
        }

        debug!(
            location = %self.record.name,
            map_ready = self.coordinator.is_ready(),
            "Detail screen torn down"
        );
    }

    pub fn state(&self) -> &DetailViewState {
        &self.state
    }

    pub fn record(&self) -> &LocationRecord {
        &self.record
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn is_map_ready(&self) -> bool {
        self.coordinator.is_ready()
    }

    pub fn is_torn_down(&self) -> bool {
        self.phase == Phase::TornDown
    }

    /// The coordinator, for registering extra reactions on the map.
    pub fn coordinator(&self) -> &Arc<ReadinessCoordinator<W::Map>> {
        &self.coordinator
    }
}

impl<W: MapWidget> Drop for LocationDetailScreen<W> {
    fn drop(&mut self) {
        self.teardown();
    }
}
