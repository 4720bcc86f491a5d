//! Location record input and the display fields derived from it.

mod record;
mod view_state;

pub use record::{LatLng, LocationRecord, RecordError};
pub use view_state::{DetailViewState, DEFAULT_COORDINATE_PRECISION};
