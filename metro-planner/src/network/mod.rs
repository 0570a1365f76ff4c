//! Static metro network data: stations, lines and precomputed segments.
//!
//! Everything here is loaded once at startup and read-only afterwards.

mod error;
mod lines;
mod loader;
mod registry;
mod segment;
mod stations;

pub use error::NetworkError;
pub use lines::{
    BENGALURU_LINES, GREEN_LINE, MetroLine, PURPLE_LINE, YELLOW_LINE, lines_serving,
};
pub use loader::{load_stations, load_transit_pairs, read_stations, read_transit_pairs};
pub use registry::StationRegistry;
pub use segment::{RouteSummary, TransitSegment, TransitTable};
pub use stations::BENGALURU_STATIONS;
