//! Domain types for the metro route advisor.
//!
//! Coordinates are validated at construction, so code receiving a
//! [`LatLng`] can trust it is a real point on the globe.

mod geo;
mod mode;
mod station;
mod time;

pub use geo::{EARTH_RADIUS_KM, InvalidCoordinate, LatLng};
pub use mode::{AccessMode, TravelMode};
pub use station::Station;
pub use time::{format_duration, minutes_f64, split_minutes};
