//! Geographic points and the two distance measures used for station lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when a coordinate pair is outside the valid WGS84 range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lat}, {lng}): {reason}")]
pub struct InvalidCoordinate {
    pub lat: f64,
    pub lng: f64,
    reason: &'static str,
}

/// A latitude/longitude pair in decimal degrees.
///
/// Values are validated at construction: both must be finite, latitude
/// within ±90 and longitude within ±180.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::LatLng;
///
/// let majestic = LatLng::new(12.9757, 77.5728).unwrap();
/// assert_eq!(majestic.lat(), 12.9757);
///
/// assert!(LatLng::new(91.0, 0.0).is_err());
/// assert!(LatLng::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    /// Create a point, validating the coordinate ranges.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidCoordinate {
                lat,
                lng,
                reason: "coordinates must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate {
                lat,
                lng,
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate {
                lat,
                lng,
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Cheap ranking proxy: `|Δlat| + |Δlng|` in raw degrees.
    ///
    /// This is not a distance in any real unit. It only orders nearby
    /// stations, and the candidate sets depend on it exactly as written.
    pub fn proxy_distance(&self, other: &LatLng) -> f64 {
        (self.lat - other.lat).abs() + (self.lng - other.lng).abs()
    }

    /// Great-circle distance in kilometres (haversine).
    pub fn haversine_km(&self, other: &LatLng) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Format as `lat,lng`, the form accepted by directions APIs.
    pub fn to_query(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl fmt::Debug for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatLng({:.6}, {:.6})", self.lat, self.lng)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

impl<'de> Deserialize<'de> for LatLng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            lat: f64,
            lng: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        LatLng::new(raw.lat, raw.lng).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng).unwrap()
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(LatLng::new(-90.5, 0.0).is_err());
        assert!(LatLng::new(0.0, 180.1).is_err());
        assert!(LatLng::new(f64::INFINITY, 0.0).is_err());
        assert!(LatLng::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn proxy_is_sum_of_absolute_differences() {
        let a = pt(12.0, 77.0);
        let b = pt(12.3, 76.6);
        let d = a.proxy_distance(&b);
        assert!((d - 0.7).abs() < 1e-12);
        assert_eq!(a.proxy_distance(&b), b.proxy_distance(&a));
    }

    #[test]
    fn haversine_zero_for_same_point() {
        let a = pt(12.9716, 77.5946);
        assert_eq!(a.haversine_km(&a), 0.0);
    }

    #[test]
    fn haversine_one_degree_of_latitude() {
        // One degree along a meridian is R * pi / 180.
        let a = pt(0.0, 77.0);
        let b = pt(1.0, 77.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((a.haversine_km(&b) - expected).abs() < 1e-9);
    }

    #[test]
    fn haversine_known_city_distance() {
        // Majestic to Indiranagar is roughly 7 km as the crow flies.
        let majestic = pt(12.9757, 77.5728);
        let indiranagar = pt(12.9784, 77.6408);
        let d = majestic.haversine_km(&indiranagar);
        assert!(d > 7.0 && d < 7.6, "got {d}");
    }

    #[test]
    fn deserialize_validates() {
        let ok: LatLng = serde_json::from_str(r#"{"lat": 12.5, "lng": 77.5}"#).unwrap();
        assert_eq!(ok, pt(12.5, 77.5));

        let bad = serde_json::from_str::<LatLng>(r#"{"lat": 120.0, "lng": 77.5}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn query_format() {
        assert_eq!(pt(12.5, 77.25).to_query(), "12.5,77.25");
    }
}
