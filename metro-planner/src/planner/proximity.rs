//! Nearest-station lookup.
//!
//! Stations are ranked by the cheap `|Δlat| + |Δlng|` proxy; the haversine
//! distance is used only to decide between walking and taxi access.

use std::sync::Arc;

use crate::domain::{AccessMode, LatLng, Station};
use crate::network::StationRegistry;

/// A station near a query point.
#[derive(Debug, Clone)]
pub struct ProximityCandidate {
    pub station: Arc<Station>,

    /// Ranking proxy in raw degrees. Not a real distance.
    pub proxy_distance: f64,

    /// Great-circle distance to the query point (km).
    pub geodesic_km: f64,

    pub mode: AccessMode,
}

impl ProximityCandidate {
    pub fn name(&self) -> &str {
        &self.station.name
    }
}

/// Access mode for reaching `station` from `point`.
pub fn classify_mode(point: &LatLng, station: &Station, walking_threshold_km: f64) -> AccessMode {
    AccessMode::classify(
        point.haversine_km(&station.location),
        walking_threshold_km,
    )
}

/// The `count` stations nearest to `point` by the proxy metric.
///
/// Ties keep registry order. Returns every station when fewer than
/// `count` exist.
pub fn nearest_stations(
    registry: &StationRegistry,
    point: LatLng,
    count: usize,
    walking_threshold_km: f64,
) -> Vec<ProximityCandidate> {
    let mut ranked: Vec<ProximityCandidate> = registry
        .all()
        .iter()
        .map(|station| {
            let geodesic_km = point.haversine_km(&station.location);
            ProximityCandidate {
                station: Arc::clone(station),
                proxy_distance: point.proxy_distance(&station.location),
                geodesic_km,
                mode: AccessMode::classify(geodesic_km, walking_threshold_km),
            }
        })
        .collect();

    ranked.sort_by(|a, b| a.proxy_distance.total_cmp(&b.proxy_distance));
    ranked.truncate(count);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng).unwrap()
    }

    fn registry(rows: &[(&str, f64, f64)]) -> StationRegistry {
        StationRegistry::from_locations(rows.iter().map(|(n, lat, lng)| (*n, pt(*lat, *lng))), &[])
            .unwrap()
    }

    #[test]
    fn ranks_by_proxy_and_truncates() {
        let reg = registry(&[
            ("Far", 13.10, 77.70),
            ("Near", 12.971, 77.595),
            ("Mid", 12.99, 77.61),
        ]);
        let got = nearest_stations(&reg, pt(12.97, 77.59), 2, 0.5);

        let names: Vec<_> = got.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Near", "Mid"]);
        assert!(got[0].proxy_distance <= got[1].proxy_distance);
    }

    #[test]
    fn returns_all_when_fewer_than_count() {
        let reg = registry(&[("A", 12.0, 77.0), ("B", 12.1, 77.1)]);
        assert_eq!(nearest_stations(&reg, pt(12.0, 77.0), 7, 0.5).len(), 2);
    }

    #[test]
    fn empty_registry_gives_no_candidates() {
        let reg = StationRegistry::new();
        assert!(nearest_stations(&reg, pt(12.0, 77.0), 7, 0.5).is_empty());
    }

    #[test]
    fn ties_keep_registry_order() {
        // Co-located platforms tie exactly on the proxy metric.
        let reg = registry(&[("Upper", 12.01, 77.0), ("Lower", 12.01, 77.0)]);
        let got = nearest_stations(&reg, pt(12.0, 77.0), 2, 0.5);
        let names: Vec<_> = got.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Upper", "Lower"]);

        let reg = registry(&[("Lower", 12.01, 77.0), ("Upper", 12.01, 77.0)]);
        let got = nearest_stations(&reg, pt(12.0, 77.0), 2, 0.5);
        let names: Vec<_> = got.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Lower", "Upper"]);
    }

    #[test]
    fn proxy_ranking_can_differ_from_true_distance() {
        // At 60°N a degree of longitude is half a degree of latitude, so the
        // diagonal station wins on the proxy (0.008 vs 0.0085) while being
        // further away on the ground (~0.50 km vs ~0.47 km).
        let reg = registry(&[("Diagonal", 60.004, 10.004), ("Straight", 60.0, 10.0085)]);
        let got = nearest_stations(&reg, pt(60.0, 10.0), 2, 0.5);
        assert_eq!(got[0].name(), "Diagonal");
        assert!(got[0].geodesic_km > got[1].geodesic_km);
    }

    #[test]
    fn mode_uses_geodesic_distance() {
        // ~0.11 km and ~1.1 km north of the query point.
        let reg = registry(&[("Close", 12.001, 77.0), ("Away", 12.01, 77.0)]);
        let got = nearest_stations(&reg, pt(12.0, 77.0), 2, 0.5);
        assert_eq!(got[0].mode, AccessMode::Walking);
        assert_eq!(got[1].mode, AccessMode::Taxi);
    }

    #[test]
    fn classify_mode_boundary() {
        let station = Station::new("S", pt(12.0, 77.0), vec![]);
        let point = pt(12.004, 77.0);
        let d = point.haversine_km(&station.location);

        assert_eq!(classify_mode(&point, &station, d), AccessMode::Walking);
        assert_eq!(classify_mode(&point, &station, d - 1e-9), AccessMode::Taxi);
    }
}
