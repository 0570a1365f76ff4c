//! Station registry: read-only lookup of stations by name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{LatLng, Station};

use super::error::NetworkError;
use super::lines::{MetroLine, lines_serving};

/// Immutable collection of known stations.
///
/// Iteration order is load order, which keeps proximity ranking
/// deterministic when two stations tie on distance.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: Vec<Arc<Station>>,
    by_name: HashMap<String, usize>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(name, location)` rows, attaching line
    /// membership from `lines`.
    ///
    /// Fails on the first duplicate name.
    pub fn from_locations<I, S>(rows: I, lines: &[MetroLine]) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = (S, LatLng)>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (name, location) in rows {
            let name = name.into();
            let served_by = lines_serving(lines, &name);
            registry.insert(Station::new(name, location, served_by))?;
        }
        Ok(registry)
    }

    /// Add a station. Names must be unique.
    pub fn insert(&mut self, station: Station) -> Result<(), NetworkError> {
        if self.by_name.contains_key(&station.name) {
            return Err(NetworkError::DuplicateStation(station.name));
        }
        self.by_name.insert(station.name.clone(), self.stations.len());
        self.stations.push(Arc::new(station));
        Ok(())
    }

    /// Look up a station by its exact name.
    pub fn get(&self, name: &str) -> Option<&Arc<Station>> {
        self.by_name.get(name).map(|&idx| &self.stations[idx])
    }

    /// All stations in load order.
    pub fn all(&self) -> &[Arc<Station>] {
        &self.stations
    }

    /// Lines serving a station; empty for unknown stations.
    pub fn lines_for(&self, name: &str) -> &[String] {
        self.get(name).map(|s| s.lines.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::lines::BENGALURU_LINES;

    fn pt(lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng).unwrap()
    }

    #[test]
    fn empty_registry() {
        let reg = StationRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.get("Trinity").is_none());
        assert!(reg.lines_for("Trinity").is_empty());
    }

    #[test]
    fn lookup_and_lines() {
        let reg = StationRegistry::from_locations(
            vec![
                ("Trinity", pt(12.9730, 77.6170)),
                ("Nadaprabhu Kempegowda Station, Majestic", pt(12.9757, 77.5728)),
                ("Somewhere Else", pt(13.0, 77.0)),
            ],
            BENGALURU_LINES,
        )
        .unwrap();

        assert_eq!(reg.len(), 3);
        assert_eq!(reg.lines_for("Trinity"), ["Purple Line".to_string()]);
        assert_eq!(
            reg.lines_for("Nadaprabhu Kempegowda Station, Majestic").len(),
            2
        );
        assert!(reg.lines_for("Somewhere Else").is_empty());
        assert_eq!(reg.get("Trinity").unwrap().location, pt(12.9730, 77.6170));
    }

    #[test]
    fn preserves_load_order() {
        let reg = StationRegistry::from_locations(
            vec![("B", pt(1.0, 1.0)), ("A", pt(2.0, 2.0)), ("C", pt(3.0, 3.0))],
            &[],
        )
        .unwrap();
        let names: Vec<_> = reg.all().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn rejects_duplicates() {
        let result = StationRegistry::from_locations(
            vec![("A", pt(1.0, 1.0)), ("A", pt(2.0, 2.0))],
            &[],
        );
        assert!(matches!(result, Err(NetworkError::DuplicateStation(n)) if n == "A"));
    }
}
