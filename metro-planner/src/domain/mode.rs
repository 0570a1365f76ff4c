//! Travel mode types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a traveller reaches a station from a point (or a point from a station).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    Walking,
    Taxi,
}

impl AccessMode {
    /// Classify by straight-line distance. The threshold is inclusive.
    ///
    /// ```
    /// use metro_planner::domain::AccessMode;
    ///
    /// assert_eq!(AccessMode::classify(0.5, 0.5), AccessMode::Walking);
    /// assert_eq!(AccessMode::classify(0.5001, 0.5), AccessMode::Taxi);
    /// ```
    pub fn classify(geodesic_km: f64, walking_threshold_km: f64) -> Self {
        if geodesic_km <= walking_threshold_km {
            AccessMode::Walking
        } else {
            AccessMode::Taxi
        }
    }

    /// The estimator mode used to resolve a leg of this kind.
    pub fn travel_mode(self) -> TravelMode {
        match self {
            AccessMode::Walking => TravelMode::Walking,
            AccessMode::Taxi => TravelMode::Driving,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessMode::Walking => "walking",
            AccessMode::Taxi => "taxi",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode understood by the point-to-point estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walking,
    Driving,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Driving => "driving",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundary_is_inclusive() {
        assert_eq!(AccessMode::classify(0.0, 0.5), AccessMode::Walking);
        assert_eq!(AccessMode::classify(0.5, 0.5), AccessMode::Walking);
        assert_eq!(AccessMode::classify(0.500_000_1, 0.5), AccessMode::Taxi);
        assert_eq!(AccessMode::classify(12.0, 0.5), AccessMode::Taxi);
    }

    #[test]
    fn taxi_resolves_as_driving() {
        assert_eq!(AccessMode::Taxi.travel_mode(), TravelMode::Driving);
        assert_eq!(AccessMode::Walking.travel_mode(), TravelMode::Walking);
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&AccessMode::Taxi).unwrap(), "\"taxi\"");
        assert_eq!(
            serde_json::from_str::<TravelMode>("\"driving\"").unwrap(),
            TravelMode::Driving
        );
    }
}
