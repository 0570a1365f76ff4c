//! Candidate route assembly.
//!
//! Pairs every origin-side station with every destination-side station.
//! A pair needs both access legs to count as an access combination, and a
//! transit segment on top of that to become a route candidate.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::Station;
use crate::network::{TransitSegment, TransitTable};

use super::access::{AccessLeg, LegKey};
use super::proximity::ProximityCandidate;

/// A station pair with both access legs resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessCombination {
    pub origin: String,
    pub destination: String,
    pub first_mile_km: f64,
    pub last_mile_km: f64,
    pub total_access_km: f64,
}

/// Origin station, metro ride, destination station and the legs between.
#[derive(Debug, Clone)]
pub struct RouteCandidate {
    pub origin: Arc<Station>,
    pub destination: Arc<Station>,
    pub first_mile: AccessLeg,
    pub last_mile: AccessLeg,
    pub segment: TransitSegment,
}

impl RouteCandidate {
    pub fn total_access_km(&self) -> f64 {
        self.first_mile.distance_km + self.last_mile.distance_km
    }

    pub fn transfer_count(&self) -> u32 {
        self.segment.transfer_count
    }
}

/// Output of [`build_candidates`].
#[derive(Debug, Clone, Default)]
pub struct BuiltCandidates {
    pub access_combinations: Vec<AccessCombination>,
    pub candidates: Vec<RouteCandidate>,
}

impl BuiltCandidates {
    /// Smallest total access distance over all access combinations.
    ///
    /// Pairs without a transit segment still count here.
    pub fn shortest_access_km(&self) -> Option<f64> {
        self.access_combinations
            .iter()
            .map(|c| c.total_access_km)
            .min_by(f64::total_cmp)
    }
}

/// Cross the two candidate lists, in origin-major order.
pub fn build_candidates(
    origin_candidates: &[ProximityCandidate],
    destination_candidates: &[ProximityCandidate],
    legs: &HashMap<LegKey, AccessLeg>,
    transit: &TransitTable,
) -> BuiltCandidates {
    let mut built = BuiltCandidates::default();
    let mut missing_segments = 0usize;

    for from in origin_candidates {
        let Some(first_mile) = legs.get(&LegKey::first_mile(from.name())) else {
            continue;
        };
        for to in destination_candidates {
            let Some(last_mile) = legs.get(&LegKey::last_mile(to.name())) else {
                continue;
            };

            built.access_combinations.push(AccessCombination {
                origin: from.name().to_string(),
                destination: to.name().to_string(),
                first_mile_km: first_mile.distance_km,
                last_mile_km: last_mile.distance_km,
                total_access_km: first_mile.distance_km + last_mile.distance_km,
            });

            match transit.get(from.name(), to.name()) {
                Some(segment) => built.candidates.push(RouteCandidate {
                    origin: Arc::clone(&from.station),
                    destination: Arc::clone(&to.station),
                    first_mile: first_mile.clone(),
                    last_mile: last_mile.clone(),
                    segment: segment.clone(),
                }),
                None => missing_segments += 1,
            }
        }
    }

    debug!(
        combinations = built.access_combinations.len(),
        candidates = built.candidates.len(),
        missing_segments,
        "Built route candidates"
    );
    built
}
