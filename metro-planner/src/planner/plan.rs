//! End-to-end route planning.
//!
//! Ties the stages together: nearest stations at both ends, access legs and
//! the direct taxi estimate (fetched concurrently), candidate assembly,
//! scoring, ranking and the direct-taxi override.

use tracing::{debug, info};

use crate::directions::{TravelEstimate, TravelEstimator};
use crate::domain::LatLng;
use crate::network::{StationRegistry, TransitTable};

use super::access::{leg_requests, resolve_direct_taxi, resolve_legs};
use super::candidate::build_candidates;
use super::config::PlannerConfig;
use super::proximity::{ProximityCandidate, nearest_stations};
use super::rank::top_k;
use super::score::{ScoredRoute, score_candidates};
use super::taxi::{OverrideOutcome, evaluate_override};

/// Error from route planning.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// No stations loaded, so nothing can be planned.
    #[error("station registry is empty")]
    EmptyRegistry,

    /// Planner configuration cannot produce any candidates.
    #[error("invalid planner configuration: {0}")]
    InvalidConfig(String),
}

/// Request for route planning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripRequest {
    pub origin: LatLng,
    pub destination: LatLng,
}

impl TripRequest {
    pub fn new(origin: LatLng, destination: LatLng) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

/// Result of route planning.
///
/// An empty `routes` list is a valid outcome: every candidate may have lost
/// an access leg or lacked a metro connection.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub origin_stations: Vec<ProximityCandidate>,
    pub destination_stations: Vec<ProximityCandidate>,

    /// Best routes, best first.
    pub routes: Vec<ScoredRoute>,

    /// Candidates scored before truncation.
    pub candidates_considered: usize,

    pub direct_taxi: Option<TravelEstimate>,
    pub direct_taxi_override: OverrideOutcome,
}

impl Recommendation {
    /// The top-ranked route, if any.
    pub fn best(&self) -> Option<&ScoredRoute> {
        self.routes.first()
    }
}

/// Route planner.
pub struct Planner<'a, E: TravelEstimator> {
    estimator: &'a E,
    stations: &'a StationRegistry,
    transit: &'a TransitTable,
    config: &'a PlannerConfig,
}

impl<'a, E: TravelEstimator> Planner<'a, E> {
    /// Create a new planner.
    pub fn new(
        estimator: &'a E,
        stations: &'a StationRegistry,
        transit: &'a TransitTable,
        config: &'a PlannerConfig,
    ) -> Self {
        Self {
            estimator,
            stations,
            transit,
            config,
        }
    }

    fn validate(&self) -> Result<(), PlanError> {
        if self.stations.is_empty() {
            return Err(PlanError::EmptyRegistry);
        }
        if self.config.candidate_count == 0 {
            return Err(PlanError::InvalidConfig(
                "candidate_count must be at least 1".to_string(),
            ));
        }
        if self.config.top_k == 0 {
            return Err(PlanError::InvalidConfig(
                "top_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Plan routes from origin to destination.
    pub async fn plan(&self, request: &TripRequest) -> Result<Recommendation, PlanError> {
        self.validate()?;
        let config = self.config;

        let origin_stations = nearest_stations(
            self.stations,
            request.origin,
            config.candidate_count,
            config.walking_threshold_km,
        );
        let destination_stations = nearest_stations(
            self.stations,
            request.destination,
            config.candidate_count,
            config.walking_threshold_km,
        );
        debug!(
            origin = %request.origin,
            destination = %request.destination,
            origin_stations = origin_stations.len(),
            destination_stations = destination_stations.len(),
            "Found nearest stations"
        );

        let requests = leg_requests(
            request.origin,
            request.destination,
            &origin_stations,
            &destination_stations,
        );
        let (legs, direct_taxi) = tokio::join!(
            resolve_legs(
                self.estimator,
                requests,
                config.max_concurrent_legs,
                config.leg_timeout(),
            ),
            resolve_direct_taxi(
                self.estimator,
                request.origin,
                request.destination,
                config.leg_timeout(),
            ),
        );

        let built = build_candidates(&origin_stations, &destination_stations, &legs, self.transit);
        let shortest_access_km = built.shortest_access_km().unwrap_or(0.0);
        let candidates_considered = built.candidates.len();

        let scored = score_candidates(built.candidates, shortest_access_km, config);
        let routes = top_k(scored, config.top_k);
        let direct_taxi_override = evaluate_override(direct_taxi.as_ref(), routes.first());

        info!(
            legs = legs.len(),
            candidates = candidates_considered,
            routes = routes.len(),
            best_score = routes.first().map(|r| r.composite()),
            direct_taxi = direct_taxi.is_some(),
            "Planned routes"
        );

        Ok(Recommendation {
            origin_stations,
            destination_stations,
            routes,
            candidates_considered,
            direct_taxi,
            direct_taxi_override,
        })
    }
}
