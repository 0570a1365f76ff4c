//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::directions::TravelEstimate;
use crate::domain::{AccessMode, InvalidCoordinate, LatLng, Station};
use crate::planner::{AccessLeg, OverrideDecision, OverrideRule, Recommendation, ScoredRoute};

/// A point as sent by the client. Validated separately so that a bad
/// coordinate is reported as such rather than as malformed JSON.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointDto {
    pub lat: f64,
    pub lng: f64,
}

impl PointDto {
    pub fn to_lat_lng(self) -> Result<LatLng, InvalidCoordinate> {
        LatLng::new(self.lat, self.lng)
    }
}

/// Request to find routes between two points.
#[derive(Debug, Deserialize)]
pub struct FindRoutesRequest {
    pub origin: PointDto,
    pub destination: PointDto,

    /// Free-text address, only used for logging.
    pub origin_address: Option<String>,

    /// Free-text address, only used for logging.
    pub destination_address: Option<String>,
}

/// Response to a route request.
#[derive(Debug, Serialize)]
pub struct FindRoutesResponse {
    /// Always `"success"`; errors use [`ErrorResponse`].
    pub status: &'static str,

    /// Best routes, best first.
    pub convenience_routes: Vec<RouteView>,

    pub direct_taxi: Option<DirectTaxiView>,

    /// `null` when there was no direct estimate or no route to compare.
    pub direct_taxi_suggestion: Option<SuggestionView>,
}

impl FindRoutesResponse {
    pub fn from_recommendation(rec: &Recommendation) -> Self {
        Self {
            status: "success",
            convenience_routes: rec.routes.iter().map(RouteView::from_scored).collect(),
            direct_taxi: rec.direct_taxi.as_ref().map(DirectTaxiView::from_estimate),
            direct_taxi_suggestion: rec
                .direct_taxi_override
                .decision()
                .map(SuggestionView::from_decision),
        }
    }
}

/// An access leg in a route.
#[derive(Debug, Clone, Serialize)]
pub struct LegView {
    pub mode: AccessMode,
    pub distance_km: f64,
    pub duration_mins: f64,
    /// e.g. "7 min 30 sec"
    pub time_display: String,
    pub traffic_aware: bool,
}

impl LegView {
    pub fn from_leg(leg: &AccessLeg) -> Self {
        Self {
            mode: leg.mode,
            distance_km: leg.distance_km,
            duration_mins: leg.minutes(),
            time_display: leg.time_display(),
            traffic_aware: leg.traffic_aware,
        }
    }
}

/// A ranked route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteView {
    pub origin_station: String,
    pub destination_station: String,
    pub origin_line: String,
    pub destination_line: String,

    pub first_mile: LegView,
    pub last_mile: LegView,
    pub total_access_km: f64,
    pub total_access_mins: f64,

    pub metro_distance_km: f64,
    pub metro_time_mins: f64,
    pub same_line: bool,
    pub interchange: String,
    pub transfer_count: u32,
    /// e.g. "Single Transfer: Majestic"
    pub route_summary: String,

    pub total_journey_mins: f64,
    pub access_score: f64,
    pub metro_score: f64,
    pub convenience_score: f64,
}

impl RouteView {
    pub fn from_scored(route: &ScoredRoute) -> Self {
        let c = &route.candidate;
        let seg = &c.segment;
        Self {
            origin_station: c.origin.name.clone(),
            destination_station: c.destination.name.clone(),
            origin_line: line_or_unknown(&seg.start_line),
            destination_line: line_or_unknown(&seg.end_line),
            first_mile: LegView::from_leg(&c.first_mile),
            last_mile: LegView::from_leg(&c.last_mile),
            total_access_km: c.total_access_km(),
            total_access_mins: c.first_mile.minutes() + c.last_mile.minutes(),
            metro_distance_km: seg.distance_km,
            metro_time_mins: seg.time_mins,
            same_line: seg.same_line,
            interchange: seg.interchange.clone(),
            transfer_count: seg.transfer_count,
            route_summary: seg.summary().to_string(),
            total_journey_mins: route.score.total_journey_mins,
            access_score: route.score.access_score,
            metro_score: route.score.metro_score,
            convenience_score: route.score.composite,
        }
    }
}

fn line_or_unknown(line: &str) -> String {
    if line.is_empty() {
        "Unknown".to_string()
    } else {
        line.to_string()
    }
}

/// The direct taxi alternative.
#[derive(Debug, Clone, Serialize)]
pub struct DirectTaxiView {
    pub distance_km: f64,
    pub duration_mins: f64,
    pub time_display: String,
    pub traffic_aware: bool,
}

impl DirectTaxiView {
    pub fn from_estimate(estimate: &TravelEstimate) -> Self {
        Self {
            distance_km: estimate.distance_km,
            duration_mins: estimate.minutes(),
            time_display: estimate.time_display(),
            traffic_aware: estimate.traffic_aware,
        }
    }
}

/// Whether to take a taxi all the way, and why.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionView {
    pub suggest: bool,
    pub rules: Vec<OverrideRule>,
    pub reasons: Vec<String>,
    pub direct_distance: f64,
    pub direct_time: f64,
    pub time_saving: f64,
}

impl SuggestionView {
    pub fn from_decision(decision: &OverrideDecision) -> Self {
        Self {
            suggest: decision.suggest,
            rules: decision.rules.clone(),
            reasons: decision.reasons.clone(),
            direct_distance: decision.direct_distance_km,
            direct_time: decision.direct_time_mins,
            time_saving: decision.time_saving_mins,
        }
    }
}

/// A station looked up by name.
#[derive(Debug, Serialize)]
pub struct StationView {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub lines: Vec<String>,
    pub line: String,
    pub is_interchange: bool,
}

impl StationView {
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            lat: station.location.lat(),
            lng: station.location.lng(),
            lines: station.lines.clone(),
            line: station.line_label().to_string(),
            is_interchange: station.is_interchange(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
