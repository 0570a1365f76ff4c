//! Multimodal route planner.
//!
//! This module answers: "How do I get from here to there using the metro,
//! and would a taxi all the way be better?"
//!
//! The nearest stations to each end are paired up, the walk or taxi ride to
//! and from each station is estimated concurrently, and every pair with both
//! legs and a metro connection is scored for convenience. The best routes are
//! then checked against a direct taxi ride.

mod access;
mod candidate;
mod config;
mod plan;
mod proximity;
mod rank;
mod score;
mod taxi;


pub use access::{
    AccessLeg, LegKey, LegKind, LegRequest, leg_requests, resolve_direct_taxi, resolve_legs,
};
pub use candidate::{AccessCombination, BuiltCandidates, RouteCandidate, build_candidates};
pub use config::PlannerConfig;
pub use plan::{PlanError, Planner, Recommendation, TripRequest};
pub use proximity::{ProximityCandidate, classify_mode, nearest_stations};
pub use rank::{rank_routes, top_k};
pub use score::{
    ConvenienceScore, ScoredRoute, access_factor, access_score, composite_score,
    composite_weights, metro_score, score_candidates, total_journey_mins,
};
pub use taxi::{
    OverrideDecision, OverrideInputs, OverrideOutcome, OverrideRule, evaluate_override,
    evaluate_rules,
};
