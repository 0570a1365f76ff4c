//! Convenience scoring.
//!
//! A route scores on two axes: how little travelling it takes to reach and
//! leave the metro (access), and how painful its transfers are given that
//! access effort (metro). The composite weights them by transfer count.

use serde::Serialize;
use tracing::debug;

use super::candidate::RouteCandidate;
use super::config::PlannerConfig;

/// Access score: the shortest total access distance as a percentage of
/// this route's total access distance.
///
/// Zero access distance scores 100.
pub fn access_score(shortest_access_km: f64, total_access_km: f64) -> f64 {
    if total_access_km <= 0.0 {
        return 100.0;
    }
    shortest_access_km / total_access_km * 100.0
}

/// How much the transfer penalty applies: 0 with no access travel, 1 once
/// access reaches `saturation_km`.
pub fn access_factor(total_access_km: f64, saturation_km: f64) -> f64 {
    (total_access_km / saturation_km).min(1.0)
}

/// Metro score for a transfer count, penalised by the access factor.
pub fn metro_score(transfer_count: u32, access_factor: f64) -> f64 {
    match transfer_count {
        0 => 100.0,
        1 => 100.0 - 40.0 * access_factor,
        2 => 100.0 - 80.0 * access_factor,
        // No penalty for three or more transfers, so a 3+ transfer route
        // outscores a 2-transfer one here. Likely unintended; preserved.
        _ => 100.0,
    }
}

/// Access and metro weights for a transfer count.
pub fn composite_weights(transfer_count: u32) -> (f64, f64) {
    match transfer_count {
        0 => (0.80, 0.20),
        1 => (0.65, 0.35),
        _ => (0.60, 0.40),
    }
}

pub fn composite_score(transfer_count: u32, access_score: f64, metro_score: f64) -> f64 {
    let (access_weight, metro_weight) = composite_weights(transfer_count);
    access_score * access_weight + metro_score * metro_weight
}

/// Door-to-door minutes: access legs, the metro ride, a fixed walk per
/// transfer and a fixed overhead for entering and leaving the metro.
pub fn total_journey_mins(candidate: &RouteCandidate, config: &PlannerConfig) -> f64 {
    candidate.first_mile.minutes()
        + candidate.last_mile.minutes()
        + candidate.segment.time_mins
        + f64::from(candidate.segment.transfer_count) * config.transfer_penalty_mins
        + config.access_interchange_mins
}

/// Scores attached to a route candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvenienceScore {
    pub access_score: f64,
    pub access_factor: f64,
    pub metro_score: f64,
    pub composite: f64,
    pub total_journey_mins: f64,
}

/// A candidate with its scores.
#[derive(Debug, Clone)]
pub struct ScoredRoute {
    pub candidate: RouteCandidate,
    pub score: ConvenienceScore,
}

impl ScoredRoute {
    pub fn composite(&self) -> f64 {
        self.score.composite
    }
}

/// Score every candidate. Nothing is dropped and order is preserved.
pub fn score_candidates(
    candidates: Vec<RouteCandidate>,
    shortest_access_km: f64,
    config: &PlannerConfig,
) -> Vec<ScoredRoute> {
    let scored: Vec<ScoredRoute> = candidates
        .into_iter()
        .map(|candidate| {
            let total_access_km = candidate.total_access_km();
            let transfers = candidate.transfer_count();
            let access = access_score(shortest_access_km, total_access_km);
            let factor = access_factor(total_access_km, config.access_saturation_km);
            let metro = metro_score(transfers, factor);

            let score = ConvenienceScore {
                access_score: access,
                access_factor: factor,
                metro_score: metro,
                composite: composite_score(transfers, access, metro),
                total_journey_mins: total_journey_mins(&candidate, config),
            };
            ScoredRoute { candidate, score }
        })
        .collect();

    debug!(
        scored = scored.len(),
        shortest_access_km, "Scored route candidates"
    );
    scored
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{AccessMode, LatLng, Station};
    use crate::network::TransitSegment;
    use crate::planner::access::AccessLeg;

    fn leg(km: f64, secs: i64) -> AccessLeg {
        let p = LatLng::new(12.9, 77.6).unwrap();
        AccessLeg {
            from: p,
            to: p,
            mode: AccessMode::Taxi,
            distance_km: km,
            duration: chrono::Duration::seconds(secs),
            traffic_aware: false,
        }
    }

    fn route(first_km: f64, last_km: f64, transfers: u32, metro_mins: f64) -> RouteCandidate {
        let p = LatLng::new(12.9, 77.6).unwrap();
        RouteCandidate {
            origin: Arc::new(Station::new("A", p, vec![])),
            destination: Arc::new(Station::new("B", p, vec![])),
            first_mile: leg(first_km, 180),
            last_mile: leg(last_km, 120),
            segment: TransitSegment {
                from: "A".into(),
                to: "B".into(),
                distance_km: 5.0,
                time_mins: metro_mins,
                same_line: transfers == 0,
                interchange: String::new(),
                transfer_count: transfers,
                start_line: "Purple Line".into(),
                end_line: "Green Line".into(),
            },
        }
    }

    #[test]
    fn access_score_relative_to_shortest() {
        assert_eq!(access_score(2.0, 2.0), 100.0);
        assert_eq!(access_score(2.0, 4.0), 50.0);
        assert_eq!(access_score(0.0, 0.0), 100.0);
    }

    #[test]
    fn access_factor_saturates() {
        assert_eq!(access_factor(0.0, 20.0), 0.0);
        assert_eq!(access_factor(10.0, 20.0), 0.5);
        assert_eq!(access_factor(20.0, 20.0), 1.0);
        assert_eq!(access_factor(35.0, 20.0), 1.0);
    }

    #[test]
    fn metro_score_by_transfers() {
        assert_eq!(metro_score(1, 0.5), 80.0);
        assert_eq!(metro_score(2, 0.5), 60.0);
        assert_eq!(metro_score(2, 1.0), 20.0);
        assert_eq!(metro_score(3, 1.0), 100.0);
    }

    #[test]
    fn three_transfers_outscore_two_on_metro_score() {
        for factor in [0.1, 0.5, 1.0] {
            assert!(metro_score(3, factor) > metro_score(2, factor));
            assert_eq!(metro_score(4, factor), metro_score(0, factor));
        }
    }

    #[test]
    fn composite_weights_by_transfers() {
        assert_eq!(composite_score(0, 50.0, 100.0), 60.0);
        assert_eq!(composite_score(1, 100.0, 60.0), 86.0);
        assert_eq!(composite_score(2, 100.0, 20.0), 68.0);
        assert_eq!(composite_weights(5), (0.60, 0.40));
    }

    #[test]
    fn journey_time_adds_penalties() {
        let config = PlannerConfig::default();
        // 3 + 2 + 20 + 2 * 3 + 6
        assert_eq!(total_journey_mins(&route(1.0, 0.5, 2, 20.0), &config), 37.0);
        // 3 + 2 + 12 + 0 + 6
        assert_eq!(total_journey_mins(&route(1.0, 0.5, 0, 12.0), &config), 23.0);
    }

    #[test]
    fn shortest_route_scores_full_access() {
        let config = PlannerConfig::default();
        let scored = score_candidates(
            vec![route(1.0, 1.0, 0, 10.0), route(3.0, 1.0, 0, 10.0)],
            2.0,
            &config,
        );

        assert_eq!(scored[0].score.access_score, 100.0);
        assert_eq!(scored[0].composite(), 100.0);
        assert_eq!(scored[1].score.access_score, 50.0);
        // 50 * 0.8 + 100 * 0.2
        assert_eq!(scored[1].composite(), 60.0);
    }

    #[test]
    fn single_transfer_scenario() {
        let config = PlannerConfig::default();
        // Total access 10 km: factor 0.5, metro 80.
        let scored = score_candidates(vec![route(6.0, 4.0, 1, 25.0)], 10.0, &config);
        let s = scored[0].score;
        assert_eq!(s.access_factor, 0.5);
        assert_eq!(s.metro_score, 80.0);
        assert_eq!(s.composite, 100.0 * 0.65 + 80.0 * 0.35);
    }
}
