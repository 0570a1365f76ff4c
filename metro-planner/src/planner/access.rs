//! Access-leg resolution.
//!
//! Every candidate station needs a first-mile leg (origin to station) or a
//! last-mile leg (station to destination). Legs are fetched concurrently with
//! a bound on requests in flight; a leg that fails or times out is simply
//! missing from the result.

use std::collections::HashMap;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::directions::{DirectionsError, TravelEstimate, TravelEstimator};
use crate::domain::{AccessMode, LatLng, TravelMode, format_duration, minutes_f64};

use super::proximity::ProximityCandidate;

/// Which end of the trip a leg belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegKind {
    /// Origin point to a station.
    FirstMile,
    /// Station to destination point.
    LastMile,
}

/// Identifies a resolved leg: kind plus station name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegKey {
    pub kind: LegKind,
    pub station: String,
}

impl LegKey {
    pub fn first_mile(station: impl Into<String>) -> Self {
        Self {
            kind: LegKind::FirstMile,
            station: station.into(),
        }
    }

    pub fn last_mile(station: impl Into<String>) -> Self {
        Self {
            kind: LegKind::LastMile,
            station: station.into(),
        }
    }
}

/// A resolved walk or taxi ride between a query point and a station.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessLeg {
    pub from: LatLng,
    pub to: LatLng,
    pub mode: AccessMode,
    pub distance_km: f64,
    pub duration: chrono::Duration,
    pub traffic_aware: bool,
}

impl AccessLeg {
    fn from_estimate(request: &LegRequest, estimate: TravelEstimate) -> Self {
        Self {
            from: request.from,
            to: request.to,
            mode: request.mode,
            distance_km: estimate.distance_km,
            duration: estimate.duration,
            traffic_aware: estimate.traffic_aware,
        }
    }

    /// Duration in fractional minutes.
    pub fn minutes(&self) -> f64 {
        minutes_f64(self.duration)
    }

    pub fn time_display(&self) -> String {
        format_duration(self.duration)
    }
}

/// One leg to ask the estimator for.
#[derive(Debug, Clone)]
pub struct LegRequest {
    pub key: LegKey,
    pub from: LatLng,
    pub to: LatLng,
    pub mode: AccessMode,
}

/// Build the leg requests for both ends of a trip.
///
/// First-mile requests come first, in candidate order.
pub fn leg_requests(
    origin: LatLng,
    destination: LatLng,
    origin_candidates: &[ProximityCandidate],
    destination_candidates: &[ProximityCandidate],
) -> Vec<LegRequest> {
    let first = origin_candidates.iter().map(|c| LegRequest {
        key: LegKey::first_mile(c.name()),
        from: origin,
        to: c.station.location,
        mode: c.mode,
    });
    let last = destination_candidates.iter().map(|c| LegRequest {
        key: LegKey::last_mile(c.name()),
        from: c.station.location,
        to: destination,
        mode: c.mode,
    });
    first.chain(last).collect()
}

/// Run one estimate under a deadline.
async fn estimate_with_deadline<E: TravelEstimator>(
    estimator: &E,
    from: LatLng,
    to: LatLng,
    mode: TravelMode,
    deadline: Duration,
) -> Result<TravelEstimate, DirectionsError> {
    match tokio::time::timeout(deadline, estimator.estimate(from, to, mode)).await {
        Ok(result) => result,
        Err(_) => Err(DirectionsError::Timeout(deadline.as_secs())),
    }
}

/// Resolve all `requests`, at most `max_concurrent` at a time.
///
/// Results are collected in completion order. Failed legs are logged and
/// left out; the batch itself never fails.
pub async fn resolve_legs<E: TravelEstimator>(
    estimator: &E,
    requests: Vec<LegRequest>,
    max_concurrent: usize,
    deadline: Duration,
) -> HashMap<LegKey, AccessLeg> {
    let requested = requests.len();

    let results: Vec<_> = stream::iter(requests)
        .map(|request| async move {
            let result = estimate_with_deadline(
                estimator,
                request.from,
                request.to,
                request.mode.travel_mode(),
                deadline,
            )
            .await;
            (request, result)
        })
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await;

    let mut legs = HashMap::with_capacity(results.len());
    for (request, result) in results {
        match result {
            Ok(estimate) => {
                let leg = AccessLeg::from_estimate(&request, estimate);
                legs.insert(request.key, leg);
            }
            Err(DirectionsError::Timeout(secs)) => {
                warn!(
                    station = %request.key.station,
                    kind = ?request.key.kind,
                    timeout_secs = secs,
                    "Access leg timed out, dropping"
                );
            }
            Err(e) => {
                debug!(
                    station = %request.key.station,
                    kind = ?request.key.kind,
                    error = %e,
                    "Failed to resolve access leg, dropping"
                );
            }
        }
    }

    debug!(requested, resolved = legs.len(), "Access legs resolved");
    legs
}

/// Driving estimate straight from origin to destination, if available.
pub async fn resolve_direct_taxi<E: TravelEstimator>(
    estimator: &E,
    origin: LatLng,
    destination: LatLng,
    deadline: Duration,
) -> Option<TravelEstimate> {
    match estimate_with_deadline(estimator, origin, destination, TravelMode::Driving, deadline)
        .await
    {
        Ok(estimate) => Some(estimate),
        Err(e) => {
            warn!(error = %e, "Direct taxi estimate unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration as ChronoDuration;

    use super::*;
    use crate::directions::{MockEstimator, SpeedModel};
    use crate::domain::Station;

    fn pt(lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng).unwrap()
    }

    fn candidate(name: &str, lat: f64, lng: f64, mode: AccessMode) -> ProximityCandidate {
        ProximityCandidate {
            station: Arc::new(Station::new(name, pt(lat, lng), vec![])),
            proxy_distance: 0.0,
            geodesic_km: 0.0,
            mode,
        }
    }

    fn candidates(prefix: &str, n: usize, base_lat: f64) -> Vec<ProximityCandidate> {
        (0..n)
            .map(|i| {
                candidate(
                    &format!("{prefix}{i}"),
                    base_lat + i as f64 * 0.01,
                    77.6,
                    AccessMode::Taxi,
                )
            })
            .collect()
    }

    #[test]
    fn requests_cover_both_ends() {
        let origin = pt(12.90, 77.50);
        let dest = pt(13.05, 77.70);
        let from = vec![candidate("A", 12.91, 77.51, AccessMode::Walking)];
        let to = vec![
            candidate("B", 13.04, 77.69, AccessMode::Taxi),
            candidate("C", 13.06, 77.71, AccessMode::Taxi),
        ];

        let reqs = leg_requests(origin, dest, &from, &to);
        assert_eq!(reqs.len(), 3);

        assert_eq!(reqs[0].key, LegKey::first_mile("A"));
        assert_eq!(reqs[0].from, origin);
        assert_eq!(reqs[0].mode, AccessMode::Walking);

        assert_eq!(reqs[2].key, LegKey::last_mile("C"));
        assert_eq!(reqs[2].to, dest);
        assert_eq!(reqs[2].from, pt(13.06, 77.71));
    }

    #[tokio::test]
    async fn resolves_every_leg() {
        let estimator = MockEstimator::straight_line(SpeedModel::default());
        let origin = pt(12.90, 77.50);
        let dest = pt(13.05, 77.70);
        let reqs = leg_requests(
            origin,
            dest,
            &candidates("O", 7, 12.92),
            &candidates("D", 7, 13.00),
        );

        let legs = resolve_legs(&estimator, reqs, 5, Duration::from_secs(10)).await;

        assert_eq!(legs.len(), 14);
        assert_eq!(estimator.call_count(), 14);
        let leg = &legs[&LegKey::first_mile("O3")];
        assert_eq!(leg.mode, AccessMode::Taxi);
        assert!(leg.distance_km > 0.0);
    }

    #[tokio::test]
    async fn concurrency_is_bounded() {
        let estimator = MockEstimator::straight_line(SpeedModel::default())
            .with_delay(Duration::from_millis(20));
        let reqs = leg_requests(
            pt(12.90, 77.50),
            pt(13.05, 77.70),
            &candidates("O", 7, 12.92),
            &candidates("D", 7, 13.00),
        );

        let legs = resolve_legs(&estimator, reqs, 5, Duration::from_secs(10)).await;

        assert_eq!(legs.len(), 14);
        assert!(estimator.max_in_flight() <= 5);
        assert!(estimator.max_in_flight() >= 2);
    }

    #[tokio::test]
    async fn failed_legs_are_dropped() {
        let origin = pt(12.90, 77.50);
        let dest = pt(13.05, 77.70);
        let from = candidates("O", 3, 12.92);
        let estimator = MockEstimator::straight_line(SpeedModel::default())
            .with_failure(origin, from[1].station.location);

        let reqs = leg_requests(origin, dest, &from, &candidates("D", 2, 13.00));
        let legs = resolve_legs(&estimator, reqs, 5, Duration::from_secs(10)).await;

        assert_eq!(legs.len(), 4);
        assert!(!legs.contains_key(&LegKey::first_mile("O1")));
        assert!(legs.contains_key(&LegKey::first_mile("O0")));
        assert!(legs.contains_key(&LegKey::last_mile("D1")));
    }

    #[tokio::test]
    async fn slow_legs_time_out() {
        let estimator = MockEstimator::straight_line(SpeedModel::default())
            .with_delay(Duration::from_millis(200));
        let reqs = leg_requests(
            pt(12.90, 77.50),
            pt(13.05, 77.70),
            &candidates("O", 2, 12.92),
            &[],
        );

        let legs = resolve_legs(&estimator, reqs, 5, Duration::from_millis(10)).await;
        assert!(legs.is_empty());
    }

    #[tokio::test]
    async fn zero_concurrency_still_resolves() {
        let estimator = MockEstimator::straight_line(SpeedModel::default());
        let reqs = leg_requests(
            pt(12.90, 77.50),
            pt(13.05, 77.70),
            &candidates("O", 2, 12.92),
            &[],
        );
        let legs = resolve_legs(&estimator, reqs, 0, Duration::from_secs(10)).await;
        assert_eq!(legs.len(), 2);
    }

    #[tokio::test]
    async fn direct_taxi_uses_driving() {
        let origin = pt(12.90, 77.50);
        let dest = pt(13.05, 77.70);
        let estimator = MockEstimator::new().with_route(
            origin,
            dest,
            TravelEstimate::new(26.0, ChronoDuration::minutes(55)),
        );

        let direct = resolve_direct_taxi(&estimator, origin, dest, Duration::from_secs(10))
            .await
            .unwrap();
        assert_eq!(direct.distance_km, 26.0);

        let none = resolve_direct_taxi(&estimator, dest, origin, Duration::from_secs(10)).await;
        assert!(none.is_none());
    }

    #[test]
    fn leg_minutes_are_fractional() {
        let leg = AccessLeg {
            from: pt(12.9, 77.5),
            to: pt(12.91, 77.5),
            mode: AccessMode::Walking,
            distance_km: 1.1,
            duration: ChronoDuration::seconds(150),
            traffic_aware: false,
        };
        assert_eq!(leg.minutes(), 2.5);
        assert_eq!(leg.time_display(), "2 min 30 sec");
    }
}
