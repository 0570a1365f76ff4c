//! In-memory estimator for tests and offline runs.
//!
//! Serves fixed estimates per (origin, destination) pair, optionally
//! falling back to a straight-line speed model for unknown pairs.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Duration;

use crate::domain::{LatLng, TravelMode};

use super::TravelEstimator;
use super::convert::TravelEstimate;
use super::error::DirectionsError;

/// Average speeds used by [`MockEstimator::straight_line`], in km/h.
#[derive(Debug, Clone, Copy)]
pub struct SpeedModel {
    pub walking_kmh: f64,
    pub driving_kmh: f64,
    /// Straight-line distance is multiplied by this to approximate roads.
    pub detour_factor: f64,
}

impl Default for SpeedModel {
    fn default() -> Self {
        Self {
            walking_kmh: 4.8,
            driving_kmh: 22.0,
            detour_factor: 1.3,
        }
    }
}

type PairKey = (String, String);

fn key(origin: LatLng, destination: LatLng) -> PairKey {
    (origin.to_query(), destination.to_query())
}

/// Mock estimator serving canned answers.
#[derive(Debug, Default)]
pub struct MockEstimator {
    routes: HashMap<PairKey, TravelEstimate>,
    failures: HashSet<PairKey>,
    fallback: Option<SpeedModel>,
    delay: Option<std::time::Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockEstimator {
    /// Create an estimator with no routes; every request fails with `NoRoute`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator that answers every request from straight-line
    /// distance and average speed.
    pub fn straight_line(model: SpeedModel) -> Self {
        Self {
            fallback: Some(model),
            ..Self::default()
        }
    }

    /// Serve `estimate` for the exact pair.
    pub fn with_route(mut self, origin: LatLng, destination: LatLng, estimate: TravelEstimate) -> Self {
        self.routes.insert(key(origin, destination), estimate);
        self
    }

    /// Fail every request for the exact pair.
    pub fn with_failure(mut self, origin: LatLng, destination: LatLng) -> Self {
        self.failures.insert(key(origin, destination));
        self
    }

    /// Sleep this long before answering each request.
    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests currently in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of requests observed in flight at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn answer(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: TravelMode,
    ) -> Result<TravelEstimate, DirectionsError> {
        let pair = key(origin, destination);
        if self.failures.contains(&pair) {
            return Err(DirectionsError::Status {
                status: "UNKNOWN_ERROR".to_string(),
                message: "mock failure".to_string(),
            });
        }
        if let Some(estimate) = self.routes.get(&pair) {
            return Ok(*estimate);
        }
        let model = self.fallback.ok_or(DirectionsError::NoRoute)?;

        let distance_km = origin.haversine_km(&destination) * model.detour_factor;
        let speed = match mode {
            TravelMode::Walking => model.walking_kmh,
            TravelMode::Driving => model.driving_kmh,
        };
        let seconds = (distance_km / speed * 3600.0).round() as i64;
        Ok(TravelEstimate::new(distance_km, Duration::seconds(seconds)))
    }
}

impl TravelEstimator for MockEstimator {
    async fn estimate(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: TravelMode,
    ) -> Result<TravelEstimate, DirectionsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _guard = InFlight::enter(&self.in_flight, &self.max_in_flight);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.answer(origin, destination, mode)
    }
}

/// Counts a request as in flight until dropped, including when the caller
/// abandons the future mid-sleep.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(in_flight: &'a AtomicUsize, max_in_flight: &AtomicUsize) -> Self {
        let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        max_in_flight.fetch_max(now, Ordering::SeqCst);
        Self(in_flight)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
