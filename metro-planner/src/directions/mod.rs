//! Point-to-point travel estimates.
//!
//! The planner only needs distance and duration between two points for a
//! given mode. [`TravelEstimator`] is that seam; [`DirectionsClient`] talks
//! to a Google Directions compatible API and [`MockEstimator`] answers from
//! memory.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::{TravelEstimate, convert_response};
pub use error::DirectionsError;
pub use mock::{MockEstimator, SpeedModel};
pub use types::{DirectionsLeg, DirectionsResponse, DirectionsRoute, TextValue};

use crate::domain::{LatLng, TravelMode};

/// Source of point-to-point travel estimates.
///
/// This abstraction allows the planner to be tested with mock data.
#[allow(async_fn_in_trait)]
pub trait TravelEstimator {
    /// Estimate distance and duration from `origin` to `destination`.
    async fn estimate(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: TravelMode,
    ) -> Result<TravelEstimate, DirectionsError>;
}

/// Estimator chosen at startup.
#[derive(Debug)]
pub enum Estimator {
    Directions(DirectionsClient),
    Mock(MockEstimator),
}

impl TravelEstimator for Estimator {
    async fn estimate(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: TravelMode,
    ) -> Result<TravelEstimate, DirectionsError> {
        match self {
            Estimator::Directions(client) => client.estimate(origin, destination, mode).await,
            Estimator::Mock(mock) => mock.estimate(origin, destination, mode).await,
        }
    }
}
