//! Application state for the web layer.

use std::sync::Arc;

use crate::directions::Estimator;
use crate::network::{StationRegistry, TransitTable};
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Everything is loaded once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Point-to-point travel estimator
    pub estimator: Arc<Estimator>,

    /// Known metro stations
    pub stations: Arc<StationRegistry>,

    /// Precomputed station-to-station metro rides
    pub transit: Arc<TransitTable>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        estimator: Estimator,
        stations: StationRegistry,
        transit: TransitTable,
        config: PlannerConfig,
    ) -> Self {
        Self {
            estimator: Arc::new(estimator),
            stations: Arc::new(stations),
            transit: Arc::new(transit),
            config: Arc::new(config),
        }
    }
}
