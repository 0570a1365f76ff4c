//! Planner configuration.

use std::time::Duration;

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Number of nearest stations considered at each end.
    pub candidate_count: usize,

    /// Stations at most this far (straight line, km) are reached on foot.
    pub walking_threshold_km: f64,

    /// Maximum number of access-leg estimates in flight at once.
    pub max_concurrent_legs: usize,

    /// Per-estimate deadline (seconds). Late estimates count as failed.
    pub leg_timeout_secs: u64,

    /// Number of ranked routes returned.
    pub top_k: usize,

    /// Total access distance (km) at which the transfer penalty saturates.
    pub access_saturation_km: f64,

    /// In-station walk time per metro transfer (minutes).
    pub transfer_penalty_mins: f64,

    /// Fixed boarding/alighting overhead between access legs and metro (minutes).
    pub access_interchange_mins: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        candidate_count: usize,
        walking_threshold_km: f64,
        max_concurrent_legs: usize,
        leg_timeout_secs: u64,
        top_k: usize,
        access_saturation_km: f64,
        transfer_penalty_mins: f64,
        access_interchange_mins: f64,
    ) -> Self {
        Self {
            candidate_count,
            walking_threshold_km,
            max_concurrent_legs,
            leg_timeout_secs,
            top_k,
            access_saturation_km,
            transfer_penalty_mins,
            access_interchange_mins,
        }
    }

    /// Returns the per-estimate deadline as a Duration.
    pub fn leg_timeout(&self) -> Duration {
        Duration::from_secs(self.leg_timeout_secs)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            candidate_count: 7,
            walking_threshold_km: 0.5,
            max_concurrent_legs: 5,
            leg_timeout_secs: 10,
            top_k: 5,
            access_saturation_km: 20.0,
            transfer_penalty_mins: 3.0,
            access_interchange_mins: 6.0, // 3 min each side
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.candidate_count, 7);
        assert_eq!(config.walking_threshold_km, 0.5);
        assert_eq!(config.max_concurrent_legs, 5);
        assert_eq!(config.leg_timeout_secs, 10);
        assert_eq!(config.top_k, 5);
        assert_eq!(config.access_saturation_km, 20.0);
        assert_eq!(config.transfer_penalty_mins, 3.0);
        assert_eq!(config.access_interchange_mins, 6.0);
    }

    #[test]
    fn duration_methods() {
        let config = PlannerConfig::default();
        assert_eq!(config.leg_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(3, 0.8, 2, 4, 1, 15.0, 2.0, 4.0);

        assert_eq!(config.candidate_count, 3);
        assert_eq!(config.walking_threshold_km, 0.8);
        assert_eq!(config.max_concurrent_legs, 2);
        assert_eq!(config.leg_timeout(), Duration::from_secs(4));
        assert_eq!(config.top_k, 1);
        assert_eq!(config.access_saturation_km, 15.0);
        assert_eq!(config.transfer_penalty_mins, 2.0);
        assert_eq!(config.access_interchange_mins, 4.0);
    }
}
