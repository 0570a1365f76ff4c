//! Conversion from directions API responses to travel estimates.

use chrono::Duration;
use serde::Serialize;

use crate::domain::{TravelMode, format_duration, minutes_f64, split_minutes};

use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Distance and duration for one point-to-point trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TravelEstimate {
    pub distance_km: f64,

    #[serde(serialize_with = "serialize_seconds")]
    pub duration: Duration,

    /// Whether `duration` accounts for current traffic.
    pub traffic_aware: bool,
}

fn serialize_seconds<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(d.num_seconds())
}

impl TravelEstimate {
    pub fn new(distance_km: f64, duration: Duration) -> Self {
        Self {
            distance_km,
            duration,
            traffic_aware: false,
        }
    }

    /// Duration in fractional minutes.
    pub fn minutes(&self) -> f64 {
        minutes_f64(self.duration)
    }

    /// Whole minutes and remainder seconds.
    pub fn minutes_and_seconds(&self) -> (i64, i64) {
        split_minutes(self.duration)
    }

    /// e.g. `"12 min 30 sec"`.
    pub fn time_display(&self) -> String {
        format_duration(self.duration)
    }
}

/// Convert a parsed response into an estimate.
///
/// Uses the first leg of the first route. Driving estimates prefer the
/// traffic-aware duration and fall back to the traffic-free one.
pub fn convert_response(
    response: &DirectionsResponse,
    mode: TravelMode,
) -> Result<TravelEstimate, DirectionsError> {
    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" | "NOT_FOUND" => return Err(DirectionsError::NoRoute),
        "OVER_QUERY_LIMIT" => return Err(DirectionsError::RateLimited),
        "REQUEST_DENIED" => return Err(DirectionsError::Unauthorized),
        other => {
            return Err(DirectionsError::Status {
                status: other.to_string(),
                message: response.error_message.clone().unwrap_or_default(),
            });
        }
    }

    let leg = response
        .routes
        .first()
        .and_then(|route| route.legs.first())
        .ok_or(DirectionsError::NoRoute)?;

    let traffic = match mode {
        TravelMode::Driving => leg.duration_in_traffic.as_ref(),
        TravelMode::Walking => None,
    };
    let seconds = traffic.unwrap_or(&leg.duration).value;

    Ok(TravelEstimate {
        distance_km: leg.distance.value / 1000.0,
        duration: Duration::seconds(seconds.round() as i64),
        traffic_aware: traffic.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> DirectionsResponse {
        serde_json::from_str(json).unwrap()
    }

    const WITH_TRAFFIC: &str = r#"{
        "status": "OK",
        "routes": [{"legs": [{
            "distance": {"text": "3.4 km", "value": 3400},
            "duration": {"text": "11 mins", "value": 660},
            "duration_in_traffic": {"text": "14 mins", "value": 845}
        }]}]
    }"#;

    #[test]
    fn driving_prefers_traffic_duration() {
        let est = convert_response(&response(WITH_TRAFFIC), TravelMode::Driving).unwrap();
        assert_eq!(est.distance_km, 3.4);
        assert_eq!(est.duration, Duration::seconds(845));
        assert!(est.traffic_aware);
        assert_eq!(est.minutes_and_seconds(), (14, 5));
        assert_eq!(est.time_display(), "14 min 5 sec");
    }

    #[test]
    fn walking_ignores_traffic_duration() {
        let est = convert_response(&response(WITH_TRAFFIC), TravelMode::Walking).unwrap();
        assert_eq!(est.duration, Duration::seconds(660));
        assert!(!est.traffic_aware);
        assert_eq!(est.time_display(), "11 min");
    }

    #[test]
    fn driving_falls_back_without_traffic() {
        let json = r#"{"status": "OK", "routes": [{"legs": [{
            "distance": {"value": 1200}, "duration": {"value": 300}
        }]}]}"#;
        let est = convert_response(&response(json), TravelMode::Driving).unwrap();
        assert_eq!(est.duration, Duration::seconds(300));
        assert!(!est.traffic_aware);
    }

    #[test]
    fn status_mapping() {
        let zero = response(r#"{"status": "ZERO_RESULTS"}"#);
        assert!(matches!(
            convert_response(&zero, TravelMode::Walking),
            Err(DirectionsError::NoRoute)
        ));

        let denied = response(r#"{"status": "REQUEST_DENIED"}"#);
        assert!(matches!(
            convert_response(&denied, TravelMode::Walking),
            Err(DirectionsError::Unauthorized)
        ));

        let invalid = response(r#"{"status": "INVALID_REQUEST", "error_message": "bad"}"#);
        assert!(matches!(
            convert_response(&invalid, TravelMode::Walking),
            Err(DirectionsError::Status { ref status, .. }) if status == "INVALID_REQUEST"
        ));
    }

    #[test]
    fn ok_without_routes_is_no_route() {
        let empty = response(r#"{"status": "OK", "routes": []}"#);
        assert!(matches!(
            convert_response(&empty, TravelMode::Driving),
            Err(DirectionsError::NoRoute)
        ));
    }
}
