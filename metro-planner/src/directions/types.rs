//! Directions API response DTOs.
//!
//! Only the fields the planner reads are modelled; everything else in the
//! response is ignored.

use serde::Deserialize;

/// Top-level response from `/directions/json`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// `"OK"` on success; otherwise e.g. `"ZERO_RESULTS"`, `"REQUEST_DENIED"`.
    pub status: String,

    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,

    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsLeg {
    /// Distance in metres.
    pub distance: TextValue,

    /// Traffic-free duration in seconds.
    pub duration: TextValue,

    /// Traffic-aware duration in seconds (driving with a departure time only).
    pub duration_in_traffic: Option<TextValue>,
}

/// A numeric value with its localised display text.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub value: f64,
    #[serde(default)]
    pub text: String,
}
