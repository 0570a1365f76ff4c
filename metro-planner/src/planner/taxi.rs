//! Direct-taxi override.
//!
//! After ranking, the best metro route is compared with a single taxi ride
//! from origin to destination. A fixed table of rules decides whether the
//! taxi should be suggested instead; every rule that fires contributes a
//! human-readable reason.

use serde::Serialize;
use tracing::{debug, info};

use crate::directions::TravelEstimate;

use super::score::ScoredRoute;

/// One of the override rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideRule {
    /// The trip is short enough that a taxi is obviously fine.
    ShortTrip,
    /// Multimodal takes at least 1.5 times as long.
    MuchSlower,
    /// Multimodal takes at least 20 minutes longer.
    LargeTimeSaving,
    /// Access legs cover most of the direct distance.
    AccessDominates,
    /// A single access leg covers most of the direct distance.
    LongAccessLeg,
    /// Two or more transfers on a route that is also noticeably slower.
    TransferHeavy,
}

/// Everything the rules look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverrideInputs {
    pub direct_distance_km: f64,
    pub direct_time_mins: f64,
    pub multimodal_time_mins: f64,
    pub first_mile_km: f64,
    pub last_mile_km: f64,
    pub transfer_count: u32,
}

impl OverrideInputs {
    /// Gather inputs from the direct estimate and the best ranked route.
    pub fn new(direct: &TravelEstimate, best: &ScoredRoute) -> Self {
        Self {
            direct_distance_km: direct.distance_km,
            direct_time_mins: direct.minutes(),
            multimodal_time_mins: best.score.total_journey_mins,
            first_mile_km: best.candidate.first_mile.distance_km,
            last_mile_km: best.candidate.last_mile.distance_km,
            transfer_count: best.candidate.segment.transfer_count,
        }
    }

    /// Minutes the taxi saves over the multimodal route. Negative when the
    /// metro is faster.
    pub fn time_saving_mins(&self) -> f64 {
        self.multimodal_time_mins - self.direct_time_mins
    }

    fn access_km(&self) -> f64 {
        self.first_mile_km + self.last_mile_km
    }
}

struct RuleEntry {
    rule: OverrideRule,
    fires: fn(&OverrideInputs) -> bool,
    reason: fn(&OverrideInputs) -> String,
}

const SHORT_TRIP_KM: f64 = 7.0;
const MUCH_SLOWER_RATIO: f64 = 1.5;
const LARGE_SAVING_MINS: f64 = 20.0;
const ACCESS_SHARE: f64 = 0.8;
const SINGLE_LEG_SHARE: f64 = 0.7;
const TRANSFER_HEAVY_COUNT: u32 = 2;
const TRANSFER_HEAVY_RATIO: f64 = 1.3;

static RULES: [RuleEntry; 6] = [
    RuleEntry {
        rule: OverrideRule::ShortTrip,
        fires: |i| i.direct_distance_km <= SHORT_TRIP_KM,
        reason: |i| format!("Direct distance ≤ 7 km ({:.1} km)", i.direct_distance_km),
    },
    RuleEntry {
        rule: OverrideRule::MuchSlower,
        fires: |i| i.multimodal_time_mins >= MUCH_SLOWER_RATIO * i.direct_time_mins,
        reason: |i| {
            format!(
                "Multimodal time ≥ 1.5× direct time ({:.1} min ≥ {:.1} min)",
                i.multimodal_time_mins,
                MUCH_SLOWER_RATIO * i.direct_time_mins
            )
        },
    },
    RuleEntry {
        rule: OverrideRule::LargeTimeSaving,
        fires: |i| i.time_saving_mins() >= LARGE_SAVING_MINS,
        reason: |i| format!("Time saving ≥ 20 minutes ({:.1} min)", i.time_saving_mins()),
    },
    RuleEntry {
        rule: OverrideRule::AccessDominates,
        fires: |i| i.access_km() >= ACCESS_SHARE * i.direct_distance_km,
        reason: |i| {
            format!(
                "First+last mile ≥ 80% of direct distance ({:.1} km ≥ {:.1} km)",
                i.access_km(),
                ACCESS_SHARE * i.direct_distance_km
            )
        },
    },
    RuleEntry {
        rule: OverrideRule::LongAccessLeg,
        fires: |i| {
            let limit = SINGLE_LEG_SHARE * i.direct_distance_km;
            i.first_mile_km >= limit || i.last_mile_km >= limit
        },
        reason: |i| {
            format!(
                "First or last leg ≥ 70% of direct distance (first: {:.1} km, last: {:.1} km)",
                i.first_mile_km, i.last_mile_km
            )
        },
    },
    RuleEntry {
        rule: OverrideRule::TransferHeavy,
        fires: |i| {
            i.transfer_count >= TRANSFER_HEAVY_COUNT
                && i.multimodal_time_mins >= TRANSFER_HEAVY_RATIO * i.direct_time_mins
        },
        reason: |i| {
            format!(
                "Transfers ≥ 2 AND multimodal time ≥ 1.3× direct time ({} transfers, {:.1} min ≥ {:.1} min)",
                i.transfer_count,
                i.multimodal_time_mins,
                TRANSFER_HEAVY_RATIO * i.direct_time_mins
            )
        },
    },
];

/// Result of running every rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverrideDecision {
    /// Whether any rule fired.
    pub suggest: bool,
    pub rules: Vec<OverrideRule>,
    /// One reason per fired rule, in rule order.
    pub reasons: Vec<String>,
    pub direct_distance_km: f64,
    pub direct_time_mins: f64,
    pub time_saving_mins: f64,
}

/// Run the rule table.
pub fn evaluate_rules(inputs: &OverrideInputs) -> OverrideDecision {
    let (rules, reasons): (Vec<_>, Vec<_>) = RULES
        .iter()
        .filter(|entry| (entry.fires)(inputs))
        .map(|entry| (entry.rule, (entry.reason)(inputs)))
        .unzip();

    OverrideDecision {
        suggest: !rules.is_empty(),
        rules,
        reasons,
        direct_distance_km: inputs.direct_distance_km,
        direct_time_mins: inputs.direct_time_mins,
        time_saving_mins: inputs.time_saving_mins(),
    }
}

/// Override decision, or why none could be made.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OverrideOutcome {
    Evaluated(OverrideDecision),
    CannotEvaluate {
        missing_direct: bool,
        missing_route: bool,
    },
}

impl OverrideOutcome {
    pub fn decision(&self) -> Option<&OverrideDecision> {
        match self {
            OverrideOutcome::Evaluated(decision) => Some(decision),
            OverrideOutcome::CannotEvaluate { .. } => None,
        }
    }

    /// Whether a taxi is suggested. False when nothing could be evaluated.
    pub fn suggests_taxi(&self) -> bool {
        self.decision().is_some_and(|d| d.suggest)
    }
}

/// Compare the best route against a direct taxi.
pub fn evaluate_override(
    direct: Option<&TravelEstimate>,
    best: Option<&ScoredRoute>,
) -> OverrideOutcome {
    let (Some(direct), Some(best)) = (direct, best) else {
        debug!(
            missing_direct = direct.is_none(),
            missing_route = best.is_none(),
            "Cannot evaluate direct taxi override"
        );
        return OverrideOutcome::CannotEvaluate {
            missing_direct: direct.is_none(),
            missing_route: best.is_none(),
        };
    };

    let decision = evaluate_rules(&OverrideInputs::new(direct, best));
    info!(
        suggest = decision.suggest,
        rules = decision.rules.len(),
        direct_km = decision.direct_distance_km,
        direct_mins = decision.direct_time_mins,
        "Direct taxi override evaluated"
    );
    OverrideOutcome::Evaluated(decision)
}
