//! Travel time and fare estimates for a planned route.

use chrono::Duration;

use crate::domain::Route;

use super::config::EstimateConfig;

/// What a rider can expect from a route: how long it takes and what it costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyEstimate {
    pub travel_time: Duration,
    pub fare: u32,
}

impl JourneyEstimate {
    /// Estimate a route from its total distance.
    pub fn for_route(route: &Route, config: &EstimateConfig) -> Self {
        Self::for_distance(route.total_distance(), config)
    }

    /// Estimate a trip of `distance_km`.
    pub fn for_distance(distance_km: f64, config: &EstimateConfig) -> Self {
        Self {
            travel_time: config.travel_time(distance_km),
            fare: config.fare(distance_km),
        }
    }
}
