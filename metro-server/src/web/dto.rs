//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Route;
use crate::planner::JourneyEstimate;

/// Query parameters for both route endpoints.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub source: Option<String>,

    /// Destination station name
    pub destination: Option<String>,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Station names, origin first
    pub path: Vec<String>,

    /// Line used on each hop
    pub lines: Vec<String>,

    /// Sum of hop distances (km)
    pub total_distance: f64,

    /// Line changes, only for minimum-exchange queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_line_changes: Option<usize>,

    /// Estimated travel time in minutes
    pub estimated_minutes: i64,

    /// Estimated fare
    pub fare: u32,
}

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query (case-insensitive substring)
    #[serde(default)]
    pub q: String,

    /// Maximum number of results (default 10, max 50)
    pub limit: Option<usize>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// Matching station names, sorted
    pub stations: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteResponse {
    /// Create from a planned route and its estimate.
    pub fn from_route(route: &Route, estimate: &JourneyEstimate) -> Self {
        Self {
            path: route
                .stations()
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            lines: route.lines().iter().map(|l| l.as_str().to_string()).collect(),
            total_distance: route.total_distance(),
            total_line_changes: route.line_changes(),
            estimated_minutes: estimate.travel_time.num_minutes(),
            fare: estimate.fare,
        }
    }
}
