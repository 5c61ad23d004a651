//! Route planner over the transit network.
//!
//! Two queries are answered:
//!
//! - [`shortest_path`]: minimum total distance (Dijkstra).
//! - [`minimum_exchanges`]: fewest line changes, with total distance as the
//!   tie-break.
//!
//! Both searches are synchronous and own all of their state, so any number
//! of them can run against the same shared [`TransitGraph`].

mod config;
mod estimate;
mod exchanges;
mod shortest;
mod trace;


use crate::domain::{Route, StationId};
use crate::network::TransitGraph;

pub use config::EstimateConfig;
pub use estimate::JourneyEstimate;
pub use exchanges::minimum_exchanges;
pub use shortest::shortest_path;

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// An endpoint is not a station in the network
    #[error("station not found: {station}")]
    StationNotFound { station: String },

    /// Both endpoints exist but are not connected
    #[error("no path found from {origin} to {destination}")]
    NoPathFound {
        origin: StationId,
        destination: StationId,
    },
}

/// Which optimisation a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Minimum total distance.
    Shortest,
    /// Fewest line changes, then minimum distance.
    MinimumExchanges,
}

impl Mode {
    /// Run the query for this mode.
    pub fn plan(
        self,
        graph: &TransitGraph,
        source: &str,
        destination: &str,
    ) -> Result<Route, RouteError> {
        match self {
            Mode::Shortest => shortest_path(graph, source, destination),
            Mode::MinimumExchanges => minimum_exchanges(graph, source, destination),
        }
    }
}

/// Look up both endpoints, source first.
pub(crate) fn resolve<'g>(
    graph: &'g TransitGraph,
    source: &str,
    destination: &str,
) -> Result<(&'g StationId, &'g StationId), RouteError> {
    let find = |name: &str| {
        graph
            .station(name)
            .ok_or_else(|| RouteError::StationNotFound {
                station: name.to_string(),
            })
    };
    Ok((find(source)?, find(destination)?))
}
