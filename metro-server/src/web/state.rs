//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::RouteCache;
use crate::network::TransitGraph;
use crate::planner::EstimateConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// The transit network, read-only after startup
    pub graph: Arc<TransitGraph>,

    /// Cache of planned routes
    pub cache: Arc<RouteCache>,

    /// Travel time and fare parameters
    pub estimates: Arc<EstimateConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: TransitGraph, cache: RouteCache, estimates: EstimateConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            cache: Arc::new(cache),
            estimates: Arc::new(estimates),
        }
    }
}
