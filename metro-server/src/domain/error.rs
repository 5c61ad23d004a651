//! Domain error types.
//!
//! These errors represent validation failures when assembling domain values
//! by hand. Planner failures live in [`crate::planner::RouteError`].

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Route has no stations
    #[error("route must have at least one station")]
    EmptyRoute,

    /// Lines don't line up with the hops between stations
    #[error("route with {stations} stations must have {} lines, got {lines}", .stations.saturating_sub(1))]
    HopCountMismatch { stations: usize, lines: usize },

    /// Distance is negative, infinite or NaN
    #[error("invalid route distance: {0}")]
    InvalidDistance(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyRoute;
        assert_eq!(err.to_string(), "route must have at least one station");

        let err = DomainError::HopCountMismatch {
            stations: 3,
            lines: 1,
        };
        assert_eq!(err.to_string(), "route with 3 stations must have 2 lines, got 1");

        let err = DomainError::InvalidDistance(-2.5);
        assert_eq!(err.to_string(), "invalid route distance: -2.5");
    }
}
