//! Route types.
//!
//! A `Route` is the answer to a planner query: the ordered stations from
//! origin to destination, the line used on each hop, and the totals.

use std::fmt;

use super::{DomainError, LineId, StationId};

/// One hop of a route: a ride between two adjacent stations on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop<'a> {
    pub from: &'a StationId,
    pub to: &'a StationId,
    pub line: &'a LineId,
}

/// A complete route from origin to destination.
///
/// # Invariants
///
/// - At least one station
/// - Exactly one line per hop (`lines.len() == stations.len() - 1`)
/// - `total_distance` is non-negative
///
/// A single-station route (origin equals destination) is valid and has zero
/// distance and no hops.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    stations: Vec<StationId>,
    lines: Vec<LineId>,
    total_distance: f64,
    line_changes: Option<usize>,
}

impl Route {
    /// Constructs a route from its parts.
    ///
    /// `line_changes` is the optimised change count reported by a
    /// minimum-exchange search; routes from a shortest-distance search pass
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `stations` is empty
    /// - the number of lines is not one less than the number of stations
    /// - `total_distance` is negative or not finite
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_server::domain::{LineId, Route, StationId};
    ///
    /// let a = StationId::parse("Rajiv Chowk").unwrap();
    /// let b = StationId::parse("Civil Lines").unwrap();
    ///
    /// let route = Route::new(vec![a, b], vec![LineId::new("Yellow")], 10.0, Some(0)).unwrap();
    /// assert_eq!(route.to_string(), "Rajiv Chowk -> Civil Lines");
    /// ```
    pub fn new(
        stations: Vec<StationId>,
        lines: Vec<LineId>,
        total_distance: f64,
        line_changes: Option<usize>,
    ) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        if lines.len() + 1 != stations.len() {
            return Err(DomainError::HopCountMismatch {
                stations: stations.len(),
                lines: lines.len(),
            });
        }

        if !total_distance.is_finite() || total_distance < 0.0 {
            return Err(DomainError::InvalidDistance(total_distance));
        }

        Ok(Self {
            stations,
            lines,
            total_distance,
            line_changes,
        })
    }

    /// A route that starts and ends at `station`.
    pub(crate) fn stationary(station: StationId, line_changes: Option<usize>) -> Self {
        Self {
            stations: vec![station],
            lines: Vec::new(),
            total_distance: 0.0,
            line_changes,
        }
    }

    /// Stations in travel order, origin first.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// The line used on each hop, in travel order.
    pub fn lines(&self) -> &[LineId] {
        &self.lines
    }

    /// Sum of the hop distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Change count reported by a minimum-exchange search, if this route came
    /// from one.
    pub fn line_changes(&self) -> Option<usize> {
        self.line_changes
    }

    pub fn origin(&self) -> &StationId {
        &self.stations[0]
    }

    pub fn destination(&self) -> &StationId {
        &self.stations[self.stations.len() - 1]
    }

    /// Iterate over the hops of the route.
    pub fn hops(&self) -> impl Iterator<Item = Hop<'_>> {
        self.stations
            .windows(2)
            .zip(&self.lines)
            .map(|(pair, line)| Hop {
                from: &pair[0],
                to: &pair[1],
                line,
            })
    }

    /// Number of places where consecutive hops use different lines.
    ///
    /// Unlike [`Route::line_changes`] this is derived from the hop sequence,
    /// so it is available for every route.
    pub fn interchanges(&self) -> usize {
        self.lines.windows(2).filter(|w| w[0] != w[1]).count()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, station) in self.stations.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{station}")?;
        }
        Ok(())
    }
}
