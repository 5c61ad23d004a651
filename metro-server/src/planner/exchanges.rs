//! Minimum line-change search.
//!
//! Costs are the lexicographic pair `(line_changes, distance)`. The number
//! of changes added by the next hop depends on the line used to arrive, so
//! a search node is a station together with its arrival line. The origin
//! has no arrival line: the first hop never counts as a change.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};

use crate::domain::{LineId, Route, StationId};
use crate::network::TransitGraph;

use super::trace::{Predecessors, SearchNode};
use super::{RouteError, resolve};

/// A station reached on a particular line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Boarding {
    station: StationId,
    /// `None` only at the origin.
    line: Option<LineId>,
}

impl SearchNode for Boarding {
    fn station(&self) -> &StationId {
        &self.station
    }
}

/// Lexicographic cost: fewer changes first, then shorter distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Cost {
    changes: usize,
    distance: OrderedFloat<f64>,
}

impl Cost {
    const ZERO: Cost = Cost {
        changes: 0,
        distance: OrderedFloat(0.0),
    };

    /// Cost after riding `distance` on `next_line` having arrived on `current`.
    fn extend(self, current: Option<&LineId>, next_line: &LineId, distance: f64) -> Cost {
        let change = current.is_some_and(|line| line != next_line);
        Cost {
            changes: self.changes + usize::from(change),
            distance: OrderedFloat(self.distance.into_inner() + distance),
        }
    }
}

/// Frontier entry.
#[derive(Debug, Clone)]
struct Label {
    cost: Cost,
    node: Boarding,
}

// Reverse on cost so `BinaryHeap` pops the cheapest label. Equal costs go
// to the lexically smaller station name.
impl Ord for Label {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.station.cmp(&self.node.station))
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Label {}

/// Find the route from `source` to `destination` with the fewest line
/// changes, breaking ties by total distance.
///
/// The returned route has `line_changes() == Some(n)`.
///
/// # Errors
///
/// - [`RouteError::StationNotFound`] if either station is not in the network
/// - [`RouteError::NoPathFound`] if the stations are not connected
///
/// # Examples
///
/// ```
/// use metro_server::network::TransitGraph;
/// use metro_server::planner::minimum_exchanges;
///
/// let graph = TransitGraph::build([
///     ("Rajiv Chowk", "Kashmere Gate", 5.0, "Yellow"),
///     ("Kashmere Gate", "Civil Lines", 3.0, "Red"),
///     ("Rajiv Chowk", "Civil Lines", 10.0, "Yellow"),
/// ]);
///
/// // The direct Yellow ride beats the shorter trip that changes to Red.
/// let route = minimum_exchanges(&graph, "Rajiv Chowk", "Civil Lines").unwrap();
/// assert_eq!(route.to_string(), "Rajiv Chowk -> Civil Lines");
/// assert_eq!(route.line_changes(), Some(0));
/// assert_eq!(route.total_distance(), 10.0);
/// ```
pub fn minimum_exchanges(
    graph: &TransitGraph,
    source: &str,
    destination: &str,
) -> Result<Route, RouteError> {
    let (origin, destination) = resolve(graph, source, destination)?;

    if origin == destination {
        return Ok(Route::stationary(origin.clone(), Some(0)));
    }

    let start = Boarding {
        station: origin.clone(),
        line: None,
    };

    let mut best: HashMap<Boarding, Cost> = HashMap::new();
    let mut predecessors = Predecessors::new();
    let mut heap = BinaryHeap::new();
    let mut settled = 0usize;

    best.insert(start.clone(), Cost::ZERO);
    heap.push(Label {
        cost: Cost::ZERO,
        node: start.clone(),
    });

    while let Some(Label { cost, node }) = heap.pop() {
        if best.get(&node).is_some_and(|&known| cost > known) {
            continue;
        }

        settled += 1;
        trace!(
            station = %node.station,
            line = ?node.line,
            changes = cost.changes,
            distance = cost.distance.into_inner(),
            "Settled boarding"
        );

        // Every label still in the heap costs at least this much, and
        // costs never decrease along a route.
        if node.station == *destination {
            return finish(&predecessors, &start, &node, cost, settled);
        }

        for connection in graph.neighbors(node.station.as_str()) {
            let next_cost = cost.extend(node.line.as_ref(), &connection.line, connection.distance);
            let next = Boarding {
                station: connection.neighbor.clone(),
                line: Some(connection.line.clone()),
            };

            let improves = best.get(&next).is_none_or(|&known| next_cost < known);
            if improves {
                best.insert(next.clone(), next_cost);
                predecessors.record(next.clone(), node.clone(), connection.line.clone());
                heap.push(Label {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    debug!(%origin, %destination, settled, "No path found");
    Err(RouteError::NoPathFound {
        origin: origin.clone(),
        destination: destination.clone(),
    })
}

fn finish(
    predecessors: &Predecessors<Boarding>,
    start: &Boarding,
    end: &Boarding,
    cost: Cost,
    settled: usize,
) -> Result<Route, RouteError> {
    let no_path = || RouteError::NoPathFound {
        origin: start.station.clone(),
        destination: end.station.clone(),
    };

    let Some((stations, lines)) = predecessors.reconstruct(start, end) else {
        warn!(
            origin = %start.station,
            destination = %end.station,
            "Predecessor chain broken during reconstruction"
        );
        return Err(no_path());
    };

    let total_distance = cost.distance.into_inner();
    let route = Route::new(stations, lines, total_distance, Some(cost.changes)).map_err(|e| {
        warn!(
            origin = %start.station,
            destination = %end.station,
            error = %e,
            "Reconstructed route is invalid"
        );
        no_path()
    })?;

    debug!(
        origin = %start.station,
        destination = %end.station,
        settled,
        changes = cost.changes,
        total_distance,
        "Minimum-exchange route found"
    );

    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: &str) -> LineId {
        LineId::new(s)
    }

    fn names(route: &Route) -> Vec<&str> {
        route.stations().iter().map(StationId::as_str).collect()
    }

    fn lines(route: &Route) -> Vec<&str> {
        route.lines().iter().map(LineId::as_str).collect()
    }

    fn delhi() -> TransitGraph {
        TransitGraph::build([
            ("Rajiv Chowk", "Kashmere Gate", 5.0, "Yellow"),
            ("Kashmere Gate", "Civil Lines", 3.0, "Red"),
            ("Rajiv Chowk", "Civil Lines", 10.0, "Yellow"),
        ])
    }

    #[test]
    fn cost_ordering_is_lexicographic() {
        let few_changes_long = Cost {
            changes: 0,
            distance: OrderedFloat(100.0),
        };
        let more_changes_short = Cost {
            changes: 1,
            distance: OrderedFloat(1.0),
        };
        assert!(few_changes_long < more_changes_short);

        let shorter = Cost {
            changes: 1,
            distance: OrderedFloat(0.5),
        };
        assert!(shorter < more_changes_short);
    }

    #[test]
    fn extend_counts_changes() {
        let red = line("Red");
        let blue = line("Blue");

        let first = Cost::ZERO.extend(None, &red, 2.0);
        assert_eq!(first.changes, 0);
        assert_eq!(first.distance.into_inner(), 2.0);

        let same = first.extend(Some(&red), &red, 1.0);
        assert_eq!(same.changes, 0);
        assert_eq!(same.distance.into_inner(), 3.0);

        let switch = same.extend(Some(&red), &blue, 1.0);
        assert_eq!(switch.changes, 1);
        assert_eq!(switch.distance.into_inner(), 4.0);
    }

    #[test]
    fn prefers_fewer_changes_over_distance() {
        let route = minimum_exchanges(&delhi(), "Rajiv Chowk", "Civil Lines").unwrap();

        assert_eq!(names(&route), vec!["Rajiv Chowk", "Civil Lines"]);
        assert_eq!(lines(&route), vec!["Yellow"]);
        assert_eq!(route.line_changes(), Some(0));
        assert_eq!(route.total_distance(), 10.0);
    }

    #[test]
    fn same_station() {
        let route = minimum_exchanges(&delhi(), "Civil Lines", "Civil Lines").unwrap();
        assert_eq!(names(&route), vec!["Civil Lines"]);
        assert_eq!(route.line_changes(), Some(0));
        assert_eq!(route.total_distance(), 0.0);
    }

    #[test]
    fn unknown_station() {
        let err = minimum_exchanges(&delhi(), "Dwarka", "Civil Lines").unwrap_err();
        assert!(matches!(err, RouteError::StationNotFound { station } if station == "Dwarka"));
    }

    #[test]
    fn disconnected() {
        let graph = TransitGraph::build([("A", "B", 1.0, "Red"), ("C", "D", 1.0, "Blue")]);
        let err = minimum_exchanges(&graph, "A", "C").unwrap_err();
        assert!(matches!(err, RouteError::NoPathFound { .. }));
    }

    #[test]
    fn distance_breaks_ties_between_equal_changes() {
        // Both routes stay on Red; the lower one is shorter.
        let graph = TransitGraph::build([
            ("A", "B", 2.0, "Red"),
            ("B", "D", 2.0, "Red"),
            ("A", "C", 1.0, "Red"),
            ("C", "D", 1.0, "Red"),
        ]);
        let route = minimum_exchanges(&graph, "A", "D").unwrap();
        assert_eq!(names(&route), vec!["A", "C", "D"]);
        assert_eq!(route.line_changes(), Some(0));
        assert_eq!(route.total_distance(), 2.0);
    }

    #[test]
    fn counts_each_change() {
        let graph = TransitGraph::build([
            ("A", "B", 1.0, "Red"),
            ("B", "C", 1.0, "Blue"),
            ("C", "D", 1.0, "Green"),
        ]);
        let route = minimum_exchanges(&graph, "A", "D").unwrap();
        assert_eq!(route.line_changes(), Some(2));
        assert_eq!(route.interchanges(), 2);
        assert_eq!(lines(&route), vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn arrival_line_matters_at_shared_station() {
        // X is reached more cheaply on Red, but only arriving on Blue lets
        // the trip continue to D without a change.
        let graph = TransitGraph::build([
            ("S", "X", 1.0, "Red"),
            ("S", "X", 2.0, "Blue"),
            ("X", "D", 1.0, "Blue"),
        ]);
        let route = minimum_exchanges(&graph, "S", "D").unwrap();
        assert_eq!(names(&route), vec!["S", "X", "D"]);
        assert_eq!(lines(&route), vec!["Blue", "Blue"]);
        assert_eq!(route.line_changes(), Some(0));
        assert_eq!(route.total_distance(), 3.0);
    }

    #[test]
    fn revisiting_origin_on_a_line_is_allowed() {
        // Riding out and back along Red is never better than staying put,
        // but the search must still find the direct Blue hop.
        let graph = TransitGraph::build([("A", "B", 1.0, "Red"), ("A", "C", 5.0, "Blue")]);
        let route = minimum_exchanges(&graph, "A", "C").unwrap();
        assert_eq!(names(&route), vec!["A", "C"]);
        assert_eq!(route.line_changes(), Some(0));
    }
}
