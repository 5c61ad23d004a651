//! Shortest-distance search (Dijkstra).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};

use crate::domain::{Route, StationId};
use crate::network::TransitGraph;

use super::trace::Predecessors;
use super::{RouteError, resolve};

/// Frontier entry: a station and the distance it was reached at.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frontier {
    distance: OrderedFloat<f64>,
    station: StationId,
}

// `BinaryHeap` is a max-heap, so flip the ordering to pop the nearest
// station first. Ties go to the lexically smaller name.
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the route with the least total distance from `source` to
/// `destination`.
///
/// The returned route has `line_changes() == None`; the lines used on each
/// hop are still reported.
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
/// use metro_server::planner::shortest_path;
///
/// let graph = TransitGraph::build([
///     ("Rajiv Chowk", "Kashmere Gate", 5.0, "Yellow"),
///     ("Kashmere Gate", "Civil Lines", 3.0, "Red"),
///     ("Rajiv Chowk", "Civil Lines", 10.0, "Yellow"),
/// ]);
///
/// let route = shortest_path(&graph, "Rajiv Chowk", "Civil Lines").unwrap();
/// assert_eq!(route.to_string(), "Rajiv Chowk -> Kashmere Gate -> Civil Lines");
/// assert_eq!(route.total_distance(), 8.0);
/// ```
pub fn shortest_path(
    graph: &TransitGraph,
    source: &str,
    destination: &str,
) -> Result<Route, RouteError> {
    let (origin, destination) = resolve(graph, source, destination)?;

    if origin == destination {
        return Ok(Route::stationary(origin.clone(), None));
    }

    let mut best: HashMap<StationId, f64> = HashMap::new();
    let mut predecessors = Predecessors::new();
    let mut heap = BinaryHeap::new();
    let mut settled = 0usize;

    best.insert(origin.clone(), 0.0);
    heap.push(Frontier {
        distance: OrderedFloat(0.0),
        station: origin.clone(),
    });

    while let Some(Frontier { distance, station }) = heap.pop() {
        let distance = distance.into_inner();

        // Superseded by a shorter entry for the same station
        if best.get(&station).is_some_and(|&d| distance > d) {
            continue;
        }

        settled += 1;
        trace!(station = %station, distance, "Settled station");

        if station == *destination {
            break;
        }

        for connection in graph.neighbors(station.as_str()) {
            let next = distance + connection.distance;
            let improves = best
                .get(&connection.neighbor)
                .is_none_or(|&known| next < known);

            if improves {
                best.insert(connection.neighbor.clone(), next);
                predecessors.record(
                    connection.neighbor.clone(),
                    station.clone(),
                    connection.line.clone(),
                );
                heap.push(Frontier {
                    distance: OrderedFloat(next),
                    station: connection.neighbor.clone(),
                });
            }
        }
    }

    let no_path = || RouteError::NoPathFound {
        origin: origin.clone(),
        destination: destination.clone(),
    };

    if !predecessors.contains(destination) {
        debug!(%origin, %destination, settled, "No path found");
        return Err(no_path());
    }

    let Some((stations, lines)) = predecessors.reconstruct(origin, destination) else {
        warn!(%origin, %destination, "Predecessor chain broken during reconstruction");
        return Err(no_path());
    };
    let total_distance = best.get(destination).copied().unwrap_or_default();
    let route = Route::new(stations, lines, total_distance, None).map_err(|e| {
        warn!(%origin, %destination, error = %e, "Reconstructed route is invalid");
        no_path()
    })?;

    debug!(
        %origin,
        %destination,
        settled,
        hops = route.lines().len(),
        total_distance,
        "Shortest path found"
    );

    Ok(route)
}
