//! Predecessor tracking and path reconstruction shared by both searches.

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::{LineId, StationId};

/// A search node: a station, possibly with extra state attached.
pub(crate) trait SearchNode: Clone + Eq + Hash {
    fn station(&self) -> &StationId;
}

impl SearchNode for StationId {
    fn station(&self) -> &StationId {
        self
    }
}

/// How each node was reached: the previous node and the line of the hop.
///
/// A node's entry is overwritten each time its cost strictly improves.
#[derive(Debug)]
pub(crate) struct Predecessors<N> {
    reached_from: HashMap<N, (N, LineId)>,
}

impl<N: SearchNode> Predecessors<N> {
    pub(crate) fn new() -> Self {
        Self {
            reached_from: HashMap::new(),
        }
    }

    pub(crate) fn record(&mut self, node: N, previous: N, line: LineId) {
        self.reached_from.insert(node, (previous, line));
    }

    pub(crate) fn contains(&self, node: &N) -> bool {
        self.reached_from.contains_key(node)
    }

    /// Walk back from `to` to `from`, returning stations and hop lines in
    /// travel order.
    ///
    /// Returns `None` if the chain breaks before reaching `from`.
    pub(crate) fn reconstruct(&self, from: &N, to: &N) -> Option<(Vec<StationId>, Vec<LineId>)> {
        let mut stations = vec![to.station().clone()];
        let mut lines = Vec::new();
        let mut current = to;

        while current != from {
            // A chain longer than the map means it loops
            if lines.len() > self.reached_from.len() {
                return None;
            }
            let (previous, line) = self.reached_from.get(current)?;
            stations.push(previous.station().clone());
            lines.push(line.clone());
            current = previous;
        }

        stations.reverse();
        lines.reverse();
        Some((stations, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn reconstruct_in_travel_order() {
        let mut preds = Predecessors::new();
        preds.record(station("B"), station("A"), LineId::new("Red"));
        preds.record(station("C"), station("B"), LineId::new("Blue"));

        let (stations, lines) = preds.reconstruct(&station("A"), &station("C")).unwrap();
        let names: Vec<_> = stations.iter().map(StationId::as_str).collect();
        let lines: Vec<_> = lines.iter().map(LineId::as_str).collect();

        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(lines, vec!["Red", "Blue"]);
    }

    #[test]
    fn reconstruct_same_node() {
        let preds: Predecessors<StationId> = Predecessors::new();
        let (stations, lines) = preds.reconstruct(&station("A"), &station("A")).unwrap();
        assert_eq!(stations, vec![station("A")]);
        assert!(lines.is_empty());
    }

    #[test]
    fn broken_chain() {
        let mut preds = Predecessors::new();
        preds.record(station("C"), station("B"), LineId::new("Blue"));
        assert!(preds.reconstruct(&station("A"), &station("C")).is_none());
    }

    #[test]
    fn looping_chain() {
        let mut preds = Predecessors::new();
        preds.record(station("B"), station("C"), LineId::new("Red"));
        preds.record(station("C"), station("B"), LineId::new("Red"));
        assert!(preds.reconstruct(&station("A"), &station("C")).is_none());
    }

    #[test]
    fn latest_record_wins() {
        let mut preds = Predecessors::new();
        preds.record(station("C"), station("A"), LineId::new("Red"));
        preds.record(station("C"), station("B"), LineId::new("Blue"));
        preds.record(station("B"), station("A"), LineId::new("Blue"));

        assert!(preds.contains(&station("C")));
        let (stations, _) = preds.reconstruct(&station("A"), &station("C")).unwrap();
        assert_eq!(stations.len(), 3);
    }
}
