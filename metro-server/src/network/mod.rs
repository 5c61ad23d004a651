//! The transit network graph.
//!
//! Stations are nodes and connections are undirected edges carrying a
//! distance and a line label. The graph is assembled once with a
//! [`NetworkBuilder`] and is read-only afterwards, so it can be shared
//! behind an `Arc` by any number of concurrent queries.

mod load;

use std::collections::HashMap;

use crate::domain::{LineId, StationId};

pub use load::{LoadError, LoadReport, load_from_path, load_from_reader};

/// One side of an undirected connection, as seen from a station.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// The station at the other end.
    pub neighbor: StationId,
    /// Distance to the neighbour.
    pub distance: f64,
    /// Line the connection belongs to.
    pub line: LineId,
}

/// An immutable multi-line transit network.
///
/// Built by [`NetworkBuilder`] or [`TransitGraph::build`].
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    /// Adjacency lists, in insertion order per station.
    adjacency: HashMap<StationId, Vec<Connection>>,
    /// Number of undirected connections.
    connections: usize,
}

impl TransitGraph {
    /// Build a graph from `(station_a, station_b, distance, line)` rows.
    ///
    /// Rows that fail admission (see [`NetworkBuilder::add_connection`]) are
    /// skipped without error.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_server::network::TransitGraph;
    ///
    /// let graph = TransitGraph::build([
    ///     ("Rajiv Chowk", "Kashmere Gate", 5.0, "Yellow"),
    ///     ("Kashmere Gate", "Kashmere Gate", 1.0, "Red"), // self-loop, skipped
    /// ]);
    ///
    /// assert!(graph.contains("Rajiv Chowk"));
    /// assert_eq!(graph.connection_count(), 1);
    /// ```
    pub fn build<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, f64, &'a str)>,
    {
        let mut builder = NetworkBuilder::new();
        for (a, b, distance, line) in edges {
            builder.add_connection(a, b, distance, line);
        }
        builder.build()
    }

    /// Connections leaving `station`.
    ///
    /// An unknown station has no connections; use [`TransitGraph::contains`]
    /// where existence matters.
    pub fn neighbors(&self, station: &str) -> &[Connection] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check whether `station` is part of the network.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Look up the canonical identifier for a station name.
    pub fn station(&self, name: &str) -> Option<&StationId> {
        self.adjacency.get_key_value(name).map(|(id, _)| id)
    }

    /// All stations, sorted by name.
    pub fn stations(&self) -> Vec<&StationId> {
        let mut stations: Vec<_> = self.adjacency.keys().collect();
        stations.sort();
        stations
    }

    /// Returns the number of stations.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of connections (counting A–B and B–A as one).
    pub fn connection_count(&self) -> usize {
        self.connections
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Builder for a [`TransitGraph`].
///
/// Connections can only be added; [`NetworkBuilder::build`] freezes the
/// result.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: TransitGraph,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected connection between two stations.
    ///
    /// Station names and the line label are trimmed. The row is skipped,
    /// and `false` returned, when either station name is blank, both names
    /// are the same station, or the distance is negative or not finite.
    /// Otherwise the connection is stored in both directions.
    pub fn add_connection(&mut self, a: &str, b: &str, distance: f64, line: &str) -> bool {
        let (Ok(a), Ok(b)) = (StationId::parse(a), StationId::parse(b)) else {
            return false;
        };
        if a == b || !distance.is_finite() || distance < 0.0 {
            return false;
        }

        let line = LineId::new(line);
        self.inner
            .adjacency
            .entry(a.clone())
            .or_default()
            .push(Connection {
                neighbor: b.clone(),
                distance,
                line: line.clone(),
            });
        self.inner.adjacency.entry(b).or_default().push(Connection {
            neighbor: a,
            distance,
            line,
        });
        self.inner.connections += 1;
        true
    }

    /// Freeze the network.
    pub fn build(self) -> TransitGraph {
        self.inner
    }
}
