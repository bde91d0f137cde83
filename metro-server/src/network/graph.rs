//! Undirected, line-tagged network graph.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use tracing::info;

use crate::domain::{Line, Station};

use super::loader::{self, LoadError};

/// One directed traversal between two stations on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: Station,
    pub to: Station,
    pub line: Line,
    /// Travel time in minutes.
    pub minutes: f64,
}

impl Edge {
    pub fn new(from: Station, to: Station, line: Line, minutes: f64) -> Self {
        Self {
            from,
            to,
            line,
            minutes,
        }
    }

    /// The same traversal in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(
            self.to.clone(),
            self.from.clone(),
            self.line.clone(),
            self.minutes,
        )
    }
}

/// An undirected connection as read from the network data.
///
/// Registering a connection adds an [`Edge`] in each direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub from: Station,
    pub to: Station,
    pub line: Line,
    pub minutes: f64,
}

impl Connection {
    pub fn new(
        from: impl Into<Station>,
        to: impl Into<Station>,
        line: impl Into<Line>,
        minutes: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            line: line.into(),
            minutes,
        }
    }
}

/// Station adjacency plus the set of lines serving each station.
///
/// The graph performs no validation: negative times and duplicate edges are
/// stored as given. Queries about a station that was never added return
/// empty results rather than failing.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    /// Outgoing edges per station, in insertion order.
    adjacency: HashMap<Station, Vec<Edge>>,

    /// Distinct lines with an outgoing edge at each station.
    lines: HashMap<Station, BTreeSet<Line>>,

    /// Every station at either end of an edge.
    stations: HashSet<Station>,
}

impl NetworkGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from undirected connections, registering both directions.
    pub fn from_connections<I>(connections: I) -> Self
    where
        I: IntoIterator<Item = Connection>,
    {
        let mut graph = Self::new();
        for c in connections {
            graph.add_connection(c.from, c.to, c.line, c.minutes);
        }
        graph
    }

    /// Load a graph from a comma-separated network file.
    ///
    /// See [`loader::load_connections`] for the expected format.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let connections = loader::load_connections(path)?;
        let graph = Self::from_connections(connections);
        info!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            "Loaded network"
        );
        Ok(graph)
    }

    /// Insert a single directed edge.
    ///
    /// Only `from` gains the line in its line set. Use [`add_connection`]
    /// for an undirected link.
    ///
    /// [`add_connection`]: NetworkGraph::add_connection
    pub fn add_edge(&mut self, from: Station, to: Station, line: Line, minutes: f64) {
        self.stations.insert(from.clone());
        self.stations.insert(to.clone());
        self.lines
            .entry(from.clone())
            .or_default()
            .insert(line.clone());
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push(Edge::new(from, to, line, minutes));
    }

    /// Insert an undirected connection as two directed edges.
    pub fn add_connection(&mut self, from: Station, to: Station, line: Line, minutes: f64) {
        self.add_edge(from.clone(), to.clone(), line.clone(), minutes);
        self.add_edge(to, from, line, minutes);
    }

    /// All outgoing edges from `station`, empty if the station is unknown.
    pub fn neighbours(&self, station: &str) -> &[Edge] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Lines serving `station` in label order, empty if the station is unknown.
    pub fn lines_at(&self, station: &str) -> impl Iterator<Item = &Line> + '_ {
        self.lines.get(station).into_iter().flatten()
    }

    /// Check whether `station` appears at either end of any edge.
    pub fn contains_station(&self, station: &str) -> bool {
        self.stations.contains(station)
    }

    /// All station names, sorted and deduplicated.
    pub fn stations(&self) -> Vec<Station> {
        let mut names: Vec<Station> = self.stations.iter().cloned().collect();
        names.sort();
        names
    }

    /// Number of distinct stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of directed edges (twice the number of undirected connections).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
