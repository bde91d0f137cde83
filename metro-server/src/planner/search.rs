//! Route planner facade.
//!
//! Checks the caller's preconditions on a request before running one of the
//! searches in [`super::dijkstra`]. The searches themselves accept any input.

use tracing::info;

use crate::domain::Station;
use crate::network::NetworkGraph;

use super::config::SearchConfig;
use super::mode::SearchMode;
use super::route::RouteResult;

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Start or goal station name is blank
    #[error("station name must not be empty")]
    EmptyStation,

    /// Start and goal are the same station
    #[error("start and goal are both {0}")]
    SameStation(Station),

    /// Station does not appear in the network
    #[error("unknown station: {0}")]
    UnknownStation(Station),

    /// Change penalty is negative or not a number
    #[error("invalid change time: {0}")]
    InvalidChangeTime(f64),
}

/// Request for a route between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub start: Station,
    pub goal: Station,
    pub mode: SearchMode,
}

impl RouteRequest {
    /// Create a new route request.
    pub fn new(start: impl Into<Station>, goal: impl Into<Station>, mode: SearchMode) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            mode,
        }
    }

    /// Validate the request against the network.
    pub fn validate(&self, graph: &NetworkGraph) -> Result<(), SearchError> {
        if self.start.as_str().is_empty() || self.goal.as_str().is_empty() {
            return Err(SearchError::EmptyStation);
        }

        if self.start == self.goal {
            return Err(SearchError::SameStation(self.start.clone()));
        }

        for station in [&self.start, &self.goal] {
            if !graph.contains_station(station.as_str()) {
                return Err(SearchError::UnknownStation(station.clone()));
            }
        }

        Ok(())
    }
}

/// Route planner over a loaded network.
pub struct Planner<'a> {
    graph: &'a NetworkGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a NetworkGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Plan a route for the request.
    ///
    /// An unreachable goal is not an error: the result has an empty path.
    pub fn plan(&self, request: &RouteRequest) -> Result<RouteResult, SearchError> {
        if !self.config.is_valid() {
            return Err(SearchError::InvalidChangeTime(self.config.change_time()));
        }
        request.validate(self.graph)?;

        let result = request.mode.run(
            self.graph,
            self.config.change_time(),
            request.start.as_str(),
            request.goal.as_str(),
        );

        info!(
            start = %request.start,
            goal = %request.goal,
            mode = request.mode.as_str(),
            found = result.is_found(),
            minutes = result.total_minutes,
            changes = result.changes,
            "Planned route"
        );

        Ok(result)
    }
}
