//! Optimisation mode selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::network::NetworkGraph;

use super::dijkstra::{least_amount_of_changes, shortest_time};
use super::route::RouteResult;

/// Which quantity the search minimises.
///
/// Serialises as the machine name; deserialises through [`FromStr`], so every
/// alias it accepts works in forms and query strings too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "kebab-case"), try_from = "String")]
pub enum SearchMode {
    /// Least total minutes, change penalties included.
    #[default]
    FastestTime,
    /// Fewest line changes, then least total minutes.
    FewestChanges,
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search mode: {0}")]
pub struct InvalidSearchMode(String);

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::FastestTime, SearchMode::FewestChanges];

    /// Run the search for this mode.
    pub fn run(
        self,
        graph: &NetworkGraph,
        change_time: f64,
        start: &str,
        goal: &str,
    ) -> RouteResult {
        match self {
            SearchMode::FastestTime => shortest_time(graph, change_time, start, goal),
            SearchMode::FewestChanges => least_amount_of_changes(graph, change_time, start, goal),
        }
    }

    /// Human-readable name, as offered in the journey form.
    pub fn label(self) -> &'static str {
        match self {
            SearchMode::FastestTime => "Fastest Time",
            SearchMode::FewestChanges => "Least Amount Of Changes",
        }
    }

    /// Machine name, as used in forms and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::FastestTime => "fastest-time",
            SearchMode::FewestChanges => "fewest-changes",
        }
    }

    /// Itinerary header for results produced by this mode.
    pub fn header(self) -> &'static str {
        match self {
            SearchMode::FastestTime => "*** Minimal Time Route ***",
            SearchMode::FewestChanges => "*** Route with Fewest Changes ***",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchMode {
    type Err = InvalidSearchMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fastest" | "fastest-time" | "fastest time" | "time" => Ok(SearchMode::FastestTime),
            "changes" | "fewest-changes" | "least amount of changes" => {
                Ok(SearchMode::FewestChanges)
            }
            _ => Err(InvalidSearchMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for SearchMode {
    type Error = InvalidSearchMode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
