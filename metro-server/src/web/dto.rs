//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::planner::{RouteResult, SearchMode, StationNode};

/// Request to plan a route, from the journey form or a query string.
#[derive(Debug, Deserialize)]
pub struct RouteForm {
    /// Start station name
    pub start: String,

    /// Goal station name
    pub goal: String,

    /// Optimisation mode (defaults to fastest time)
    #[serde(default)]
    pub mode: SearchMode,
}

/// List of all stations in the network.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<Station>,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Mode that produced the route
    pub mode: SearchMode,

    /// Whether a route exists
    pub found: bool,

    /// Station/line states from start to goal
    pub path: Vec<StationNode>,

    /// Total minutes including change penalties
    pub total_minutes: f64,

    /// Number of line changes
    pub changes: usize,

    /// Rendered text itinerary
    pub itinerary: String,
}

impl RouteResponse {
    /// Create from a search result.
    pub fn from_result(mode: SearchMode, result: RouteResult) -> Self {
        let itinerary = result.render(mode);
        Self {
            mode,
            found: result.is_found(),
            path: result.path,
            total_minutes: result.total_minutes,
            changes: result.changes,
            itinerary,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_mode_defaults_to_fastest() {
        let form: RouteForm = serde_json::from_str(r#"{"start":"A","goal":"B"}"#).unwrap();
        assert_eq!(form.mode, SearchMode::FastestTime);
    }

    #[test]
    fn form_mode_parsed() {
        let form: RouteForm =
            serde_json::from_str(r#"{"start":"A","goal":"B","mode":"fewest-changes"}"#).unwrap();
        assert_eq!(form.mode, SearchMode::FewestChanges);
    }

    #[test]
    fn response_from_no_route() {
        let response = RouteResponse::from_result(SearchMode::FastestTime, RouteResult::no_route());
        assert!(!response.found);
        assert!(response.path.is_empty());
        assert_eq!(response.itinerary, "No route found.");
    }

    #[test]
    fn response_serializes() {
        let result = RouteResult::new(
            vec![StationNode::new("A", "Red"), StationNode::new("B", "Red")],
            5.0,
        );
        let response = RouteResponse::from_result(SearchMode::FewestChanges, result);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["mode"], "fewest-changes");
        assert_eq!(json["found"], true);
        assert_eq!(json["total_minutes"], 5.0);
        assert_eq!(json["path"][1]["station"], "B");
    }
}
