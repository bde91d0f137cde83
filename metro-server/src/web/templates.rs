//! Askama templates for the web frontend.

use askama::Template;

use crate::network::NetworkGraph;
use crate::planner::{RouteResult, SearchMode};

/// Home page with the journey form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<String>,
    pub modes: Vec<ModeView>,
}

impl IndexTemplate {
    /// Build the form for a network, stations in alphabetical order.
    pub fn for_network(graph: &NetworkGraph) -> Self {
        Self {
            stations: graph.stations().iter().map(|s| s.to_string()).collect(),
            modes: SearchMode::ALL.into_iter().map(ModeView::from).collect(),
        }
    }
}

/// Planned route page.
#[derive(Template)]
#[template(path = "route.html")]
pub struct RouteTemplate {
    pub start: String,
    pub goal: String,
    pub found: bool,
    pub itinerary: String,
}

impl RouteTemplate {
    pub fn new(start: &str, goal: &str, mode: SearchMode, result: &RouteResult) -> Self {
        Self {
            start: start.to_string(),
            goal: goal.to_string(),
            found: result.is_found(),
            itinerary: result.render(mode),
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

/// Mode option for the journey form.
#[derive(Debug, Clone)]
pub struct ModeView {
    pub value: &'static str,
    pub label: &'static str,
}

impl From<SearchMode> for ModeView {
    fn from(mode: SearchMode) -> Self {
        Self {
            value: mode.as_str(),
            label: mode.label(),
        }
    }
}
