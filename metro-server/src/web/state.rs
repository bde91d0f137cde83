//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkGraph;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The graph is never mutated after startup, so every request reads the
/// same instance.
#[derive(Clone)]
pub struct AppState {
    /// Loaded network
    pub graph: Arc<NetworkGraph>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: NetworkGraph, config: SearchConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
        }
    }
}
