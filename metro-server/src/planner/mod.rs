//! Route planner using Dijkstra search over (station, line) states.
//!
//! This module answers: "how do I get from this station to that one, either
//! as quickly as possible or with as few changes as possible?"
//!
//! Changing line costs a fixed penalty in minutes. Because the cost of a
//! move depends on which line the traveller is on, the searches track
//! `(station, line)` pairs rather than bare stations.

mod config;
mod dijkstra;
mod mode;
mod route;
mod search;


pub use config::{DEFAULT_CHANGE_MINS, SearchConfig};
pub use dijkstra::{least_amount_of_changes, shortest_time};
pub use mode::{InvalidSearchMode, SearchMode};
pub use route::{NO_ROUTE, RouteResult, StationNode, count_changes, parse_itinerary};
pub use search::{Planner, RouteRequest, SearchError};
