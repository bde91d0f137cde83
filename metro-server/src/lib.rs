//! Metro journey planner server.
//!
//! Loads a tram network from a CSV of station-to-station connections and
//! answers: "what is the quickest way from here to there, and which way
//! needs the fewest changes of line?"

pub mod config;
pub mod domain;
pub mod logging;
pub mod network;
pub mod planner;
pub mod web;
