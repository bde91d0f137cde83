//! Domain types for the metro journey planner.
//!
//! Stations and lines are referenced by name throughout the planner. These
//! newtypes keep the two kinds of name from being mixed up.

mod station;

pub use station::{Line, Station};
