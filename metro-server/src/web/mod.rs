//! Web layer for the metro journey planner.
//!
//! Serves the journey form, planned itineraries and a small JSON API.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, SAME_STATION_MESSAGE, create_router};
pub use state::AppState;
pub use templates::*;
