//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::planner::{Planner, RouteRequest, RouteResult, SearchError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Shown when the journey form is submitted with the same start and goal.
pub const SAME_STATION_MESSAGE: &str =
    "Start and end station can't be the same. You are already here.";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/route", get(route_query))
        .route("/route", axum::routing::post(route_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the journey form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(
        IndexTemplate::for_network(&state.graph)
            .render()
            .unwrap_or_else(|e| format!("Template error: {e}")),
    )
}

/// All station names, sorted.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    Json(StationsResponse {
        stations: state.graph.stations(),
    })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan a route from query parameters, always answering in JSON.
async fn route_query(
    State(state): State<AppState>,
    query: Result<Query<RouteForm>, QueryRejection>,
) -> Result<Json<RouteResponse>, AppError> {
    let Query(req) = query?;
    let result = plan(&state, &req)?;
    Ok(Json(RouteResponse::from_result(req.mode, result)))
}

/// Plan a route from the journey form.
///
/// Answers with an HTML page for browsers and JSON otherwise.
async fn route_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<RouteForm>, FormRejection>,
) -> Response {
    let html = accepts_html(&headers);

    let planned = form.map_err(AppError::from).and_then(|Form(req)| {
        let result = plan(&state, &req)?;
        Ok((req, result))
    });
    let (req, result) = match planned {
        Ok(planned) => planned,
        Err(e) if html => return e.into_html_response(),
        Err(e) => return e.into_response(),
    };

    if html {
        let template = RouteTemplate::new(&req.start, &req.goal, req.mode, &result);
        match template.render() {
            Ok(body) => Html(body).into_response(),
            Err(e) => AppError::Internal {
                message: format!("Template error: {e}"),
            }
            .into_response(),
        }
    } else {
        Json(RouteResponse::from_result(req.mode, result)).into_response()
    }
}

fn plan(state: &AppState, req: &RouteForm) -> Result<RouteResult, AppError> {
    let request = RouteRequest::new(req.start.trim(), req.goal.trim(), req.mode);
    let planner = Planner::new(&state.graph, &state.config);
    Ok(planner.plan(&request)?)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        }
    }

    /// Render the error as a page for browsers.
    fn into_html_response(self) -> Response {
        let (status, message) = self.status_and_message();
        warn!(%status, error = message, "Request failed");

        let template = ErrorTemplate {
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: message.to_string(),
        };
        let body = template
            .render()
            .unwrap_or_else(|e| format!("Template error: {e}"));
        (status, Html(body)).into_response()
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::SameStation(_) => AppError::BadRequest {
                message: SAME_STATION_MESSAGE.to_string(),
            },
            SearchError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            SearchError::EmptyStation => AppError::BadRequest {
                message: e.to_string(),
            },
            SearchError::InvalidChangeTime(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(e: FormRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        warn!(%status, error = message, "Request failed");

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}
