//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, ForecastResponse, SeriesPoint, SeriesQuery, TracePoint};

/// Returns swarm settings, forecast rows, and error metrics.
///
/// `GET /forecast` → 200 + `ForecastResponse` JSON
pub async fn get_forecast(State(state): State<Arc<AppState>>) -> Json<ForecastResponse> {
    let report = &state.output.report;
    Json(ForecastResponse {
        swarm: state.config.swarm.clone(),
        best_fitness: report.best_fitness,
        compared: report.compared,
        mae: report.mae,
        rmse: report.rmse,
        max_abs_error: report.max_abs_error,
        rows: report.rows.clone(),
    })
}

/// Returns the observed series with the forecast overlay, optionally
/// filtered by index range.
///
/// `GET /series` → 200 + `Vec<SeriesPoint>` JSON
/// `GET /series?from=N&to=M` → filtered range (inclusive)
/// `GET /series?from=10&to=5` → 400 + `ErrorResponse`
pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeriesQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(0);
    let to = query.to.unwrap_or(usize::MAX);

    if from > to {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("`from` ({from}) must be <= `to` ({to})"),
            }),
        ));
    }

    let points: Vec<SeriesPoint> = SeriesPoint::collect(&state.output)
        .into_iter()
        .filter(|p| p.index >= from && p.index <= to)
        .collect();

    Ok(Json(points))
}

/// Returns the convergence history.
///
/// `GET /trace` → 200 + `Vec<TracePoint>` JSON
pub async fn get_trace(State(state): State<Arc<AppState>>) -> Json<Vec<TracePoint>> {
    let trace = state
        .output
        .result
        .history
        .iter()
        .enumerate()
        .map(|(iteration, &global_best_fitness)| TracePoint {
            iteration,
            global_best_fitness,
        })
        .collect();
    Json(trace)
}
