use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{ApiError, AppState, ErrorResponse, TemperatureStats};

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
         ("start" = String, Path, description = "First date to include (YYYY-MM-DD)"),
    ),
    responses(
        (status = OK, description = "Temperature min/avg/max from the start date onward", content_type = "application/json", body = TemperatureStats),
        (status = BAD_REQUEST, description = "Start is not a calendar date (calendar comparison only)", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorResponse)
    ))]
pub async fn temperature_stats_start(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStats>, ApiError> {
    let stats = state.climate.temperature_stats(start, None).await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
         ("start" = String, Path, description = "First date to include (YYYY-MM-DD)"),
         ("end" = String, Path, description = "Last date to include (YYYY-MM-DD)"),
    ),
    responses(
        (status = OK, description = "Temperature min/avg/max between both dates, inclusive", content_type = "application/json", body = TemperatureStats),
        (status = BAD_REQUEST, description = "Start or end is not a calendar date (calendar comparison only)", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorResponse)
    ))]
pub async fn temperature_stats_range(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStats>, ApiError> {
    let stats = state.climate.temperature_stats(start, Some(end)).await?;
    Ok(Json(stats))
}
