use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{ApiError, AppState, ErrorResponse};

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Station identifiers in storage order", content_type = "application/json", body = Vec<String>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorResponse)
    ))]
pub async fn get_stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let stations = state.climate.stations().await?;
    Ok(Json(stations))
}
