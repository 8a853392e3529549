use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{ApiError, AppState, ErrorResponse, TemperatureObservation};

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Last year of temperature observations from the most active station", content_type = "application/json", body = Vec<TemperatureObservation>),
        (status = INTERNAL_SERVER_ERROR, description = "Dataset is empty or unavailable", body = ErrorResponse)
    ))]
pub async fn get_tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureObservation>>, ApiError> {
    let observations = state.climate.most_active_station_observations().await?;
    Ok(Json(observations))
}
