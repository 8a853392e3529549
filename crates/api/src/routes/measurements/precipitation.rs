use axum::{extract::State, Json};
use std::{collections::BTreeMap, sync::Arc};

use crate::{ApiError, AppState, ErrorResponse};

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Date to precipitation for the year ending at the most recent measurement", content_type = "application/json", body = BTreeMap<String, Option<f64>>),
        (status = INTERNAL_SERVER_ERROR, description = "Dataset is empty or unavailable", body = ErrorResponse)
    ))]
pub async fn get_precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    let precipitation = state.climate.precipitation().await?;
    Ok(Json(precipitation))
}
