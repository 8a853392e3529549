use axum::Json;
use std::collections::BTreeMap;

use crate::routes::AVAILABLE_ROUTES;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = OK, description = "Description to path template for every data route", content_type = "application/json", body = BTreeMap<String, String>)
    ))]
pub async fn index() -> Json<BTreeMap<&'static str, &'static str>> {
    Json(AVAILABLE_ROUTES.into_iter().collect())
}
