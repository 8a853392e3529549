use crate::{
    get_precipitation, get_stations, get_tobs, index, routes, temperature_stats_range,
    temperature_stats_start, ClimateData, ClimateService, DateComparison, ErrorResponse,
    TemperatureObservation, TemperatureStats, PRECIPITATION_PATH, STATIONS_PATH,
    TEMPERATURE_RANGE_PATH, TEMPERATURE_START_PATH, TOBS_PATH,
};
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub climate: Arc<ClimateService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::home::index::index,
        routes::measurements::precipitation::get_precipitation,
        routes::stations::station_routes::get_stations,
        routes::measurements::tobs::get_tobs,
        routes::measurements::temperature::temperature_stats_start,
        routes::measurements::temperature::temperature_stats_range,
    ),
    components(
        schemas(TemperatureObservation, TemperatureStats, ErrorResponse)
    ),
    tags(
        (name = "climate api", description = "a read-only api over precipitation and temperature observations")
    )
)]
struct ApiDoc;

pub fn build_app_state(
    climate_db: Arc<dyn ClimateData>,
    date_comparison: DateComparison,
) -> AppState {
    AppState {
        climate: Arc::new(ClimateService::new(climate_db, date_comparison)),
    }
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index))
        .route(PRECIPITATION_PATH, get(get_precipitation))
        .route(STATIONS_PATH, get(get_stations))
        .route(TOBS_PATH, get(get_tobs))
        .route(TEMPERATURE_START_PATH, get(temperature_stats_start))
        .route(TEMPERATURE_RANGE_PATH, get(temperature_stats_range))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_string();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, {} code: {}, time: {}", path, response.status().as_str(), response_time);

    response
}
