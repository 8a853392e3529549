use crate::helpers::{spawn_app, MockClimateAccess};
use axum::http::StatusCode;
use climate_api::{db, PrecipitationReading, StationActivity, TemperatureObservation};
use serde_json::json;
use std::sync::Arc;

fn reading(date: &str, prcp: Option<f64>) -> PrecipitationReading {
    PrecipitationReading {
        date: date.to_string(),
        prcp,
    }
}

fn observation(date: &str, tobs: f64) -> TemperatureObservation {
    TemperatureObservation {
        date: date.to_string(),
        tobs,
    }
}

#[tokio::test]
async fn index_lists_five_route_templates() {
    let test_app = spawn_app(Arc::new(MockClimateAccess::new())).await;

    let (status, body) = test_app.get_json("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "Precipitation": "/api/v1.0/precipitation",
            "Stations": "/api/v1.0/stations",
            "Temperature Observations (TOBS)": "/api/v1.0/tobs",
            "Temperature Statistics (Start Date)": "/api/v1.0/{start}",
            "Temperature Statistics (Start & End Date)": "/api/v1.0/{start}/{end}"
        })
    );
    assert_eq!(body.as_object().unwrap().len(), 5);
}

#[tokio::test]
async fn precipitation_uses_one_year_lookback() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_most_recent_date()
        .times(1)
        .returning(|| Ok(Some("2017-08-23".to_string())));
    climate_data
        .expect_precipitation_since()
        .withf(|since| since == "2016-08-23")
        .times(1)
        .returning(|_| {
            Ok(vec![
                reading("2016-08-23", Some(0.7)),
                reading("2017-08-23", Some(0.0)),
                reading("2017-01-01", None),
                reading("2017-08-23", Some(0.45)),
            ])
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get_json("/api/v1.0/precipitation").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "2016-08-23": 0.7,
            "2017-01-01": null,
            "2017-08-23": 0.45
        })
    );
}

#[tokio::test]
async fn precipitation_on_empty_dataset_is_a_server_error() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_most_recent_date()
        .times(1)
        .returning(|| Ok(None));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get_json("/api/v1.0/precipitation").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "EMPTY_DATASET");
}

#[tokio::test]
async fn stations_keep_storage_order_without_duplicates() {
    let mut climate_data = MockClimateAccess::new();
    climate_data.expect_stations().times(1).returning(|| {
        Ok(vec![
            "USC00519397".to_string(),
            "USC00513117".to_string(),
            "USC00519397".to_string(),
            "USC00514830".to_string(),
        ])
    });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get_json("/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["USC00519397", "USC00513117", "USC00514830"]));
}

#[tokio::test]
async fn tobs_come_from_most_active_station() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_most_active_station()
        .times(1)
        .returning(|| {
            Ok(Some(StationActivity {
                station: "USC00519281".to_string(),
                observations: 2772,
            }))
        });
    climate_data
        .expect_most_recent_date()
        .times(1)
        .returning(|| Ok(Some("2017-08-23".to_string())));
    climate_data
        .expect_temperature_observations()
        .withf(|station, since| station == "USC00519281" && since == "2016-08-23")
        .times(1)
        .returning(|_, _| {
            Ok(vec![
                observation("2016-08-23", 77.0),
                observation("2016-08-23", 77.0),
                observation("2017-08-18", 79.0),
            ])
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get_json("/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"date": "2016-08-23", "tobs": 77.0},
            {"date": "2016-08-23", "tobs": 77.0},
            {"date": "2017-08-18", "tobs": 79.0}
        ])
    );
}

#[tokio::test]
async fn tobs_on_empty_dataset_is_a_server_error() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_most_active_station()
        .times(1)
        .returning(|| Ok(None));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get_json("/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "EMPTY_DATASET");
}

#[tokio::test]
async fn dataset_failure_surfaces_as_server_error() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_stations()
        .times(1)
        .returning(|| Err(db::Error::Query(sqlx::Error::PoolClosed)));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (status, body) = test_app.get_json("/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "DATASET_UNAVAILABLE");
}

#[tokio::test]
async fn repeated_requests_return_identical_bytes() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_most_recent_date()
        .times(2)
        .returning(|| Ok(Some("2017-08-23".to_string())));
    climate_data
        .expect_precipitation_since()
        .times(2)
        .returning(|_| {
            Ok(vec![
                reading("2017-08-23", Some(0.45)),
                reading("2016-12-01", Some(0.1)),
                reading("2017-03-15", None),
            ])
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let (first_status, first) = test_app.get("/api/v1.0/precipitation").await;
    let (second_status, second) = test_app.get("/api/v1.0/precipitation").await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first, second);
}
