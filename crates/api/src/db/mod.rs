use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod schema;
mod sqlite;
#[cfg(test)]
pub(crate) mod test_support;

pub use schema::{validate_schema, TableSchema, DATASET_SCHEMA, MEASUREMENT, STATION};
pub use sqlite::ClimateDatabase;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Dataset contains no measurements")]
    EmptyDataset,
    #[error("Failed to query dataset: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Failed to parse stored date: {0}")]
    StoredDate(#[from] time::error::Parse),
    #[error("Failed to format date: {0}")]
    DateFormat(#[from] time::error::Format),
    #[error("Dataset schema mismatch: {0}")]
    Schema(String),
    #[error("Dataset file not found: {0}")]
    MissingDataset(String),
}

/// Read-only access to the measurement and station tables.
///
/// Dates are passed and returned as the `YYYY-MM-DD` strings stored in the
/// dataset; every filter compares them as text.
#[async_trait]
pub trait ClimateData: Send + Sync {
    /// Latest measurement date, `None` when there are no measurements
    async fn most_recent_date(&self) -> Result<Option<String>, Error>;
    /// Precipitation readings dated on or after `since`, in storage order
    async fn precipitation_since(&self, since: &str) -> Result<Vec<PrecipitationReading>, Error>;
    /// Station identifiers in storage order
    async fn stations(&self) -> Result<Vec<String>, Error>;
    /// Station with the most measurements. Ties go to whichever row the
    /// storage engine returns first.
    async fn most_active_station(&self) -> Result<Option<StationActivity>, Error>;
    async fn temperature_observations(
        &self,
        station: &str,
        since: &str,
    ) -> Result<Vec<TemperatureObservation>, Error>;
    /// Min/avg/max of `tobs` over the range, all `None` for an empty match
    async fn temperature_summary(&self, range: &DateRange) -> Result<TemperatureSummary, Error>;
}

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct TemperatureObservation {
    /// Observation date (YYYY-MM-DD)
    pub date: String,
    /// Temperature observation
    pub tobs: f64,
}

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct StationActivity {
    pub station: String,
    pub observations: i64,
}

#[derive(Clone, Debug, Default, PartialEq, sqlx::FromRow)]
pub struct TemperatureSummary {
    pub min_temperature: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
}

/// Inclusive date bounds; `end` is open when `None`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: Option<String>,
}

impl DateRange {
    pub fn from_start(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
        }
    }

    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
        }
    }
}
