use async_trait::async_trait;
use climate_api_core::is_file;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use super::{
    validate_schema, ClimateData, DateRange, Error, PrecipitationReading, StationActivity,
    TemperatureObservation, TemperatureSummary,
};

/// Read-only handle over the climate dataset file.
#[derive(Clone)]
pub struct ClimateDatabase {
    pool: SqlitePool,
}

impl ClimateDatabase {
    pub async fn new(path: &str, max_connections: u32) -> Result<Self, Error> {
        if !is_file(path) {
            return Err(Error::MissingDataset(path.to_string()));
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .read_only(true)
            .pragma("busy_timeout", "5000");

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let db = Self::from_pool(pool).await?;
        info!("Climate dataset opened read-only at: {}", path);
        Ok(db)
    }

    /// Wraps an existing pool, checking connectivity and the declared schema first
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, Error> {
        let db = Self { pool };
        db.health_check().await?;
        validate_schema(&db.pool).await?;
        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Climate dataset connections closed");
    }
}

#[async_trait]
impl ClimateData for ClimateDatabase {
    async fn most_recent_date(&self) -> Result<Option<String>, Error> {
        let most_recent: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        Ok(most_recent)
    }

    async fn precipitation_since(&self, since: &str) -> Result<Vec<PrecipitationReading>, Error> {
        let readings = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, prcp FROM measurement WHERE date >= ?",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        Ok(readings)
    }

    async fn stations(&self) -> Result<Vec<String>, Error> {
        let stations: Vec<String> = sqlx::query_scalar("SELECT station FROM station")
            .fetch_all(&self.pool)
            .await?;
        Ok(stations)
    }

    async fn most_active_station(&self) -> Result<Option<StationActivity>, Error> {
        let station = sqlx::query_as::<_, StationActivity>(
            "SELECT station, COUNT(station) AS observations
             FROM measurement
             GROUP BY station
             ORDER BY COUNT(station) DESC
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(station)
    }

    async fn temperature_observations(
        &self,
        station: &str,
        since: &str,
    ) -> Result<Vec<TemperatureObservation>, Error> {
        let observations = sqlx::query_as::<_, TemperatureObservation>(
            "SELECT date, tobs FROM measurement WHERE station = ? AND date >= ?",
        )
        .bind(station)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        Ok(observations)
    }

    async fn temperature_summary(&self, range: &DateRange) -> Result<TemperatureSummary, Error> {
        let mut query = String::from(
            "SELECT MIN(tobs) AS min_temperature,
                    AVG(tobs) AS avg_temperature,
                    MAX(tobs) AS max_temperature
             FROM measurement",
        );

        let mut conditions = vec!["date >= ?"];
        let mut bindings = vec![range.start.as_str()];

        if let Some(ref end) = range.end {
            conditions.push("date <= ?");
            bindings.push(end.as_str());
        }

        query.push_str(" WHERE ");
        query.push_str(&conditions.join(" AND "));

        let mut q = sqlx::query_as::<_, TemperatureSummary>(&query);
        for binding in bindings {
            q = q.bind(binding);
        }

        Ok(q.fetch_one(&self.pool).await?)
    }
}
