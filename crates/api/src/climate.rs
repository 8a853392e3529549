use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};
use utoipa::ToSchema;

use crate::{
    dates::one_year_before,
    db::{self, ClimateData, DateRange, TemperatureObservation},
    ApiError, DateComparison,
};

/// Temperature aggregate over a date range; stats are `null` when nothing matched
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemperatureStats {
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub min_temperature: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
}

pub struct ClimateService {
    climate_db: Arc<dyn ClimateData>,
    date_comparison: DateComparison,
}

impl ClimateService {
    pub fn new(climate_db: Arc<dyn ClimateData>, date_comparison: DateComparison) -> Self {
        Self {
            climate_db,
            date_comparison,
        }
    }

    pub fn date_comparison(&self) -> DateComparison {
        self.date_comparison
    }

    /// First date of the year ending at the newest measurement
    async fn lookback_start(&self) -> Result<String, ApiError> {
        let most_recent = self
            .climate_db
            .most_recent_date()
            .await?
            .ok_or(db::Error::EmptyDataset)?;
        let cutoff = one_year_before(&most_recent)?;
        debug!("most recent measurement {}, lookback from {}", most_recent, cutoff);
        Ok(cutoff)
    }

    /// Date to precipitation for the last year; a later row wins on a repeated date
    pub async fn precipitation(&self) -> Result<BTreeMap<String, Option<f64>>, ApiError> {
        let cutoff = self.lookback_start().await?;
        let readings = self.climate_db.precipitation_since(&cutoff).await?;
        debug!("precipitation readings since {}: {}", cutoff, readings.len());

        Ok(readings
            .into_iter()
            .map(|reading| (reading.date, reading.prcp))
            .collect())
    }

    pub async fn stations(&self) -> Result<Vec<String>, ApiError> {
        let stations = self.climate_db.stations().await?;
        Ok(stations.into_iter().unique().collect())
    }

    /// Last year of temperature observations from the station with the most measurements
    pub async fn most_active_station_observations(
        &self,
    ) -> Result<Vec<TemperatureObservation>, ApiError> {
        let active = self
            .climate_db
            .most_active_station()
            .await?
            .ok_or(db::Error::EmptyDataset)?;
        debug!(
            "most active station {} with {} measurements",
            active.station, active.observations
        );

        let cutoff = self.lookback_start().await?;
        Ok(self
            .climate_db
            .temperature_observations(&active.station, &cutoff)
            .await?)
    }

    pub async fn temperature_stats(
        &self,
        start: String,
        end: Option<String>,
    ) -> Result<TemperatureStats, ApiError> {
        let range = DateRange {
            start: self.date_comparison.bind_value(&start)?,
            end: end
                .as_deref()
                .map(|end| self.date_comparison.bind_value(end))
                .transpose()?,
        };

        let summary = self.climate_db.temperature_summary(&range).await?;
        Ok(TemperatureStats {
            start_date: start,
            end_date: end,
            min_temperature: summary.min_temperature,
            avg_temperature: summary.avg_temperature,
            max_temperature: summary.max_temperature,
        })
    }
}
