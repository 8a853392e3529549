//! Calendar handling for the `YYYY-MM-DD` dates stored in the dataset.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, Duration};

use crate::{db, ApiError};

/// Length of the "last year" window ending at the most recent measurement
pub const LOOKBACK_DAYS: i64 = 365;

pub fn parse_iso_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}

pub fn format_iso_date(date: Date) -> Result<String, time::error::Format> {
    date.format(format_description!("[year]-[month]-[day]"))
}

/// First date inside the lookback window ending at `most_recent`
pub fn one_year_before(most_recent: &str) -> Result<String, db::Error> {
    let most_recent = parse_iso_date(most_recent)?;
    let cutoff = most_recent.saturating_sub(Duration::days(LOOKBACK_DAYS));
    Ok(format_iso_date(cutoff)?)
}

/// How `start`/`end` path values are compared against stored dates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateComparison {
    /// Bind the raw value and compare as text
    #[default]
    Text,
    /// Require a valid calendar date and bind its canonical form
    Calendar,
}

impl DateComparison {
    pub fn bind_value(&self, raw: &str) -> Result<String, ApiError> {
        match self {
            DateComparison::Text => Ok(raw.to_string()),
            DateComparison::Calendar => {
                let date = parse_iso_date(raw).map_err(|source| ApiError::InvalidDate {
                    value: raw.to_string(),
                    source,
                })?;
                format_iso_date(date).map_err(|e| ApiError::Dataset(e.into()))
            }
        }
    }
}

impl std::fmt::Display for DateComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateComparison::Text => write!(f, "text"),
            DateComparison::Calendar => write!(f, "calendar"),
        }
    }
}
