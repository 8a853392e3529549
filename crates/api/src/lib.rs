pub mod climate;
pub mod dates;
pub mod db;
pub mod error;
pub mod routes;
mod startup;
mod utils;

pub use climate::{ClimateService, TemperatureStats};
pub use dates::DateComparison;
pub use db::{
    ClimateData, ClimateDatabase, DateRange, PrecipitationReading, StationActivity,
    TemperatureObservation, TemperatureSummary,
};
pub use error::{ApiError, ErrorResponse};
pub use routes::*;
pub use startup::*;
pub use utils::*;
