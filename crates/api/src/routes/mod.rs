pub mod home;
pub mod measurements;
pub mod stations;

pub use home::*;
pub use measurements::*;
pub use stations::*;

pub const PRECIPITATION_PATH: &str = "/api/v1.0/precipitation";
pub const STATIONS_PATH: &str = "/api/v1.0/stations";
pub const TOBS_PATH: &str = "/api/v1.0/tobs";
pub const TEMPERATURE_START_PATH: &str = "/api/v1.0/{start}";
pub const TEMPERATURE_RANGE_PATH: &str = "/api/v1.0/{start}/{end}";

/// Description and path template of every data route, as listed at `/`
pub const AVAILABLE_ROUTES: [(&str, &str); 5] = [
    ("Precipitation", PRECIPITATION_PATH),
    ("Stations", STATIONS_PATH),
    ("Temperature Observations (TOBS)", TOBS_PATH),
    ("Temperature Statistics (Start Date)", TEMPERATURE_START_PATH),
    (
        "Temperature Statistics (Start & End Date)",
        TEMPERATURE_RANGE_PATH,
    ),
];
