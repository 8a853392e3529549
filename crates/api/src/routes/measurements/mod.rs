pub mod precipitation;
pub mod temperature;
pub mod tobs;

pub use precipitation::get_precipitation;
pub use temperature::{temperature_stats_range, temperature_stats_start};
pub use tobs::get_tobs;
