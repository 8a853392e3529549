pub mod station_routes;

pub use station_routes::get_stations;
