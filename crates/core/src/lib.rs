//! Climate API Core Library
//!
//! Shared utilities for the climate API server:
//! - Configuration loading (XDG-compliant)
//! - Dataset path discovery

mod config;
pub mod fs;

pub use config::{find_config_file, get_xdg_data_dir, load_config, ConfigSource};
pub use fs::{default_dataset_path, is_file, path_exists};

/// Application name used for XDG paths
pub const APP_NAME: &str = "climate-api";

/// Default API port
pub const DEFAULT_API_PORT: u16 = 5000;

/// Dataset location used when nothing else is configured
pub const DEFAULT_DATASET_PATH: &str = "./Resources/hawaii.sqlite";

/// File name of the dataset when it is installed in the XDG data directory
pub const DATASET_FILE_NAME: &str = "hawaii.sqlite";
