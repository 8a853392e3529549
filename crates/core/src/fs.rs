//! Filesystem utilities

use std::path::Path;

use log::debug;

use crate::{get_xdg_data_dir, DATASET_FILE_NAME, DEFAULT_DATASET_PATH};

/// Check if a path exists
pub fn path_exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Check if a path is a regular file
pub fn is_file(path: &str) -> bool {
    Path::new(path).is_file()
}

/// Dataset path used when none is configured.
///
/// Prefers `./Resources/hawaii.sqlite`; if that is absent but a copy exists in
/// the XDG data directory, that copy is used instead.
pub fn default_dataset_path() -> String {
    if is_file(DEFAULT_DATASET_PATH) {
        return DEFAULT_DATASET_PATH.to_string();
    }

    let installed = get_xdg_data_dir().join(DATASET_FILE_NAME);
    if installed.is_file() {
        debug!("Using installed dataset: {}", installed.display());
        return installed.display().to_string();
    }

    DEFAULT_DATASET_PATH.to_string()
}
