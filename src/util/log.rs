use std::{path::PathBuf, sync::Mutex};

use color_eyre::eyre::eyre;
use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "CAMPUSNAV_LOG";
const LOG_FILE: &str = "campusnav.log";

pub fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "campusnav")
}

pub fn data_directory() -> PathBuf {
    project_directory()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".campusnav"))
}

pub fn cache_directory() -> PathBuf {
    project_directory()
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".campusnav").join("cache"))
}

/// Logs go to a file; the terminal belongs to the UI.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = data_directory();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(Mutex::new(log_file))
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| eyre!("failed to install logger: {e}"))
}
