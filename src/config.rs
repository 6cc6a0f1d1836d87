use ctv::Result;

use std::{
    env,
    path::{Path, PathBuf},
};

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Overrides the default output location when no directory is passed on the command line
pub const OUTPUT_DIR_ENV: &str = "GREEN_ZONE_DIR";

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

/// Command line, then `GREEN_ZONE_DIR`, then the input file's own directory
pub fn resolve_output_dir(arg: Option<PathBuf>, input: &Path) -> PathBuf {
    if let Some(dir) = arg {
        return dir;
    }

    if let Some(dir) = env::var_os(OUTPUT_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }

    return input
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
}
