//! Configuration module for mxisd-directory
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Global settings instance
static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Install the process-wide settings
pub fn init(settings: Settings) -> Result<&'static Settings> {
    SETTINGS
        .set(settings)
        .map_err(|_| anyhow::anyhow!("Settings already initialized"))?;
    SETTINGS
        .get()
        .ok_or_else(|| anyhow::anyhow!("Settings not initialized"))
}

/// Find the settings file to use
///
/// `MXISD_SETTINGS_PATH` wins over the default locations.
pub fn locate() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("MXISD_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    default_paths().into_iter().find(|path| path.exists())
}

/// Load settings from `path`, or defaults when there is none
///
/// Environment overrides are applied in every case.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    settings.merge_env();
    Ok(settings)
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("mxisd.yaml"),
        PathBuf::from("config/mxisd.yaml"),
        PathBuf::from("/etc/mxisd/mxisd.yaml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("mxisd/mxisd.yaml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sample_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("mxisd.sample.yaml");
        let settings = load(Some(path.as_path())).unwrap();

        assert_eq!(settings.directory.providers.len(), 2);
        assert_eq!(settings.dns.overwrite.homeserver.client[0].name, "matrix.example.org");
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load(Some(Path::new("/nonexistent/mxisd.yaml"))).is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let settings = load(None).unwrap();
        assert!(settings.directory.providers.is_empty());
    }
}
