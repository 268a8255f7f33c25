//! Settings persistence in the platform config directory.

use directories::ProjectDirs;
use std::path::PathBuf;

mod service;

pub use service::SettingsService;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Location of `config.toml` for the current platform.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "BarbershopCalendar", "BarbershopCalendar")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
