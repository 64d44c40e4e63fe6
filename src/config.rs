use crate::models::error::SError;
use crate::models::paths::{DataPathRules, HostPathRules};
use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const APP_NAME: &str = "theme_extras";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PluginSettings {
    pub version: u8,
    pub enable_game_menu_rating: bool,
    pub enable_selection_preservation: bool,
    pub enable_theme_backups: bool,
    /// Seconds to wait after application start before touching theme files,
    /// so the launcher finishes loading the theme first.
    pub startup_delay_secs: u64,
    pub log_level: String,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            version: 0,
            enable_game_menu_rating: true,
            enable_selection_preservation: false,
            enable_theme_backups: true,
            startup_delay_secs: 5,
            log_level: "info".into(),
        }
    }
}

impl PluginSettings {
    pub fn load_path(path: &Utf8Path) -> Result<PluginSettings, SError> {
        Ok(confy::load_path(path)?)
    }

    pub fn save_path(&self, path: &Utf8Path) -> Result<(), SError> {
        Ok(confy::store_path(path, self)?)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_secs(self.startup_delay_secs)
    }
}

/// Where the plugin keeps its own data and where the launcher keeps its configuration.
#[derive(Clone, Debug)]
pub struct PluginPaths {
    pub data: DataPathRules,
    pub host: HostPathRules,
    pub data_root: Utf8PathBuf,
}

impl PluginPaths {
    pub fn new(data_root: &Utf8Path, host_config_root: &Utf8Path) -> Self {
        Self {
            data: DataPathRules::new(data_root),
            host: HostPathRules::new(host_config_root),
            data_root: data_root.to_owned(),
        }
    }

    /// Uses the platform data directory for the plugin's own files.
    pub fn for_host(host_config_root: &Utf8Path) -> Result<Self, SError> {
        let base_dir = ProjectDirs::from("com", "martes", APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe_path| exe_path.parent().map(|p| p.to_path_buf()))
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let data_root = Utf8PathBuf::from_path_buf(base_dir)
            .map_err(|p| SError::ParseError(format!("Invalid UTF-8 path: {:?}", p)))?;
        Ok(Self::new(&data_root, host_config_root))
    }

    /// `<data>/ThemeBackups/<theme id>`
    pub fn theme_backup_dir(&self, theme_id: &str) -> Utf8PathBuf {
        self.data.theme_backups.join(theme_id)
    }
}
