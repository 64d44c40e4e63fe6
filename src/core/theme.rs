use crate::config::PluginPaths;
use crate::models::error::SError;
use crate::models::manifest::{ThemeExtrasManifest, ThemeManifest};
use crate::models::paths::ThemePathRules;
use crate::utils::yaml::Yaml;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, warn};

/// An installed desktop theme that ships a `themeExtras.yaml`.
#[derive(Clone, Debug)]
pub struct ExtendedTheme {
    pub manifest: ThemeManifest,
    pub extras: ThemeExtrasManifest,
    pub root: Utf8PathBuf,
    pub paths: ThemePathRules,
    pub backup_root: Utf8PathBuf,
}

impl ExtendedTheme {
    pub fn id(&self) -> &str {
        &self.manifest.id
    }

    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    pub fn persistent_paths(&self) -> &[String] {
        self.extras.persistent_paths.as_deref().unwrap_or_default()
    }

    /// Loads both manifests of the theme at `theme_root`.
    ///
    /// Returns `Ok(None)` when the directory is not an extras-enabled theme:
    /// either manifest is missing or malformed, or the theme id cannot name a
    /// backup directory.
    pub fn try_create(theme_root: &Utf8Path, plugin_paths: &PluginPaths) -> Result<Option<Self>, SError> {
        if !theme_root.is_dir() {
            return Ok(None);
        }

        let root = Utf8PathBuf::try_from(dunce::canonicalize(theme_root)?)?;
        let paths = ThemePathRules::new(&root);

        let Some(extras) = Yaml::try_read::<ThemeExtrasManifest>(&paths.extras_manifest) else {
            return Ok(None);
        };
        let Some(manifest) = Yaml::try_read::<ThemeManifest>(&paths.theme_manifest) else {
            return Ok(None);
        };

        if !is_valid_theme_id(&manifest.id) {
            warn!("Theme at {root} has an unusable id {:?}", manifest.id);
            return Ok(None);
        }

        let backup_root = plugin_paths.theme_backup_dir(&manifest.id);
        debug!("Found extras theme {} at {root}", manifest.id);

        Ok(Some(Self {
            manifest,
            extras,
            root,
            paths,
            backup_root,
        }))
    }

    /// Every extras-enabled theme under the launcher's desktop themes directory,
    /// ordered by directory name.
    pub fn discover(plugin_paths: &PluginPaths) -> Result<Vec<Self>, SError> {
        let themes_dir = &plugin_paths.host.desktop_themes;
        if !themes_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut dirs: Vec<Utf8PathBuf> = std::fs::read_dir(themes_dir)?
            .flatten()
            .filter(|e| e.path().is_dir())
            .filter_map(|e| Utf8PathBuf::from_path_buf(e.path()).ok())
            .collect();
        dirs.sort();

        let mut themes = Vec::new();
        for dir in dirs {
            match Self::try_create(&dir, plugin_paths) {
                Ok(Some(theme)) => themes.push(theme),
                Ok(None) => {}
                Err(e) => warn!("Skipping theme directory {dir}: {e}"),
            }
        }

        Ok(themes)
    }
}

fn is_valid_theme_id(id: &str) -> bool {
    !id.trim().is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', ':'])
}
