use crate::config::{PluginPaths, PluginSettings};
use crate::core::elements::{CustomElement, ElementRequest};
use crate::core::game_sync::{GameProperties, GameProperty};
use crate::core::rating::{set_user_rating_menu, RatingMenuItem};
use crate::core::recommendations::missing_recommendations;
use crate::core::selection::SelectionTracker;
use crate::core::theme::ExtendedTheme;
use crate::core::theme_backup::{self, BackupReport, RestoreReport};
use crate::models::error::SError;
use crate::models::game::{ApplicationMode, DesktopView, Game};
use crate::models::manifest::AddonRecommendation;
use crate::models::notification::Notifier;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// What the startup theme pass did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaintenanceSummary {
    pub theme_id: Option<String>,
    pub restore: Option<RestoreReport>,
    pub backup: Option<BackupReport>,
    pub missing_recommendations: Vec<AddonRecommendation>,
}

/// All plugin state, created when the host loads the plugin and dropped when
/// it unloads it.
pub struct PluginContext {
    pub paths: PluginPaths,
    pub settings: Arc<Mutex<PluginSettings>>,
    pub game: Arc<Mutex<GameProperties>>,
    selection: Arc<Mutex<SelectionTracker>>,
    running_games: Arc<Mutex<HashSet<Uuid>>>,
}

impl PluginContext {
    pub fn initialize(paths: PluginPaths, settings: PluginSettings) -> Self {
        info!("Theme extras loaded, data at {}", paths.data_root);
        Self {
            paths,
            settings: Arc::new(Mutex::new(settings)),
            game: Arc::new(Mutex::new(GameProperties::default())),
            selection: Arc::new(Mutex::new(SelectionTracker::default())),
            running_games: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Like [`PluginContext::initialize`], reading settings from the data directory.
    pub fn load(paths: PluginPaths) -> Result<Self, SError> {
        let settings = PluginSettings::load_path(&paths.data.settings)?;
        Ok(Self::initialize(paths, settings))
    }

    pub fn save_settings(&self) -> Result<(), SError> {
        self.settings.lock().save_path(&self.paths.data.settings)
    }

    pub fn shutdown(self) {
        self.running_games.lock().clear();
        info!("Theme extras unloaded");
    }

    /// Runs the theme pass for the active desktop theme once the host had
    /// time to load it. Fullscreen mode does not use desktop themes.
    #[instrument(skip(self, installed_addons, notifier))]
    pub async fn on_application_started(
        &self,
        mode: ApplicationMode,
        desktop_view: DesktopView,
        active_theme_id: String,
        installed_addons: HashSet<String>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Option<MaintenanceSummary>, SError> {
        if mode != ApplicationMode::Desktop {
            return Ok(None);
        }
        self.selection.lock().set_view(desktop_view);

        let settings = self.settings.lock().clone();
        tokio::time::sleep(settings.startup_delay()).await;

        let paths = self.paths.clone();
        let summary = tokio::task::spawn_blocking(move || {
            run_theme_maintenance(
                &paths,
                &settings,
                &active_theme_id,
                &installed_addons,
                notifier.as_ref(),
            )
        })
        .await??;

        Ok(Some(summary))
    }

    /// The desktop view the selection tracker last saw.
    pub fn desktop_view(&self) -> Option<DesktopView> {
        self.selection.lock().view()
    }

    pub fn extras_themes(&self) -> Result<Vec<ExtendedTheme>, SError> {
        ExtendedTheme::discover(&self.paths)
    }

    pub fn clear_backup(&self, theme_id: &str) -> Result<bool, SError> {
        let theme = self
            .extras_themes()?
            .into_iter()
            .find(|t| t.id() == theme_id)
            .ok_or_else(|| SError::ThemeNotFound(theme_id.to_string()))?;
        theme_backup::clear_backup(&theme)
    }

    pub fn element(&self, name: &str) -> Option<CustomElement> {
        ElementRequest::parse(name).map(|r| r.build())
    }

    pub fn game_menu_items(&self) -> Vec<RatingMenuItem> {
        set_user_rating_menu(&self.settings.lock())
    }

    /// Mirrors the first selected game and returns ids to re-select, if the
    /// selection should be preserved.
    pub fn on_game_selected(&self, selected: &[Game], view: DesktopView) -> Option<Vec<Uuid>> {
        if let Some(current) = selected.first() {
            self.game.lock().load_from(current);
        }

        let ids: Vec<Uuid> = selected.iter().map(|g| g.id).collect();
        let preserve = self.settings.lock().enable_selection_preservation;
        self.selection.lock().on_selected(&ids, view, preserve)
    }

    /// Pushes a property edited through the mirror to the selected games.
    /// Returns the ids the host must save.
    pub fn on_settings_property_changed(&self, property_name: &str, selected: &mut [Game]) -> Vec<Uuid> {
        let Some(property) = GameProperty::from_name(property_name) else {
            return Vec::new();
        };
        let changed = self.game.lock().apply_property(property, selected);
        if !changed.is_empty() {
            debug!("{property} changed on {} games", changed.len());
        }
        changed
    }

    pub fn on_game_updated(&self, game: &Game) -> Vec<GameProperty> {
        self.game.lock().on_game_updated(game)
    }

    pub fn on_game_started(&self, game_id: Uuid) {
        self.running_games.lock().insert(game_id);
    }

    pub fn on_game_stopped(&self, game_id: Uuid) {
        self.running_games.lock().remove(&game_id);
    }

    pub fn is_any_game_running(&self) -> bool {
        !self.running_games.lock().is_empty()
    }
}

/// Restore, then backup, the active theme, and report missing add-ons.
/// Failures stay inside the theme being processed.
pub fn run_theme_maintenance(
    paths: &PluginPaths,
    settings: &PluginSettings,
    active_theme_id: &str,
    installed_addons: &HashSet<String>,
    notifier: &dyn Notifier,
) -> Result<MaintenanceSummary, SError> {
    let mut summary = MaintenanceSummary::default();

    let Some(theme) = ExtendedTheme::discover(paths)?
        .into_iter()
        .find(|t| t.id() == active_theme_id)
    else {
        debug!("Active theme {active_theme_id} has no extras manifest");
        return Ok(summary);
    };
    summary.theme_id = Some(theme.id().to_string());

    summary.missing_recommendations = missing_recommendations(&theme.extras, installed_addons)
        .into_iter()
        .cloned()
        .collect();
    if !summary.missing_recommendations.is_empty() {
        let names: Vec<_> = summary
            .missing_recommendations
            .iter()
            .map(|r| r.addon_name.as_str())
            .collect();
        info!("Theme {} recommends add-ons that are not installed: {}", theme.name(), names.join(", "));
    }

    if settings.enable_theme_backups {
        summary.restore = Some(theme_backup::restore(&theme, notifier));
        summary.backup = match theme_backup::backup(&theme) {
            Ok(report) => Some(report),
            Err(e) => {
                error!("Backup of theme {} failed: {e}", theme.name());
                None
            }
        };
    }

    Ok(summary)
}
