mod common;

use common::{create_test_theme, setup_test_env, write_file};
use std::fs;
use theme_extras_lib::config::PluginPaths;
use theme_extras_lib::core::theme::ExtendedTheme;
use theme_extras_lib::models::paths::ThemePathRules;

#[test]
fn test_try_create_reads_both_manifests() {
    let (_tmp, paths) = setup_test_env();
    let root = create_test_theme(&paths, "Harmony", "Harmony_Theme_1", &["Views", "style.xaml"]);

    let theme = ExtendedTheme::try_create(&root, &paths).unwrap().unwrap();

    assert_eq!(theme.id(), "Harmony_Theme_1");
    assert_eq!(theme.name(), "Harmony");
    assert_eq!(theme.persistent_paths(), &["Views", "style.xaml"]);
    assert_eq!(theme.extras.recommendations.len(), 1);
    assert_eq!(theme.extras.recommendations[0].addon_id, "Some_Addon");
    assert!(theme.manifest.version.is_some());
    assert_eq!(theme.backup_root, paths.data.theme_backups.join("Harmony_Theme_1"));
    assert!(theme.paths.last_changed.ends_with("lastChanged.json"));
}

#[test]
fn test_missing_extras_manifest_is_not_an_extras_theme() {
    let (_tmp, paths) = setup_test_env();
    let root = create_test_theme(&paths, "Plain", "Plain_1", &[]);
    fs::remove_file(ThemePathRules::new(&root).extras_manifest).unwrap();

    assert!(ExtendedTheme::try_create(&root, &paths).unwrap().is_none());
}

#[test]
fn test_malformed_manifests_are_not_extras_themes() {
    let (_tmp, paths) = setup_test_env();

    let root = create_test_theme(&paths, "BadExtras", "BadExtras_1", &[]);
    write_file(&ThemePathRules::new(&root).extras_manifest, "PersistentPaths: [unterminated");
    assert!(ExtendedTheme::try_create(&root, &paths).unwrap().is_none());

    let root = create_test_theme(&paths, "BadTheme", "BadTheme_1", &[]);
    write_file(&ThemePathRules::new(&root).theme_manifest, "Name: no id here\n");
    assert!(ExtendedTheme::try_create(&root, &paths).unwrap().is_none());
}

#[test]
fn test_theme_id_that_is_not_a_directory_name_is_rejected() {
    let (_tmp, paths) = setup_test_env();
    let root = create_test_theme(&paths, "Sneaky", "../../elsewhere", &[]);

    assert!(ExtendedTheme::try_create(&root, &paths).unwrap().is_none());
}

#[test]
fn test_extras_without_persistent_paths() {
    let (_tmp, paths) = setup_test_env();
    let root = create_test_theme(&paths, "NoPaths", "NoPaths_1", &[]);
    write_file(&ThemePathRules::new(&root).extras_manifest, "Recommendations: []\n");

    let theme = ExtendedTheme::try_create(&root, &paths).unwrap().unwrap();
    assert!(theme.extras.persistent_paths.is_none());
    assert!(theme.persistent_paths().is_empty());
}

#[test]
fn test_discover_lists_only_extras_themes_in_order() {
    let (_tmp, paths) = setup_test_env();
    create_test_theme(&paths, "Beta", "Beta_1", &[]);
    create_test_theme(&paths, "Alpha", "Alpha_1", &[]);
    fs::create_dir_all(paths.host.desktop_themes.join("NotATheme")).unwrap();
    write_file(&paths.host.desktop_themes.join("stray.txt"), "");

    let themes = ExtendedTheme::discover(&paths).unwrap();
    let ids: Vec<_> = themes.iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["Alpha_1", "Beta_1"]);
}

#[test]
fn test_discover_without_themes_directory() {
    let (_tmp, paths) = setup_test_env();
    assert!(!paths.host.desktop_themes.exists());
    assert!(ExtendedTheme::discover(&paths).unwrap().is_empty());
}

#[test]
fn test_plugin_paths_layout() {
    let (_tmp, paths) = setup_test_env();
    assert!(paths.data.theme_backups.starts_with(&paths.data_root));
    assert_eq!(paths.theme_backup_dir("x"), paths.data.theme_backups.join("x"));
    assert!(paths.host.desktop_themes.ends_with("Themes/Desktop"));

    let host_paths = PluginPaths::for_host(&paths.data_root).unwrap();
    assert!(host_paths.data.theme_backups.ends_with("ThemeBackups"));
    assert_eq!(host_paths.host.desktop_themes, paths.data_root.join("Themes/Desktop"));
}
