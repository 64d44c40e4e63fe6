use crate::core::snapshot::Snapshot;
use crate::core::theme::ExtendedTheme;
use crate::models::error::SError;
use crate::models::notification::{Notification, NotificationKind, Notifier};
use crate::utils::file::FileUtils;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use std::collections::HashSet;
use tracing::{debug, error, info, instrument, warn};

pub const RESTORE_FAILED_NOTIFICATION: &str = "FileRestoreFailed";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BackupReport {
    /// The snapshot did not exist (or was unreadable) and was written as a fresh baseline.
    pub initialized: bool,
    pub backed_up: Vec<Utf8PathBuf>,
    pub failed: Vec<Utf8PathBuf>,
    /// Files seen for the first time: timestamp recorded, nothing copied.
    pub newly_tracked: Vec<Utf8PathBuf>,
    /// Snapshot entries dropped because the file is no longer a persistent file.
    pub pruned: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestoreReport {
    /// The snapshot was present, so the installation is unchanged and nothing ran.
    pub skipped: bool,
    pub restored: Vec<Utf8PathBuf>,
    pub failed: Vec<Utf8PathBuf>,
    pub notified: bool,
}

/// Resolves declared persistent paths against `base` into concrete files,
/// relative to `base`. Files are taken as-is, directories are walked
/// recursively, and anything else is skipped.
pub fn expand_persistent_paths(base: &Utf8Path, declared: &[String]) -> Vec<Utf8PathBuf> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for entry in declared {
        let Some(rel) = normalize_relative(entry) else {
            warn!("Ignoring persistent path {entry:?}: not inside the theme directory");
            continue;
        };

        let source = base.join(&rel);
        let found = if source.is_file() {
            vec![rel]
        } else if source.is_dir() {
            match FileUtils::relative_files(base, &rel) {
                Ok(found) => found,
                Err(e) => {
                    warn!("Failed to list {source}: {e}");
                    continue;
                }
            }
        } else {
            continue;
        };

        for file in found {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }

    files
}

/// Drops `.` components and rejects anything that is absolute or climbs out with `..`.
fn normalize_relative(entry: &str) -> Option<Utf8PathBuf> {
    let mut rel = Utf8PathBuf::new();
    for component in Utf8Path::new(entry).components() {
        match component {
            Utf8Component::Normal(part) => rel.push(part),
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir | Utf8Component::RootDir | Utf8Component::Prefix(_) => {
                return None
            }
        }
    }
    (!rel.as_str().is_empty()).then_some(rel)
}

/// Copies every tracked persistent file whose write time moved since the
/// snapshot into the theme's backup directory.
///
/// Without a snapshot this only records the current write times: the live
/// files are the baseline. Files missing from the snapshot get a baseline
/// entry but no copy, so a new file's first edit is picked up one run later.
#[instrument(skip(theme), fields(theme = %theme.id()))]
pub fn backup(theme: &ExtendedTheme) -> Result<BackupReport, SError> {
    let mut report = BackupReport::default();
    if theme.extras.persistent_paths.is_none() {
        return Ok(report);
    }

    let files = expand_persistent_paths(&theme.root, theme.persistent_paths());
    let snapshot_path = &theme.paths.last_changed;

    let Some(mut snapshot) = load_snapshot(snapshot_path) else {
        let snapshot = baseline(&theme.root, &files);
        snapshot.save(snapshot_path)?;
        if snapshot.is_empty() {
            info!("No persistent files to track yet for theme {}", theme.name());
        } else {
            info!("Recorded {} file timestamps for theme {}", snapshot.len(), theme.name());
        }
        report.initialized = true;
        return Ok(report);
    };

    report.pruned = {
        let expanded: HashSet<&str> = files.iter().map(|f| f.as_str()).collect();
        snapshot.retain(|key| expanded.contains(key))
    };
    let mut dirty = !report.pruned.is_empty();

    for file in files {
        let live = match FileUtils::last_write_time(&theme.root.join(&file)) {
            Ok(live) => live,
            Err(e) => {
                warn!("Failed to read write time of {file}: {e}");
                continue;
            }
        };

        let Some(recorded) = snapshot.get(file.as_str()).copied() else {
            snapshot.record(file.as_str(), live);
            dirty = true;
            report.newly_tracked.push(file);
            continue;
        };
        if live == recorded {
            continue;
        }

        match backup_file(theme, &file) {
            Ok(()) => {
                // Persist after every file so a crash keeps what was already copied.
                snapshot.record(file.as_str(), live);
                match snapshot.save(snapshot_path) {
                    Ok(()) => dirty = false,
                    Err(e) => {
                        error!("Failed to record backup of {file} in {snapshot_path}: {e}");
                        dirty = true;
                    }
                }
                report.backed_up.push(file);
            }
            Err(e) => {
                error!("Failed to backup {file} of theme {}: {e}", theme.name());
                report.failed.push(file);
            }
        }
    }

    if dirty {
        snapshot.save(snapshot_path)?;
    }
    Ok(report)
}

fn load_snapshot(path: &Utf8Path) -> Option<Snapshot> {
    if !Snapshot::exists(path) {
        return None;
    }
    match Snapshot::load(path) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!("Unreadable snapshot {path}, recording a new baseline: {e}");
            None
        }
    }
}

fn baseline(root: &Utf8Path, files: &[Utf8PathBuf]) -> Snapshot {
    let mut snapshot = Snapshot::default();
    for file in files {
        match FileUtils::last_write_time(&root.join(file)) {
            Ok(time) => snapshot.record(file.as_str(), time),
            Err(e) => debug!("Not tracking {file}: {e}"),
        }
    }
    snapshot
}

fn backup_file(theme: &ExtendedTheme, rel: &Utf8Path) -> Result<(), SError> {
    FileUtils::copy_file(&theme.root.join(rel), &theme.backup_root.join(rel))?;
    debug!("Backed up {rel} from {} to {}", theme.root, theme.backup_root);
    Ok(())
}

/// Copies backed up persistent files over a freshly installed theme.
///
/// Does nothing while the snapshot exists. A missing snapshot means the theme
/// directory was replaced, taking the user's edits with it.
#[instrument(skip(theme, notifier), fields(theme = %theme.id()))]
pub fn restore(theme: &ExtendedTheme, notifier: &dyn Notifier) -> RestoreReport {
    let mut report = RestoreReport::default();

    if Snapshot::exists(&theme.paths.last_changed) {
        report.skipped = true;
        return report;
    }

    for file in expand_persistent_paths(&theme.backup_root, theme.persistent_paths()) {
        match restore_file(theme, &file) {
            Ok(()) => report.restored.push(file),
            Err(e) => {
                error!("Failed to restore {file} of theme {}: {e}", theme.name());
                if matches!(e, SError::AccessDenied(_)) && !report.notified {
                    notifier.notify(access_denied_notification(theme, &file));
                    report.notified = true;
                }
                report.failed.push(file);
            }
        }
    }

    if !report.restored.is_empty() {
        info!("Restored {} files of theme {}", report.restored.len(), theme.name());
    }
    report
}

fn restore_file(theme: &ExtendedTheme, rel: &Utf8Path) -> Result<(), SError> {
    FileUtils::copy_file(&theme.backup_root.join(rel), &theme.root.join(rel))?;
    debug!("Restored {rel} from {} to {}", theme.backup_root, theme.root);
    Ok(())
}

fn access_denied_notification(theme: &ExtendedTheme, rel: &Utf8Path) -> Notification {
    Notification {
        id: RESTORE_FAILED_NOTIFICATION.to_string(),
        text: format!(
            "Failed to restore {rel} of theme {} because file access was denied. \
             If this file is an image used as a theme resource, load it with CacheOption=\"OnLoad\".",
            theme.name()
        ),
        kind: NotificationKind::Error,
    }
}

/// Files currently held in the theme's backup directory, relative to it.
pub fn list_backed_up_files(theme: &ExtendedTheme) -> Result<Vec<Utf8PathBuf>, SError> {
    if !theme.backup_root.is_dir() {
        return Ok(Vec::new());
    }
    FileUtils::relative_files(&theme.backup_root, Utf8Path::new(""))
}

/// Removes the theme's backup directory and its snapshot. Safe to repeat.
#[instrument(skip(theme), fields(theme = %theme.id()))]
pub fn clear_backup(theme: &ExtendedTheme) -> Result<bool, SError> {
    let mut removed = FileUtils::remove_dir_if_exists(&theme.backup_root)?;

    if Snapshot::exists(&theme.paths.last_changed) {
        std::fs::remove_file(&theme.paths.last_changed)?;
        removed = true;
    }

    if removed {
        info!("Cleared backup of theme {}", theme.name());
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::normalize_relative;

    #[test]
    fn test_normalize_relative_paths() {
        assert_eq!(normalize_relative("Views/Main.xaml").unwrap(), "Views/Main.xaml");
        assert_eq!(normalize_relative("./Images").unwrap(), "Images");
        assert!(normalize_relative("../other/theme.yaml").is_none());
        assert!(normalize_relative("Views/../../x").is_none());
        assert!(normalize_relative("/etc/passwd").is_none());
        assert!(normalize_relative("").is_none());
        assert!(normalize_relative(".").is_none());
    }
}
