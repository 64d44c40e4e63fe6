#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use parking_lot::Mutex;
use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tempfile::TempDir;
use theme_extras_lib::config::PluginPaths;
use theme_extras_lib::models::notification::{Notification, Notifier};
use theme_extras_lib::models::paths::ThemePathRules;

/// Temp plugin data dir and launcher config dir.
pub fn setup_test_env() -> (TempDir, PluginPaths) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();

    let data_root = root.join("data");
    let host_root = root.join("host");
    fs::create_dir_all(&data_root).unwrap();
    fs::create_dir_all(&host_root).unwrap();

    (tmp, PluginPaths::new(&data_root, &host_root))
}

/// Creates `Themes/Desktop/<dir_name>` with both manifests.
pub fn create_test_theme(paths: &PluginPaths, dir_name: &str, id: &str, persistent: &[&str]) -> Utf8PathBuf {
    let root = paths.host.desktop_themes.join(dir_name);
    fs::create_dir_all(&root).unwrap();

    let rules = ThemePathRules::new(&root);
    fs::write(
        &rules.theme_manifest,
        format!("Id: {id}\nName: {dir_name}\nAuthor: test\nVersion: 1.0\n"),
    )
    .unwrap();

    let mut extras = String::from("PersistentPaths:\n");
    for path in persistent {
        extras.push_str(&format!("  - {path}\n"));
    }
    extras.push_str("Recommendations:\n  - AddonId: Some_Addon\n    AddonName: Some Addon\n");
    fs::write(&rules.extras_manifest, extras).unwrap();

    root
}

pub fn write_file(path: &Utf8Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Moves a file's write time forward, so tests do not depend on timer resolution.
pub fn touch_forward(path: &Utf8Path, secs: u64) {
    let file = fs::File::options().write(true).open(path).unwrap();
    let current = file.metadata().unwrap().modified().unwrap();
    file.set_modified(current + Duration::from_secs(secs)).unwrap();
}

static EDIT_OFFSET: AtomicU64 = AtomicU64::new(0);

/// Rewrites a file and pushes its write time further ahead on every call.
pub fn edit_file(path: &Utf8Path, content: &str) {
    fs::write(path, content).unwrap();
    touch_forward(path, EDIT_OFFSET.fetch_add(10, Ordering::SeqCst) + 10);
}

pub fn read(path: &Utf8Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub received: Mutex<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().push(notification);
    }
}

/// Makes `path` unwritable: immutable where `chattr` works (root ignores
/// permission bits), read-only otherwise. Returns false if writes still go through.
#[cfg(unix)]
pub fn deny_writes(path: &Utf8Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    let mode = if path.is_dir() { 0o555 } else { 0o444 };
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    let _ = std::process::Command::new("chattr")
        .arg("+i")
        .arg(path)
        .stderr(std::process::Stdio::null())
        .status();

    if path.is_dir() {
        let check = path.join(".write_check");
        let writable = fs::write(&check, "").is_ok();
        let _ = fs::remove_file(&check);
        !writable
    } else {
        fs::File::options().write(true).open(path).is_err()
    }
}

/// Undoes [`deny_writes`] so the temp dir can be removed.
#[cfg(unix)]
pub fn allow_writes(path: &Utf8Path) {
    use std::os::unix::fs::PermissionsExt;

    let _ = std::process::Command::new("chattr")
        .arg("-i")
        .arg(path)
        .stderr(std::process::Stdio::null())
        .status();
    let mode = if path.is_dir() { 0o755 } else { 0o644 };
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}
