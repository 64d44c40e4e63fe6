use crate::models::error::SError;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use walkdir::WalkDir;

pub struct FileUtils;

impl FileUtils {
    /// Lists every file beneath `base/rel_dir`, recursively, as paths relative to `base`.
    pub fn relative_files(base: &Utf8Path, rel_dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, SError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(base.join(rel_dir)).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = Utf8Path::from_path(entry.path()).ok_or_else(|| {
                SError::ParseError(format!("Invalid UTF-8 path: {:?}", entry.path()))
            })?;
            files.push(path.strip_prefix(base)?.to_path_buf());
        }

        Ok(files)
    }

    /// Copies a single file, creating the destination's parent directories.
    /// Overwrites any existing file at the destination.
    pub fn copy_file(src: &Utf8Path, dst: &Utf8Path) -> Result<(), SError> {
        if let Some(parent) = dst.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::copy(src, dst)?;
        Ok(())
    }

    pub fn last_write_time(path: &Utf8Path) -> Result<DateTime<Utc>, SError> {
        let modified = std::fs::metadata(path)?.modified()?;
        Ok(DateTime::<Utc>::from(modified))
    }

    /// Removes a directory tree. Missing directories are not an error.
    pub fn remove_dir_if_exists(path: &Utf8Path) -> Result<bool, SError> {
        if !path.is_dir() {
            return Ok(false);
        }
        std::fs::remove_dir_all(path)?;
        Ok(true)
    }
}
