use crate::models::error::SError;
use crate::utils::json::Json;
use camino::Utf8Path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contents of `lastChanged.json`: relative file path -> last observed write time.
///
/// The file existing at a theme root means "backups are current for this
/// installation". A theme update replaces the directory and drops it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Snapshot {
    pub entries: BTreeMap<String, DateTime<Utc>>,
}

impl Snapshot {
    pub fn exists(path: &Utf8Path) -> bool {
        path.is_file()
    }

    pub fn load(path: &Utf8Path) -> Result<Self, SError> {
        Json::read(path)
    }

    pub fn save(&self, path: &Utf8Path) -> Result<(), SError> {
        Json::write(path, self)
    }

    pub fn get(&self, rel_path: &str) -> Option<&DateTime<Utc>> {
        self.entries.get(rel_path)
    }

    pub fn record(&mut self, rel_path: &str, time: DateTime<Utc>) {
        self.entries.insert(rel_path.to_string(), time);
    }

    /// Keeps the entries whose path satisfies `keep`. Returns the removed paths.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) -> Vec<String> {
        let mut removed = Vec::new();
        self.entries.retain(|path, _| {
            let kept = keep(path.as_str());
            if !kept {
                removed.push(path.clone());
            }
            kept
        });
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
