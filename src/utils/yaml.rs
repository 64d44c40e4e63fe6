use crate::models::error::SError;
use camino::Utf8Path;

pub struct Yaml;

impl Yaml {
    pub fn read<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T, SError> {
        let s = std::fs::read_to_string(path)?;
        serde_yaml::from_str::<T>(&s).map_err(|e| SError::ParseError(format!("{path}: {e}")))
    }

    /// Like [`Yaml::read`], but a missing or malformed file is `None`.
    pub fn try_read<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Option<T> {
        if !path.is_file() {
            return None;
        }
        match Self::read(path) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("Failed to deserialize {path}: {e}");
                None
            }
        }
    }
}
