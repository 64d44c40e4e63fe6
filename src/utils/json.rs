use crate::models::error::SError;
use camino::Utf8Path;

pub struct Json;

impl Json {
    /// Writes `data` as indented JSON.
    pub fn write<T: serde::Serialize>(path: &Utf8Path, data: &T) -> Result<(), SError> {
        serde_json::to_string_pretty(data)
            .map_err(|e| SError::ParseError(e.to_string()))
            .and_then(|t| std::fs::write(path, t).map_err(SError::from))
    }

    pub fn read<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T, SError> {
        let s = std::fs::read_to_string(path)?;
        serde_json::from_str::<T>(&s).map_err(|e| SError::ParseError(e.to_string()))
    }
}
