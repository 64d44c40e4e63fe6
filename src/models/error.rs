use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Display, Debug, Clone, PartialEq, Eq)]
pub enum SError {
    #[display("parse error: {_0}")]
    ParseError(String),
    #[display("io error: {_0}")]
    IOError(String),
    #[display("access denied: {_0}")]
    AccessDenied(String),
    #[display("file or directory not found: {_0}")]
    FileOrDirectoryNotFound(String),
    #[display("theme not found: {_0}")]
    ThemeNotFound(String),
    #[display("config error: {_0}")]
    ConfigError(String),
    #[display("async runtime error: {_0}")]
    AsyncRuntimeError(String),
    #[display("logging already initialized")]
    LoggingInitialized,
}

impl std::error::Error for SError {}

impl From<std::io::Error> for SError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => SError::FileOrDirectoryNotFound(e.to_string()),
            std::io::ErrorKind::PermissionDenied => SError::AccessDenied(e.to_string()),
            _ => SError::IOError(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for SError {
    fn from(e: serde_json::Error) -> Self {
        SError::ParseError(e.to_string())
    }
}

impl From<serde_yaml::Error> for SError {
    fn from(e: serde_yaml::Error) -> Self {
        SError::ParseError(e.to_string())
    }
}

impl From<walkdir::Error> for SError {
    fn from(e: walkdir::Error) -> Self {
        match e.into_io_error() {
            Some(io) => io.into(),
            None => SError::IOError("filesystem loop detected".into()),
        }
    }
}

impl From<camino::FromPathBufError> for SError {
    fn from(e: camino::FromPathBufError) -> Self {
        SError::ParseError(format!("Invalid UTF-8 path: {:?}", e.as_path()))
    }
}

impl From<std::path::StripPrefixError> for SError {
    fn from(e: std::path::StripPrefixError) -> Self {
        SError::ParseError(e.to_string())
    }
}

impl From<confy::ConfyError> for SError {
    fn from(e: confy::ConfyError) -> Self {
        SError::ConfigError(e.to_string())
    }
}

impl From<tokio::task::JoinError> for SError {
    fn from(e: tokio::task::JoinError) -> Self {
        SError::AsyncRuntimeError(e.to_string())
    }
}
