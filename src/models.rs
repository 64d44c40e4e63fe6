pub mod error;
pub mod game;
pub mod manifest;
pub mod notification;
pub mod paths;
