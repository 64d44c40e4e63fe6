pub mod context;
pub mod elements;
pub mod game_sync;
pub mod rating;
pub mod recommendations;
pub mod selection;
pub mod snapshot;
pub mod theme;
pub mod theme_backup;
