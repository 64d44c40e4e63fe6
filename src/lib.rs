pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use crate::config::PluginPaths;
use crate::core::context::PluginContext;
use crate::models::error::SError;
use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;

/// Entry point for the host: sets up logging under the plugin data directory
/// and builds the plugin context. Keep the guard alive until unload.
pub fn load_plugin(
    data_root: &Utf8Path,
    host_config_root: &Utf8Path,
) -> Result<(PluginContext, WorkerGuard), SError> {
    let paths = PluginPaths::new(data_root, host_config_root);
    let context = PluginContext::load(paths)?;

    let level = context.settings.lock().log_level.clone();
    let guard = utils::logging::init(&context.paths.data.logs, &level)?;

    Ok((context, guard))
}
