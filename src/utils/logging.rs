//! Logging helpers with a consistent format for dataset operations.

use std::path::Path;

/// Initialize `env_logger` from the environment; safe to call repeatedly
pub fn init() {
    let _ = env_logger::Builder::from_default_env().try_init();
}

/// Log an operation start
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with the processed item count
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    items: usize,
    elapsed: Option<std::time::Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {} {} rows from {} in {:?}",
            operation,
            items,
            path.display(),
            duration
        );
    } else {
        log::info!(
            "Successfully {} {} rows from {}",
            operation,
            items,
            path.display()
        );
    }
}
