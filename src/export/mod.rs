pub mod backup;
pub mod fs_utils;
pub mod table;

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for export/backup artifacts.
pub(crate) fn notify_written(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}
