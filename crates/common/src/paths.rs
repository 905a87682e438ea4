//! Output path conventions.
//!
//! Every session writes exactly one file, named after the moment the
//! session was configured: `recording_<YYYY-MM-DD_HH-MM-SS>.<ext>`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::QuickrecResult;

/// Build the timestamp-qualified output path for a session.
pub fn session_output_path(dir: &Path, now: DateTime<Local>, container: &str) -> PathBuf {
    let stamp = now.format("%Y-%m-%d_%H-%M-%S");
    dir.join(format!("recording_{stamp}.{container}"))
}

/// Ensure the recordings directory exists before a spec is handed to the
/// executor.
pub fn ensure_output_dir(dir: &Path) -> QuickrecResult<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}
