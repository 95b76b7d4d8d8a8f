// file: src/workdir.rs
// version: 1.0.0
// guid: c9707e8b-bef5-44cf-b2ab-0635383a65a6

//! Process working directory handling

use crate::error::UpdateError;
use crate::Result;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Make `dir` the process working directory.
///
/// The directory must exist. Returns the working directory as reported by the
/// OS after the change. The previous directory is not restored.
pub fn enter_source_dir(dir: &Path) -> Result<PathBuf> {
    let metadata = std::fs::metadata(dir).map_err(|e| UpdateError::path(dir, e))?;
    if !metadata.is_dir() {
        return Err(UpdateError::path(
            dir,
            io::Error::new(io::ErrorKind::Other, "not a directory"),
        ));
    }

    std::env::set_current_dir(dir).map_err(|e| UpdateError::path(dir, e))?;
    let cwd = std::env::current_dir()?;
    debug!("Working directory is now {}", cwd.display());
    Ok(cwd)
}
