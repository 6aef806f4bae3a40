#![cfg(feature = "std")]

use rijn_core::{RijnError, RijnResult};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Writes an artifact atomically: stage to a `.tmp` sibling, fsync,
/// rename over the target. A crashed run never leaves a torn artifact;
/// tables are all-or-nothing.
pub fn write_atomic(path: &Path, contents: &str) -> RijnResult<()> {
    let tmp_path = path.with_extension("tmp");

    // 1. Stage
    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)
            .map_err(|_| RijnError::Io)?;

        file.write_all(contents.as_bytes())
            .map_err(|_| RijnError::Io)?;

        // 2. Flush to media before the rename makes it visible
        file.sync_all().map_err(|_| RijnError::Io)?;
    }

    // 3. Rename (atomic)
    fs::rename(&tmp_path, path).map_err(|_| RijnError::Io)?;

    // 4. Sync parent dir, best effort
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }
    }

    Ok(())
}
