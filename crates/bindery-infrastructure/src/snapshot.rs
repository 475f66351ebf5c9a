//! Value cache snapshot files
//!
//! Snapshots are written to a sibling temporary file and moved in place, so
//! a crash mid-write never truncates the previous snapshot.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use bindery_application::cache::ValueCache;
use bindery_domain::error::Result;
use tempfile::Builder;

use crate::constants::SNAPSHOT_TEMP_SUFFIX;
use crate::error_ext::ErrorContext;
use crate::logging::log_snapshot;

/// Write a snapshot of `cache` to `path`
///
/// The temporary file is removed when encoding or writing fails.
pub fn save_snapshot(cache: &ValueCache, path: &Path) -> Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).persistence_context(format!(
                "Failed to create snapshot directory: {}",
                parent.display()
            ))?;
            parent
        }
        None => Path::new("."),
    };

    let prefix = path
        .file_name()
        .map(|name| format!("{}.", name.to_string_lossy()))
        .unwrap_or_default();
    let temp = Builder::new()
        .prefix(&prefix)
        .suffix(SNAPSHOT_TEMP_SUFFIX)
        .tempfile_in(dir)
        .persistence_context(format!(
            "Failed to create snapshot file in: {}",
            dir.display()
        ))?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        cache.save(&mut writer)?;
        writer.flush().persistence_context(format!(
            "Failed to flush snapshot: {}",
            temp.path().display()
        ))?;
    }

    temp.persist(path).persistence_context(format!(
        "Failed to move snapshot into place: {}",
        path.display()
    ))?;
    log_snapshot("save", path, cache.len());
    Ok(())
}

/// Merge the snapshot at `path` into `cache`
///
/// Returns `false` without touching the cache when the file does not exist.
/// An empty file is an empty snapshot.
pub fn load_snapshot(cache: &ValueCache, path: &Path) -> Result<bool> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(e).persistence_context(format!(
                "Failed to open snapshot: {}",
                path.display()
            ));
        }
    };
    cache.load(BufReader::new(file))?;
    log_snapshot("load", path, cache.len());
    Ok(true)
}
