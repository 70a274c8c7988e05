//! Atomic I/O operations with file locking
//!
//! A regenerated file is replaced in one step: the new content goes to a
//! sibling temp file which is then renamed over the target, so an interrupted
//! run leaves either the old or the new file, never a mix.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::time::Duration;

use backoff::ExponentialBackoff;
use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Tuning knobs for [`write_atomic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// How long to keep retrying when another process holds the lock.
    pub lock_timeout: Duration,
    /// Whether to fsync the temp file before the rename.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_secs(10),
            enable_fsync: true,
        }
    }
}

/// Path of the advisory lock guarding writes to `path`.
pub fn lock_path(path: &NormalizedPath) -> std::path::PathBuf {
    std::path::PathBuf::from(format!("{}.lock", path.to_native().display()))
}

/// Write content atomically to a file with locking.
///
/// Holds an exclusive lock on `<path>.lock` for the duration of the write.
/// The lock file is removed once the rename has happened.
pub fn write_atomic(path: &NormalizedPath, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let lock_file_path = lock_path(path);
    let lock_file = acquire_lock(&lock_file_path, config.lock_timeout)
        .map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let result = (|| -> Result<()> {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::io(&temp_path, e))?;

        temp_file
            .write_all(content)
            .map_err(|e| Error::io(&temp_path, e))?;

        if config.enable_fsync {
            temp_file
                .sync_all()
                .map_err(|e| Error::io(&temp_path, e))?;
        }
        drop(temp_file);

        fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    let _ = FileExt::unlock(&lock_file);
    drop(lock_file);
    let _ = fs::remove_file(&lock_file_path);

    if result.is_ok() {
        tracing::debug!(path = %path, bytes = content.len(), "Wrote file atomically");
    }
    result
}

fn acquire_lock(lock_path: &std::path::Path, timeout: Duration) -> std::io::Result<File> {
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)?;

    let policy = ExponentialBackoff {
        initial_interval: Duration::from_millis(10),
        max_interval: Duration::from_millis(250),
        max_elapsed_time: Some(timeout),
        ..Default::default()
    };

    backoff::retry(policy, || {
        lock_file.try_lock_exclusive().map_err(|e| {
            tracing::trace!(path = %lock_path.display(), "Lock busy, retrying");
            backoff::Error::transient(e)
        })
    })
    .map_err(|e| match e {
        backoff::Error::Permanent(err) => err,
        backoff::Error::Transient { err, .. } => err,
    })?;

    Ok(lock_file)
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}
