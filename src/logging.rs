//! Logging setup
//!
//! Installs the global tracing subscriber once at startup: a stderr layer
//! plus an append-only log file under the data directory. The log file is
//! rotated at startup once it grows past [`MAX_LOG_BYTES`].

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "recap.log";

/// Size that triggers rotation
pub const MAX_LOG_BYTES: u64 = 1_000_000;

/// Rotated files kept next to the active one
pub const LOG_BACKUPS: usize = 3;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `level`; `verbose` forces debug output.
pub fn init(level: &str, verbose: bool, log_dir: Option<&Path>) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let file_layer = log_dir.and_then(open_log_file).map(|file| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();
}

fn open_log_file(dir: &Path) -> Option<File> {
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!(
            "warning: cannot create log directory {}: {}",
            dir.display(),
            err
        );
        return None;
    }

    let path = dir.join(LOG_FILE_NAME);
    if let Err(err) = rotate(&path, MAX_LOG_BYTES, LOG_BACKUPS) {
        eprintln!("warning: cannot rotate {}: {}", path.display(), err);
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("warning: cannot open log file {}: {}", path.display(), err);
            None
        }
    }
}

/// Shift `path` to `path.1`, `path.1` to `path.2`, ... when it exceeds `max_bytes`.
///
/// The oldest backup beyond `backups` is dropped.
pub fn rotate(path: &Path, max_bytes: u64, backups: usize) -> std::io::Result<bool> {
    let size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };

    if size <= max_bytes {
        return Ok(false);
    }

    if backups == 0 {
        std::fs::remove_file(path)?;
        return Ok(true);
    }

    let oldest = backup_path(path, backups);
    if oldest.exists() {
        std::fs::remove_file(&oldest)?;
    }

    for index in (1..backups).rev() {
        let from = backup_path(path, index);
        if from.exists() {
            std::fs::rename(&from, backup_path(path, index + 1))?;
        }
    }

    std::fs::rename(path, backup_path(path, 1))?;
    Ok(true)
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}
