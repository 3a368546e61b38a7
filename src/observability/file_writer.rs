//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe file writer that automatically rotates
//! files when they exceed a size threshold, maintaining a fixed number of
//! backup files. This prevents unbounded disk usage for log files.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// Provides automatic file rotation based on size thresholds. When the
/// current file exceeds `MAX_FILE_SIZE_BYTES`, it is renamed with a
/// timestamp suffix and a new file is created. Old backups beyond
/// `MAX_BACKUP_FILES` are automatically cleaned up.
///
/// Implements [`MakeWriter`] so it can be handed directly to the
/// `tracing-subscriber` fmt layer as its log sink.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > 10MB, rotate:
///    - Rename current file to `<name>.log.<timestamp>`
///    - Create new empty file
///    - Remove oldest backups beyond 3
#[derive(Clone)]
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    writer: Arc<Mutex<Option<fs::File>>>,
}

impl FileWriter {
    /// Creates a new file writer for the given path.
    ///
    /// The file is not opened until the first write operation. This allows
    /// construction to succeed even if the file cannot be opened immediately.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Arc::new(Mutex::new(None)),
        }
    }

    /// Writes a buffer to the file with automatic rotation.
    ///
    /// Checks file size before writing and rotates if necessary. The buffer
    /// is flushed to disk immediately so log lines survive a host crash.
    ///
    /// # Errors
    ///
    /// May fail due to filesystem permissions, disk space exhaustion, or
    /// mutex poisoning (if another thread panicked while holding the lock).
    pub fn write_bytes(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    /// Checks file size and rotates if necessary.
    ///
    /// If the current file exceeds `MAX_FILE_SIZE_BYTES`, closes the file
    /// handle and triggers rotation.
    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Rotates the current file and cleans up old backups.
    ///
    /// Backups are named `<original_name>.log.<unix_timestamp>`, for example
    /// `zriends.log.1234567890`.
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("log.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Removes old backup files beyond the retention limit.
    ///
    /// Scans the directory for backup files matching `<name>.log.*`, sorts
    /// by modification time (newest first), and deletes all backups beyond
    /// `MAX_BACKUP_FILES`. Individual deletion errors are ignored so cleanup
    /// continues even if some files cannot be removed.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let file_stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        // Find all backup files
        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".log."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        // Remove backups beyond retention limit
        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

/// Borrowed write handle produced per log line by the fmt layer.
pub struct WriterHandle<'a> {
    inner: &'a FileWriter,
}

impl io::Write for WriterHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = WriterHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        WriterHandle { inner: self }
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_append_to_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zriends.log");
        let writer = FileWriter::new(path.clone());

        writer.write_bytes(b"{\"msg\":\"one\"}\n").unwrap();
        writer.write_bytes(b"{\"msg\":\"two\"}\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn oversized_file_rotates_on_next_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zriends.log");
        fs::write(&path, vec![b'x'; (MAX_FILE_SIZE_BYTES + 1) as usize]).unwrap();

        let writer = FileWriter::new(path.clone());
        writer.write_bytes(b"fresh\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "fresh\n");

        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".log."))
            .count();
        assert_eq!(backups, 1);
    }
}
