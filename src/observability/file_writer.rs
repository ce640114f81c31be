//! Rotating file writer with size-based rotation and backup retention.
//!
//! Log output goes to a single file that is renamed to a timestamped backup
//! once it reaches a size threshold. Only the newest backups are kept, so disk
//! usage stays bounded.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Size-rotated append-only log file.
///
/// Not synchronized; wrap it in a `Mutex` to share it between threads (the
/// tracing `fmt` layer accepts `Mutex<RotatingFile>` as a writer directly).
///
/// # Rotation Strategy
///
/// 1. Before a write that would push the file past the threshold, close it
/// 2. Rename it to `<name>.<timestamp>` (local time, nanosecond precision)
/// 3. Remove the oldest backups beyond the retention limit
/// 4. Reopen an empty file and continue
pub struct RotatingFile {
    file_path: PathBuf,
    file: Option<File>,
    written: u64,
    max_bytes: u64,
    max_backups: usize,
}

impl RotatingFile {
    /// Opens (or creates) the log file with the default limits.
    ///
    /// # Errors
    ///
    /// Fails if the parent directory cannot be created or the file cannot be
    /// opened for appending.
    pub fn open<P: Into<PathBuf>>(file_path: P) -> io::Result<Self> {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Opens the log file with custom rotation limits.
    ///
    /// # Errors
    ///
    /// See [`RotatingFile::open`].
    pub fn with_limits<P: Into<PathBuf>>(file_path: P, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        let file_path = file_path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = Self::open_append(&file_path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            file_path,
            file: Some(file),
            written,
            max_bytes,
            max_backups,
        })
    }

    /// Path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn open_append(path: &Path) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(path)
    }

    fn rotate(&mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }

        let timestamp = Local::now().format("%Y%m%dT%H%M%S%.9f");
        let file_name = self
            .file_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid log file name"))?;
        let backup_path = self.file_path.with_file_name(format!("{file_name}.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups(file_name)?;

        self.file = Some(Self::open_append(&self.file_path)?);
        self.written = 0;
        Ok(())
    }

    /// Removes backups beyond the retention limit.
    ///
    /// Backup names embed a sortable timestamp, so lexical order is age order.
    /// Individual removal failures are ignored.
    fn cleanup_old_backups(&self, file_name: &str) -> io::Result<()> {
        let Some(parent_dir) = self.file_path.parent() else {
            return Ok(());
        };
        let prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }

        if self.file.is_none() {
            self.file = Some(Self::open_append(&self.file_path)?);
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no log file available"))?;

        let n = file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter_map(|e| e.file_name().to_str().map(String::from))
            .filter(|n| n.starts_with("marquee.log."))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/marquee.log");

        let mut file = RotatingFile::open(&path).unwrap();
        file.write_all(b"hello\n").unwrap();
        file.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn rotates_when_limit_is_reached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marquee.log");

        let mut file = RotatingFile::with_limits(&path, 16, 3).unwrap();
        file.write_all(b"0123456789\n").unwrap();
        file.write_all(b"abcdefghij\n").unwrap();
        file.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "abcdefghij\n");
        assert_eq!(backups(dir.path()).len(), 1);
    }

    #[test]
    fn keeps_only_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marquee.log");

        let mut file = RotatingFile::with_limits(&path, 4, 2).unwrap();
        for line in ["aaaa", "bbbb", "cccc", "dddd", "eeee"] {
            file.write_all(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();

        let kept = backups(dir.path());
        assert_eq!(kept.len(), 2);
        let contents: Vec<String> = kept
            .iter()
            .map(|n| fs::read_to_string(dir.path().join(n)).unwrap())
            .collect();
        assert_eq!(contents, vec!["cccc", "dddd"]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "eeee");
    }

    #[test]
    fn appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marquee.log");
        fs::write(&path, "old\n").unwrap();

        let mut file = RotatingFile::open(&path).unwrap();
        file.write_all(b"new\n").unwrap();
        file.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "old\nnew\n");
    }
}
