use std::fs::{self, OpenOptions};
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::error::FilesystemError;

/// The two idempotent primitives a layout is realized with.
pub trait Filesystem {
    /// Create `path` and any missing ancestors. Already-present directories are fine.
    fn ensure_directory(&mut self, path: &Utf8Path) -> Result<(), FilesystemError>;

    /// Create an empty file at `path` unless something already lives there.
    fn ensure_empty_file(&mut self, path: &Utf8Path) -> Result<(), FilesystemError>;
}

/// Host filesystem, with layout paths resolved against `root`.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: Utf8PathBuf,
}

impl LocalFs {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn resolve(&self, path: &Utf8Path) -> Utf8PathBuf {
        self.root.join(path)
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Filesystem for LocalFs {
    fn ensure_directory(&mut self, path: &Utf8Path) -> Result<(), FilesystemError> {
        let target = self.resolve(path);
        match fs::metadata(&target) {
            Ok(meta) if meta.is_dir() => return Ok(()),
            Ok(_) => return Err(FilesystemError::NotADirectory { path: target }),
            Err(_) => {}
        }

        fs::create_dir_all(&target).map_err(|source| FilesystemError::CreateDirectory {
            path: target.clone(),
            source,
        })?;
        debug!(path = %target, "ensured directory");
        Ok(())
    }

    fn ensure_empty_file(&mut self, path: &Utf8Path) -> Result<(), FilesystemError> {
        let target = self.resolve(path);
        if fs::symlink_metadata(&target).is_ok() {
            debug!(path = %target, "ensured file");
            return Ok(());
        }

        // create_new also covers an entry appearing after the check above.
        match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
            Err(source) => return Err(FilesystemError::CreateFile { path: target, source }),
        }
        debug!(path = %target, "ensured file");
        Ok(())
    }
}

/// Reports what would be ensured without touching the disk.
#[derive(Debug, Default)]
pub struct DryRunFs;

impl Filesystem for DryRunFs {
    fn ensure_directory(&mut self, path: &Utf8Path) -> Result<(), FilesystemError> {
        println!("[dry-run] would ensure {}/", path);
        Ok(())
    }

    fn ensure_empty_file(&mut self, path: &Utf8Path) -> Result<(), FilesystemError> {
        println!("[dry-run] would ensure {}", path);
        Ok(())
    }
}
