use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failure reported by the storage layer while realizing a layout.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("creating directory {path}")]
    CreateDirectory {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} exists and is not a directory")]
    NotADirectory { path: Utf8PathBuf },
    #[error("creating file {path}")]
    CreateFile {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}
