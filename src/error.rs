//! Error types for zipdir.
//!
//! Every fallible step of the pipeline returns [`Error`]; nothing is recovered
//! locally, the binary reports the error and exits.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("all input files must be in the same folder: '{path}' is in '{parent}', expected '{root}'")]
    MixedRoots {
        root: PathBuf,
        path: PathBuf,
        parent: PathBuf,
    },

    #[error("the input '{0}' has no file name")]
    NoFileName(PathBuf),

    #[error("the path '{0}' is not valid UTF-8")]
    InvalidName(PathBuf),

    #[error("the entry '{0}' would be written to the archive twice")]
    DuplicateEntry(String),

    #[error("failed to walk input: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to write entry '{name}' into the archive: {source}")]
    ArchiveWrite {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write archive to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read settings file '{path}': {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings file '{path}': {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Unified result type for all fallible operations in zipdir.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MixedRoots {
            root: PathBuf::from("/a"),
            path: PathBuf::from("/b/y.txt"),
            parent: PathBuf::from("/b"),
        };
        assert_eq!(
            err.to_string(),
            "all input files must be in the same folder: '/b/y.txt' is in '/b', expected '/a'"
        );

        let err = Error::DuplicateEntry("src/".to_string());
        assert_eq!(
            err.to_string(),
            "the entry 'src/' would be written to the archive twice"
        );
    }
}
