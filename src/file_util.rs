use crate::error::{Error, Result};
use std::path::Path;
use std::{fs, io};

/// Reports whether anything occupies `path`, without following symlinks.
///
/// A dangling symlink counts as occupied.
pub(crate) fn exists(path: &Path) -> bool {
    match fs::symlink_metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() == io::ErrorKind::AlreadyExists,
    }
}

/// Writes the finished archive to `path` in a single call, replacing any
/// existing file.
///
/// New files get the default permissions, filtered by the process umask.
pub fn write_archive(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_exists() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("a.zip");
        assert!(!exists(&file));
        fs::write(&file, b"x")?;
        assert!(exists(&file));
        assert!(exists(dir.path()));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_exists_dangling_symlink() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let link = dir.path().join("link.zip");
        std::os::unix::fs::symlink(dir.path().join("missing"), &link)?;
        assert!(exists(&link));
        Ok(())
    }

    #[test]
    fn test_write_archive_overwrites() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("out.zip");
        fs::write(&out, b"previous content")?;
        write_archive(&out, b"new")?;
        assert_eq!(fs::read(&out)?, b"new");
        Ok(())
    }

    #[test]
    fn test_write_archive_missing_folder() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("no_such_dir").join("out.zip");
        let err = write_archive(&out, b"data").unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(!out.exists());
    }
}
