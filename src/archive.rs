//! In-memory zip archive construction.
//!
//! [`ArchiveBuilder`] writes directory markers and file contents into a
//! buffer. The buffer only becomes a valid archive once [`ArchiveBuilder::finish`]
//! has written the central directory, and `finish` consumes the builder so
//! that can happen only once.

use crate::error::{Error, Result};
use crate::job::Level;
use crate::walk::WalkEntry;
use std::collections::HashSet;
use std::fs::{self, File, Metadata};
use std::io::{self, Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Files this large need ZIP64 extensions.
const LARGE_FILE_THRESHOLD: u64 = u32::MAX as u64;
/// Chunk size used when copying file contents into an entry.
const COPY_BUF_SIZE: usize = 64 * 1024;

/// Accumulates archive entries in memory until [`ArchiveBuilder::finish`].
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    level: Level,
    names: HashSet<String>,
}

impl ArchiveBuilder {
    /// Creates an empty archive whose files are deflated at `level`.
    pub fn new(level: Level) -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            level,
            names: HashSet::new(),
        }
    }

    /// Number of entries written so far.
    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    /// Writes one walked node into the archive.
    ///
    /// # Errors
    /// Fails if the entry name was already written, if the source cannot be
    /// read, or if the archive writer rejects the entry.
    pub fn add(&mut self, entry: &WalkEntry) -> Result<()> {
        let name = entry.entry_name()?;
        if !self.names.insert(name.clone()) {
            return Err(Error::DuplicateEntry(name));
        }
        tracing::debug!("adding {name}");
        if entry.is_dir {
            self.add_directory(name, &entry.path)
        } else {
            self.add_file(name, &entry.path)
        }
    }

    fn add_directory(&mut self, name: String, path: &Path) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let options = with_permissions(
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
            &metadata,
        );
        self.writer.add_directory(name, options)?;
        Ok(())
    }

    fn add_file(&mut self, name: String, path: &Path) -> Result<()> {
        let read_error = |source| Error::Read {
            path: path.to_path_buf(),
            source,
        };
        let mut file = File::open(path).map_err(read_error)?;
        let metadata = file.metadata().map_err(read_error)?;
        let options = with_permissions(self.file_options(metadata.len()), &metadata);

        self.writer.start_file(name.as_str(), options)?;

        // Source read errors and archive write errors map to different variants.
        let mut buf = vec![0; COPY_BUF_SIZE];
        loop {
            let n = match file.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(read_error(e)),
            };
            self.writer
                .write_all(&buf[..n])
                .map_err(|source| Error::ArchiveWrite {
                    name: name.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    fn file_options(&self, len: u64) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(self.level.deflate_level()))
            .large_file(needs_zip64(len))
    }

    /// Writes the central directory and returns the archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Whether a file of `len` bytes must be written with ZIP64 extensions.
fn needs_zip64(len: u64) -> bool {
    len >= LARGE_FILE_THRESHOLD
}

#[cfg(unix)]
fn with_permissions(options: SimpleFileOptions, metadata: &Metadata) -> SimpleFileOptions {
    use std::os::unix::fs::PermissionsExt;
    options.unix_permissions(metadata.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn with_permissions(options: SimpleFileOptions, _metadata: &Metadata) -> SimpleFileOptions {
    options
}

/// Builds a complete archive from walked entries, stopping at the first error.
pub fn build<I>(entries: I, level: Level) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = Result<WalkEntry>>,
{
    let mut builder = ArchiveBuilder::new(level);
    for entry in entries {
        builder.add(&entry?)?;
    }
    tracing::debug!("finalizing archive with {} entries", builder.len());
    builder.finish()
}
