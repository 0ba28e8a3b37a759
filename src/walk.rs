//! Recursive traversal of the inputs.
//!
//! Each input is walked depth-first, parents before children, with siblings
//! in file name order. Every visited node becomes a [`WalkEntry`] named by its
//! path relative to the folder the inputs share.

use crate::constants::ENTRY_SEPARATOR;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file or directory found under one of the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path on disk, as reachable from the current directory.
    pub path: PathBuf,
    /// Path relative to the shared parent folder of the inputs.
    pub relative: PathBuf,
    /// Whether the node is a directory.
    pub is_dir: bool,
}

impl WalkEntry {
    /// Name of the archive entry for this node.
    ///
    /// Components are joined with `/` regardless of the host separator, and
    /// directories get a trailing `/`.
    pub fn entry_name(&self) -> Result<String> {
        let mut name = String::new();
        for component in self.relative.iter() {
            let component = component
                .to_str()
                .ok_or_else(|| Error::InvalidName(self.path.clone()))?;
            if !name.is_empty() {
                name.push(ENTRY_SEPARATOR);
            }
            name.push_str(component);
        }
        if self.is_dir {
            name.push(ENTRY_SEPARATOR);
        }
        Ok(name)
    }
}

/// Walks every input in the order given.
///
/// Entries are produced lazily; the first error ends the walk for the caller.
pub fn walk(inputs: &[PathBuf]) -> impl Iterator<Item = Result<WalkEntry>> + '_ {
    inputs.iter().flat_map(|input| walk_input(input))
}

fn walk_input(input: &Path) -> impl Iterator<Item = Result<WalkEntry>> + '_ {
    let base = input.file_name().map(PathBuf::from);
    WalkDir::new(input)
        .sort_by_file_name()
        .into_iter()
        .map(move |entry| {
            let base = base
                .as_ref()
                .ok_or_else(|| Error::NoFileName(input.to_path_buf()))?;
            let entry = entry?;

            // The last `depth` components name the node below the input.
            let total = entry.path().iter().count();
            let mut relative = base.clone();
            for component in entry.path().iter().skip(total - entry.depth()) {
                relative.push(component);
            }

            Ok(WalkEntry {
                is_dir: entry.file_type().is_dir(),
                path: entry.into_path(),
                relative,
            })
        })
}
