use crate::constants::ARCHIVE_EXT;
use crate::error::{Error, Result};
use crate::file_util::exists;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Returns the folder that contains `path`, lexically cleaned.
///
/// A bare file name lives in the current directory, so its parent is `.`.
pub(crate) fn parent_dir(path: &Path) -> Result<PathBuf> {
    match path.parent() {
        Some(parent) => Ok(clean(parent)),
        None => Err(Error::NoFileName(path.to_path_buf())),
    }
}

/// Resolves `.` and `..` components without touching the filesystem.
///
/// `..` cancels the preceding normal component, is dropped right after the
/// root, and is kept when nothing precedes it. An empty result becomes `.`.
pub(crate) fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Checks that every input shares the primary input's parent folder and returns it.
///
/// Parents are compared after lexical cleaning; inputs are not canonicalized.
///
/// # Errors
/// Returns [`Error::MixedRoots`] for the first input whose parent differs.
pub fn common_root(inputs: &[PathBuf]) -> Result<PathBuf> {
    let (primary, rest) = inputs
        .split_first()
        .ok_or_else(|| Error::NoFileName(PathBuf::new()))?;
    let root = parent_dir(primary)?;
    for path in rest {
        let parent = parent_dir(path)?;
        if parent != root {
            return Err(Error::MixedRoots {
                root,
                path: path.clone(),
                parent,
            });
        }
    }
    Ok(root)
}

/// Derives the output path from the primary input.
///
/// The archive is named after the primary input with its extension replaced
/// by `.zip` and placed in the current directory. When that file already
/// exists, ` (2)`, ` (3)`, ... is appended before the extension until a free
/// name is found.
pub fn default_output(primary: &Path) -> Result<PathBuf> {
    let stem = primary
        .file_stem()
        .ok_or_else(|| Error::NoFileName(primary.to_path_buf()))?;
    let mut name = OsString::from(stem);
    name.push(".");
    name.push(ARCHIVE_EXT);
    let candidate = PathBuf::from(name);

    let mut unique = candidate.clone();
    let mut n = 1;
    while exists(&unique) {
        n += 1;
        unique = extend_file_name(&candidate, n);
    }
    Ok(unique)
}

/// Inserts ` (n)` between the file stem and the extension of `path`.
pub(crate) fn extend_file_name(path: &Path, n: u32) -> PathBuf {
    let mut name = path.file_stem().map(OsString::from).unwrap_or_default();
    name.push(format!(" ({n})"));
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Resolves the root folder and the output path for a set of inputs.
///
/// An explicit output is used as given, even if a file already exists there.
pub fn resolve(inputs: &[PathBuf], output: Option<&Path>) -> Result<(PathBuf, PathBuf)> {
    let root = common_root(inputs)?;
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output(&inputs[0])?,
    };
    Ok((root, output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parent_dir() -> Result<()> {
        assert_eq!(parent_dir(Path::new("/data/project/src"))?, Path::new("/data/project"));
        assert_eq!(parent_dir(Path::new("README.md"))?, Path::new("."));
        assert_eq!(parent_dir(Path::new("./README.md"))?, Path::new("."));
        assert!(parent_dir(Path::new("/")).is_err());
        Ok(())
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean(Path::new("a/..")), Path::new("."));
        assert_eq!(clean(Path::new("./a/./b/../c")), Path::new("a/c"));
        assert_eq!(clean(Path::new("../../a")), Path::new("../../a"));
        assert_eq!(clean(Path::new("/../data")), Path::new("/data"));
        assert_eq!(clean(Path::new("")), Path::new("."));
    }

    #[test]
    fn test_common_root_cleans_parents() -> Result<()> {
        let inputs = vec![PathBuf::from("a/../src"), PathBuf::from("README.md")];
        assert_eq!(common_root(&inputs)?, PathBuf::from("."));

        let inputs = vec![
            PathBuf::from("/data/project/./src"),
            PathBuf::from("/data/other/../project/README.md"),
        ];
        assert_eq!(common_root(&inputs)?, PathBuf::from("/data/project"));
        Ok(())
    }

    #[test]
    fn test_common_root_shared_parent() -> Result<()> {
        let inputs = vec![
            PathBuf::from("/data/project/src"),
            PathBuf::from("/data/project/README.md"),
        ];
        assert_eq!(common_root(&inputs)?, PathBuf::from("/data/project"));
        Ok(())
    }

    #[test]
    fn test_common_root_mixed_parents() {
        let inputs = vec![PathBuf::from("/a/x.txt"), PathBuf::from("/b/y.txt")];
        let err = common_root(&inputs).unwrap_err();
        match err {
            Error::MixedRoots { root, path, parent } => {
                assert_eq!(root, PathBuf::from("/a"));
                assert_eq!(path, PathBuf::from("/b/y.txt"));
                assert_eq!(parent, PathBuf::from("/b"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extend_file_name() {
        assert_eq!(extend_file_name(Path::new("report.zip"), 2), Path::new("report (2).zip"));
        assert_eq!(
            extend_file_name(Path::new("out/report.zip"), 13),
            Path::new("out/report (13).zip")
        );
        assert_eq!(extend_file_name(Path::new("report"), 3), Path::new("report (3)"));
    }

    #[test]
    fn test_explicit_output_is_verbatim() -> Result<()> {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("taken.zip");
        fs::write(&existing, b"old").unwrap();

        let inputs = vec![dir.path().join("a.txt")];
        let (_, output) = resolve(&inputs, Some(&existing))?;
        assert_eq!(output, existing);
        Ok(())
    }

    #[test]
    fn test_default_output_strips_extension() -> Result<()> {
        let output = default_output(Path::new("/nowhere/zipdir-test-input-4711.tar.gz"))?;
        assert_eq!(output, PathBuf::from("zipdir-test-input-4711.tar.zip"));
        Ok(())
    }
}
