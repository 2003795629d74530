//! Filesystem adapter: read a local checkout into raw entries.
//!
//! This is the CLI's stand-in for the clone collaborator. It walks a local
//! directory tree and hands the pipeline one [`RawEntry`] per regular file,
//! with paths made relative to the root and normalized to forward slashes.
//! The adapter makes no encoding determination; every entry is declared
//! [`DeclaredEncoding::Unknown`] and classification decides from the bytes.
//!
//! Entries are sorted lexicographically by path so a run over the same tree
//! is byte-identical regardless of directory iteration order.

use camino::Utf8Path;

use repofold_utils::error::RepofoldError;
use repofold_utils::types::{DeclaredEncoding, RawEntry};

/// Read every regular file under `root` into raw entries.
///
/// Symlinks are skipped, not followed. Paths that are not valid UTF-8 are
/// reported as I/O errors by the underlying directory walk.
///
/// # Errors
///
/// Returns [`RepofoldError::NotADirectory`] if `root` is not a directory,
/// and [`RepofoldError::Io`] for filesystem failures during the walk.
pub fn load_directory(root: &Utf8Path) -> Result<Vec<RawEntry>, RepofoldError> {
    if !root.is_dir() {
        return Err(RepofoldError::NotADirectory {
            path: root.to_string(),
        });
    }

    let mut entries = Vec::new();
    walk(root, root, &mut entries)?;
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    tracing::debug!(root = %root, count = entries.len(), "loaded directory tree");
    Ok(entries)
}

fn walk(
    root: &Utf8Path,
    dir: &Utf8Path,
    out: &mut Vec<RawEntry>,
) -> Result<(), RepofoldError> {
    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            walk(root, path, out)?;
        } else if file_type.is_file() {
            let rel = path.strip_prefix(root).unwrap_or(path);
            let bytes = std::fs::read(path)?;
            out.push(RawEntry::new(
                rel.as_str().replace('\\', "/"),
                bytes,
                DeclaredEncoding::Unknown,
            ));
        } else {
            tracing::debug!(path = %path, "skipping non-regular file");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path.to_path_buf()).unwrap()
    }

    #[test]
    fn loads_files_recursively_with_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "# hi").unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();

        let entries = load_directory(&utf8(dir.path())).unwrap();
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["README.md", "src/main.rs"]);
        assert_eq!(entries[0].bytes, b"# hi");
        assert_eq!(entries[0].encoding, DeclaredEncoding::Unknown);
    }

    #[test]
    fn entries_are_sorted_lexicographically() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zeta.txt", "alpha.txt", "mid.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let entries = load_directory(&utf8(dir.path())).unwrap();
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["alpha.txt", "mid.txt", "zeta.txt"]);
    }

    #[test]
    fn non_directory_root_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_directory(&utf8(file.path())).unwrap_err();
        assert!(matches!(err, RepofoldError::NotADirectory { .. }));
    }

    #[test]
    fn empty_directory_yields_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_directory(&utf8(dir.path())).unwrap().is_empty());
    }
}
