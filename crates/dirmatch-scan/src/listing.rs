//! Directory listings built on jwalk.

use std::fs;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use itertools::Itertools;
use jwalk::{Parallelism, WalkDir};
use tracing::warn;

use dirmatch_core::{CompareWarning, FileEntry, WarningKind, version_cmp};

/// List the regular files directly inside `dir`, in version-aware name order.
///
/// Subdirectories, symlinks and special files are skipped. A directory that
/// cannot be read yields an empty listing plus a warning.
pub fn list_files(dir: &Path, warnings: &mut Vec<CompareWarning>) -> Vec<FileEntry> {
    if let Err(err) = fs::read_dir(dir) {
        warn!(path = %dir.display(), "cannot list directory, treating as empty: {err}");
        warnings.push(CompareWarning::read_error(dir, &err));
        return Vec::new();
    }

    let walker = serial_walk(dir).min_depth(1).max_depth(1);
    let mut files = Vec::new();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| dir.to_path_buf());
                warn!(path = %path.display(), "skipping unreadable entry: {err}");
                warnings.push(walk_warning(path, &err));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(err) => {
                // Vanished between listing and stat
                warn!(path = %path.display(), "skipping file without metadata: {err}");
                warnings.push(CompareWarning::new(
                    &path,
                    err.to_string(),
                    WarningKind::MetadataError,
                ));
                continue;
            }
        };

        let name = CompactString::new(entry.file_name().to_string_lossy());
        files.push(FileEntry::new(name, metadata.len(), path));
    }

    files
        .into_iter()
        .sorted_by(|a, b| {
            version_cmp(&a.name, &b.name).then_with(|| a.raw_name().cmp(b.raw_name()))
        })
        .collect()
}

/// List every directory below `root` at any depth, as paths relative to
/// `root`, in version-aware order of their `/`-joined form.
pub fn list_subdirectories(root: &Path, warnings: &mut Vec<CompareWarning>) -> Vec<PathBuf> {
    let walker = serial_walk(root).min_depth(1);
    let mut dirs = Vec::new();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| root.to_path_buf());
                warn!(path = %path.display(), "skipping unreadable directory: {err}");
                warnings.push(walk_warning(path, &err));
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(root) {
            dirs.push(relative.to_path_buf());
        }
    }

    dirs.into_iter()
        .map(|p| (slash_joined(&p), p))
        .sorted_by(|(a, _), (b, _)| version_cmp(a, b))
        .map(|(_, p)| p)
        .collect()
}

/// Relative path with `/` separators, as used for ordering and exclusion tests.
pub(crate) fn slash_joined(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .join("/")
}

fn serial_walk(root: &Path) -> WalkDir {
    WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .follow_links(false)
}

fn walk_warning(path: PathBuf, err: &jwalk::Error) -> CompareWarning {
    match err.io_error() {
        Some(io) => CompareWarning::read_error(path, io),
        None => CompareWarning::new(path, err.to_string(), WarningKind::ReadError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_depth_one_only() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("f10.nc"), "aa").unwrap();
        fs::write(root.join("f2.nc"), "a").unwrap();
        fs::write(root.join(".hidden"), "").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub/deep.nc"), "deep").unwrap();

        let mut warnings = Vec::new();
        let files = list_files(root, &mut warnings);
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec![".hidden", "f2.nc", "f10.nc"]);
        assert_eq!(files[2].size, 2);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_list_files_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let mut warnings = Vec::new();
        let missing = temp.path().join("vanished");
        let files = list_files(&missing, &mut warnings);
        assert!(files.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, missing);
        assert_eq!(warnings[0].kind, WarningKind::ReadError);
    }

    #[test]
    fn test_list_subdirectories_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("mem10/atmos")).unwrap();
        fs::create_dir_all(root.join("mem2")).unwrap();
        fs::write(root.join("file.txt"), "x").unwrap();

        let mut warnings = Vec::new();
        let dirs: Vec<String> = list_subdirectories(root, &mut warnings)
            .iter()
            .map(|p| slash_joined(p))
            .collect();

        assert_eq!(dirs, vec!["mem2", "mem10", "mem10/atmos"]);
    }
}
