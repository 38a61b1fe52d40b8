//! Directory pair enumerator.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use dirmatch_core::{CompareConfig, CompareError, CompareWarning, DirectoryPair};

use crate::listing::{list_files, list_subdirectories, slash_joined};
use crate::stats::EnumerationStats;

/// Result of enumerating the directories to compare.
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    /// Pairs in processing order, root first.
    pub pairs: Vec<DirectoryPair>,
    /// Directory counts.
    pub stats: EnumerationStats,
    /// Non-fatal problems met during traversal.
    pub warnings: Vec<CompareWarning>,
}

/// Produces the ordered directory pairs for a comparison run.
pub struct TreeEnumerator<'a> {
    config: &'a CompareConfig,
}

impl<'a> TreeEnumerator<'a> {
    /// Create an enumerator for the given configuration.
    pub fn new(config: &'a CompareConfig) -> Self {
        Self { config }
    }

    /// Walk both trees and collect the directory pairs to compare.
    ///
    /// Only invalid roots are fatal. In root-only mode, two empty roots are
    /// reported as [`CompareError::NoFiles`].
    pub fn enumerate(&self) -> Result<Enumeration, CompareError> {
        let dir_d = validate_root(&self.config.dir_d)?;
        let dir_t = validate_root(&self.config.dir_t)?;

        let mut enumeration = Enumeration::default();

        let root = self.load_pair(&dir_d, &dir_t, PathBuf::new(), &mut enumeration.warnings);
        if root.is_empty() {
            debug!("no files directly in either root");
            if !self.config.recursive {
                return Err(CompareError::NoFiles { dir_d, dir_t });
            }
        } else {
            enumeration.pairs.push(root);
        }

        if self.config.recursive {
            self.enumerate_subdirectories(&dir_d, &dir_t, &mut enumeration);
        }

        enumeration.stats.pairs = enumeration.pairs.len() as u64;
        info!(
            pairs = enumeration.stats.pairs,
            skipped = enumeration.stats.skipped(),
            warnings = enumeration.warnings.len(),
            "enumerated directory pairs"
        );

        Ok(enumeration)
    }

    fn enumerate_subdirectories(&self, dir_d: &Path, dir_t: &Path, enumeration: &mut Enumeration) {
        let relatives = list_subdirectories(dir_d, &mut enumeration.warnings);

        for relative in relatives {
            enumeration.stats.dirs_seen += 1;
            let label = slash_joined(&relative);

            if !dir_t.join(&relative).is_dir() {
                debug!(subdir = %label, "no T-side counterpart, skipping");
                enumeration.stats.skipped_no_counterpart += 1;
                continue;
            }

            if self.config.is_excluded(&label) {
                debug!(subdir = %label, "excluded by pattern, skipping");
                enumeration.stats.skipped_excluded += 1;
                continue;
            }

            let pair = self.load_pair(dir_d, dir_t, relative, &mut enumeration.warnings);
            if pair.is_empty() {
                debug!(subdir = %label, "no files on either side, skipping");
                enumeration.stats.skipped_empty += 1;
                continue;
            }

            enumeration.pairs.push(pair);
        }
    }

    fn load_pair(
        &self,
        dir_d: &Path,
        dir_t: &Path,
        relative: PathBuf,
        warnings: &mut Vec<CompareWarning>,
    ) -> DirectoryPair {
        let d_entries = list_files(&dir_d.join(&relative), warnings);
        let t_entries = list_files(&dir_t.join(&relative), warnings);
        DirectoryPair::new(relative, d_entries, t_entries)
    }
}

/// Check that a root exists and is a directory.
fn validate_root(path: &Path) -> Result<PathBuf, CompareError> {
    let metadata = std::fs::metadata(path).map_err(|e| CompareError::io(path, e))?;
    if !metadata.is_dir() {
        return Err(CompareError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_trees() -> (TempDir, TempDir) {
        let d = TempDir::new().unwrap();
        let t = TempDir::new().unwrap();

        fs::write(d.path().join("root.txt"), "r").unwrap();
        fs::create_dir_all(d.path().join("atmos/restart")).unwrap();
        fs::create_dir_all(t.path().join("atmos/restart")).unwrap();
        fs::write(d.path().join("atmos/a.nc"), "aaaa").unwrap();
        fs::write(t.path().join("atmos/restart/b.nc"), "bb").unwrap();

        // Only on the D-side
        fs::create_dir(d.path().join("ocean")).unwrap();
        fs::write(d.path().join("ocean/o.nc"), "o").unwrap();

        (d, t)
    }

    #[test]
    fn test_root_only_mode() {
        let (d, t) = create_test_trees();
        let config = CompareConfig::new(d.path(), t.path());

        let enumeration = TreeEnumerator::new(&config).enumerate().unwrap();

        assert_eq!(enumeration.pairs.len(), 1);
        let root = &enumeration.pairs[0];
        assert!(root.is_root());
        assert_eq!(root.d_entries.len(), 1);
        assert!(root.t_entries.is_empty());
    }

    #[test]
    fn test_root_only_mode_with_no_files() {
        let d = TempDir::new().unwrap();
        let t = TempDir::new().unwrap();
        let config = CompareConfig::new(d.path(), t.path());

        let err = TreeEnumerator::new(&config).enumerate().unwrap_err();
        assert!(matches!(err, CompareError::NoFiles { .. }));
    }

    #[test]
    fn test_recursive_mode_skips() {
        let (d, t) = create_test_trees();
        let mut config = CompareConfig::new(d.path(), t.path());
        config.recursive = true;

        let enumeration = TreeEnumerator::new(&config).enumerate().unwrap();
        let labels: Vec<String> = enumeration.pairs.iter().map(|p| p.display_name()).collect();

        assert_eq!(labels, vec![".", "atmos", "atmos/restart"]);
        assert_eq!(enumeration.stats.dirs_seen, 3);
        assert_eq!(enumeration.stats.skipped_no_counterpart, 1);
        assert_eq!(enumeration.stats.pairs, 3);
    }

    #[test]
    fn test_invalid_root() {
        let d = TempDir::new().unwrap();
        let file = d.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let config = CompareConfig::new(&file, d.path());
        let err = TreeEnumerator::new(&config).enumerate().unwrap_err();
        assert!(matches!(err, CompareError::NotADirectory { .. }));

        let config = CompareConfig::new(d.path().join("nope"), d.path());
        let err = TreeEnumerator::new(&config).enumerate().unwrap_err();
        assert!(matches!(err, CompareError::NotFound { .. }));
    }
}
