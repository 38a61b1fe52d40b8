//! File entries and directory pairs.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How the root directory pair is labelled in reports.
pub const ROOT_DISPLAY: &str = ".";

/// BLAKE3 content hash of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash(pub [u8; 32]);

impl ContentHash {
    /// Create a new ContentHash from raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the hash as a hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 64 || !hex.is_ascii() {
            return None;
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ContentHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).ok_or_else(|| serde::de::Error::custom("invalid content hash"))
    }
}

/// A regular file directly inside a compared directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// File name (not full path).
    pub name: CompactString,

    /// Size in bytes.
    pub size: u64,

    /// Full path, used for hashing.
    pub path: PathBuf,
}

impl FileEntry {
    /// Create a new file entry.
    pub fn new(name: impl Into<CompactString>, size: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            size,
            path: path.into(),
        }
    }

    /// File name as stored on disk.
    ///
    /// `name` is a lossy UTF-8 rendering, so two distinct non-UTF-8 names can
    /// share it. Name comparisons go through this instead.
    pub fn raw_name(&self) -> &OsStr {
        self.path
            .file_name()
            .unwrap_or_else(|| OsStr::new(self.name.as_str()))
    }
}

/// The same relative directory on both sides, with its files.
///
/// Entries are kept in enumeration order (version-aware name order); the
/// matcher relies on that order for its tie-break.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryPair {
    /// Path relative to both roots, empty for the roots themselves.
    pub relative_path: PathBuf,

    /// Files directly inside the D-side directory.
    pub d_entries: Vec<FileEntry>,

    /// Files directly inside the T-side directory.
    pub t_entries: Vec<FileEntry>,
}

impl DirectoryPair {
    /// Create a pair for the given relative path.
    pub fn new(
        relative_path: impl Into<PathBuf>,
        d_entries: Vec<FileEntry>,
        t_entries: Vec<FileEntry>,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            d_entries,
            t_entries,
        }
    }

    /// Whether this pair is the two roots.
    pub fn is_root(&self) -> bool {
        self.relative_path.as_os_str().is_empty()
    }

    /// Label used in tables and the CSV `subdir` column.
    pub fn display_name(&self) -> String {
        display_relative(&self.relative_path)
    }

    /// Whether neither side holds a file.
    pub fn is_empty(&self) -> bool {
        self.d_entries.is_empty() && self.t_entries.is_empty()
    }

    /// Total number of files on both sides.
    pub fn file_count(&self) -> usize {
        self.d_entries.len() + self.t_entries.len()
    }
}

/// Render a relative path with `/` separators, `.` for the root.
fn display_relative(path: &Path) -> String {
    if path.as_os_str().is_empty() {
        return ROOT_DISPLAY.to_string();
    }
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_hex() {
        let hash = ContentHash::new([0xab; 32]);
        assert_eq!(hash.to_hex().len(), 64);
        assert!(hash.to_hex().starts_with("abab"));
        assert_eq!(ContentHash::from_hex(&hash.to_hex()), Some(hash));
    }

    #[test]
    fn test_content_hash_rejects_bad_hex() {
        assert_eq!(ContentHash::from_hex("abc"), None);
        assert_eq!(ContentHash::from_hex(&"zz".repeat(32)), None);
    }

    #[test]
    fn test_root_pair_display() {
        let pair = DirectoryPair::new("", Vec::new(), Vec::new());
        assert!(pair.is_root());
        assert!(pair.is_empty());
        assert_eq!(pair.display_name(), ".");
    }

    #[test]
    fn test_nested_pair_display() {
        let pair = DirectoryPair::new(
            Path::new("gfs").join("atmos"),
            vec![FileEntry::new("a.nc", 10, "/d/gfs/atmos/a.nc")],
            Vec::new(),
        );
        assert!(!pair.is_root());
        assert_eq!(pair.display_name(), "gfs/atmos");
        assert_eq!(pair.file_count(), 1);
    }

    #[test]
    fn test_raw_name_from_path() {
        let entry = FileEntry::new("a.nc", 1, "/d/a.nc");
        assert_eq!(entry.raw_name(), OsStr::new("a.nc"));

        let bare = FileEntry::new("b.nc", 1, "");
        assert_eq!(bare.raw_name(), OsStr::new("b.nc"));
    }

    #[cfg(unix)]
    #[test]
    fn test_raw_name_keeps_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let t = Path::new("/t");
        let a = FileEntry::new("a\u{FFFD}", 1, t.join(OsStr::from_bytes(b"a\xfe")));
        let b = FileEntry::new("a\u{FFFD}", 1, t.join(OsStr::from_bytes(b"a\xfd")));
        assert_eq!(a.name, b.name);
        assert_ne!(a.raw_name(), b.raw_name());
    }
}
