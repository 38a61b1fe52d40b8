//! Content hashing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use blake3::Hasher;

use dirmatch_core::ContentHash;

/// Computes content hashes for matched files.
///
/// The matcher only asks for hashes of files it has paired, so an
/// implementation sees exactly the I/O the comparison needs.
pub trait ContentHasher {
    /// Hash the file at `path`.
    fn hash_file(&mut self, path: &Path) -> std::io::Result<ContentHash>;
}

/// Full-file BLAKE3 hasher.
#[derive(Debug, Clone)]
pub struct Blake3Hasher {
    mmap_threshold: u64,
}

impl Blake3Hasher {
    /// Files above this size are memory-mapped instead of streamed.
    pub const DEFAULT_MMAP_THRESHOLD: u64 = 128 * 1024;

    /// Create a hasher with the default mmap threshold.
    pub fn new() -> Self {
        Self {
            mmap_threshold: Self::DEFAULT_MMAP_THRESHOLD,
        }
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentHasher for Blake3Hasher {
    fn hash_file(&mut self, path: &Path) -> std::io::Result<ContentHash> {
        let mut file = File::open(path)?;
        let file_size = file.metadata()?.len();

        let mut hasher = Hasher::new();

        if file_size > self.mmap_threshold {
            hasher.update_mmap(path)?;
        } else {
            let mut buffer = vec![0u8; 64 * 1024];
            loop {
                let bytes_read = file.read(&mut buffer)?;
                if bytes_read == 0 {
                    break;
                }
                hasher.update(&buffer[..bytes_read]);
            }
        }

        Ok(ContentHash::new(*hasher.finalize().as_bytes()))
    }
}
