//! Size and text formatting helpers.

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Width of the size columns in the terminal table.
pub const SIZE_WIDTH: usize = 7;

/// Abbreviate a byte count to one unit, truncating: `512B`, `4K`, `1536M`.
pub fn abbreviate_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes}B")
    } else if bytes < MIB {
        format!("{}K", bytes / KIB)
    } else {
        format!("{}M", bytes / MIB)
    }
}

/// Abbreviated size right-justified to [`SIZE_WIDTH`]; blank when absent.
pub fn size_cell(bytes: Option<u64>) -> String {
    let text = bytes.map(abbreviate_size).unwrap_or_default();
    format!("{text:>SIZE_WIDTH$}")
}

/// Human-readable byte total for summaries.
pub fn format_bytes(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Truncate a string to `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
    format!("{kept}…")
}
