//! Version-aware name ordering.

use std::cmp::Ordering;

/// Compare two names so that embedded numbers sort numerically (`f2` < `f10`).
///
/// Names are split into runs of ASCII digits and runs of everything else.
/// Text runs compare bytewise, digit runs by numeric value; names equal under
/// those rules fall back to plain byte order so the result is total.
pub fn version_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks { rest: a };
    let mut right = Chunks { rest: b };

    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => cmp_numeric(x, y),
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => x.cmp(y),
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Compare two digit runs by value without parsing (runs may exceed u64).
fn cmp_numeric(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Chunk::Digits(run)
        } else {
            Chunk::Text(run)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_sort_by_value() {
        assert_eq!(version_cmp("f2", "f10"), Ordering::Less);
        assert_eq!(version_cmp("gfs.t12z.f006", "gfs.t12z.f012"), Ordering::Less);
        assert_eq!(version_cmp("f10", "f9"), Ordering::Greater);
    }

    #[test]
    fn test_plain_text_is_lexical() {
        assert_eq!(version_cmp("alpha", "beta"), Ordering::Less);
        assert_eq!(version_cmp("a", "a.txt"), Ordering::Less);
        assert_eq!(version_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_leading_zeros_tie_break() {
        assert_ne!(version_cmp("f01", "f1"), Ordering::Equal);
        assert_eq!(version_cmp("f01", "f1"), "f01".cmp("f1"));
    }

    #[test]
    fn test_sorting_a_listing() {
        let mut names = vec!["log10", "log2", "log1", "atm", "log"];
        names.sort_by(|a, b| version_cmp(a, b));
        assert_eq!(names, vec!["atm", "log", "log1", "log2", "log10"]);
    }
}
