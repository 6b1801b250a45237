use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Content-hash deduplicator. The hash groups responses within 100 bytes of
/// each other under the same rounded length, so near-identical pages collapse
/// to one fingerprint even when byte-for-byte lengths differ slightly.
#[derive(Default)]
pub struct Fingerprinter {
    seen: Mutex<HashSet<String>>,
}

impl Fingerprinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash(status: u16, title: &str, content_length: usize, body_snippet: &str) -> String {
        let rounded_len = ((content_length as f64 / 100.0).round() as i64) * 100;
        let snippet: String = body_snippet.chars().take(100).collect();
        let sig = format!("{status}|{title}|{rounded_len}|{snippet}");
        let mut hasher = Sha256::new();
        hasher.update(sig.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Returns true iff this hash has been seen already this run, recording
    /// it as seen on first encounter.
    pub fn is_duplicate(&self, content_hash: &str) -> bool {
        let mut seen = self.seen.lock();
        !seen.insert(content_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_is_not_duplicate_second_is() {
        let fp = Fingerprinter::new();
        let hash = Fingerprinter::hash(200, "Home", 500, "hello world");
        assert!(!fp.is_duplicate(&hash));
        assert!(fp.is_duplicate(&hash));
    }

    #[test]
    fn near_identical_lengths_collapse_to_same_hash() {
        let a = Fingerprinter::hash(200, "Home", 500, "hello");
        let b = Fingerprinter::hash(200, "Home", 520, "hello");
        assert_eq!(a, b);
    }
}
