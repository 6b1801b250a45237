//! Input validation and sanitization used at every untrusted-input boundary:
//! hostnames returned by passive sources, wordlist paths, and subprocess
//! arguments handed to `nslookup`/`nuclei`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

pub const MAX_DOMAIN_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;
pub const MAX_PATH_LENGTH: usize = 4096;

static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$").unwrap()
});
static LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$").unwrap()
});

const SUSPICIOUS_PATH_PATTERNS: [&str; 9] = ["..", "~", "$", "`", "|", ";", "&", "\n", "\r"];

/// RFC 1035 domain validation: overall pattern, length, and per-label checks.
pub fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LENGTH {
        return false;
    }
    if !DOMAIN_RE.is_match(domain) {
        return false;
    }
    domain.split('.').all(|label| label.len() <= MAX_LABEL_LENGTH && LABEL_RE.is_match(label))
}

/// Strips scheme, path, query, fragment, whitespace, and lowercases.
pub fn sanitize_domain(domain: &str) -> String {
    let without_scheme = domain
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let host_only = without_scheme
        .split('/')
        .next()
        .unwrap_or("")
        .split('?')
        .next()
        .unwrap_or("")
        .split('#')
        .next()
        .unwrap_or("");
    host_only.trim().to_lowercase()
}

/// True iff `path`, resolved absolute, stays under `base` and contains none
/// of the path-traversal / shell-metacharacter patterns.
pub fn is_safe_path(path: &str, base: &Path) -> bool {
    if path.is_empty() || path.len() > MAX_PATH_LENGTH {
        return false;
    }
    for pattern in SUSPICIOUS_PATH_PATTERNS {
        if path.contains(pattern) {
            return false;
        }
    }
    let abs_path = match std::fs::canonicalize(path) {
        Ok(p) => p,
        Err(_) => return false,
    };
    let abs_base = match std::fs::canonicalize(base) {
        Ok(p) => p,
        Err(_) => return false,
    };
    abs_path.starts_with(abs_base)
}

/// Sanitizes and filters a list of candidate targets to only valid hostnames.
pub fn validate_targets(targets: &[String]) -> Vec<String> {
    targets
        .iter()
        .map(|t| sanitize_domain(t))
        .filter(|t| is_valid_domain(t))
        .collect()
}
