use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::WordlistMode;
use crate::security;

const SAFE_WORDLIST: &str = include_str!("../../wordlists/safe.txt");

/// Reads the wordlist selected by `mode` and emits `<word>.<apex>` for every
/// non-blank, non-comment line. Custom paths are validated before reading.
pub fn generate_candidates(apex: &str, mode: &WordlistMode, base_dir: &Path) -> anyhow::Result<Vec<String>> {
    let words: Vec<String> = match mode {
        WordlistMode::Safe => SAFE_WORDLIST.lines().map(|s| s.to_string()).collect(),
        WordlistMode::Deep => {
            let path = base_dir.join("subdomains_110000.txt");
            if path.is_file() {
                read_wordlist_file(&path)?
            } else {
                tracing::warn!(path = %path.display(), "deep wordlist not found, skipping brute force phase");
                Vec::new()
            }
        }
        WordlistMode::Custom(path) => {
            if !security::is_safe_path(path, base_dir) {
                anyhow::bail!("unsafe or invalid wordlist path: {path}");
            }
            read_wordlist_file(Path::new(path))?
        }
    };

    Ok(words
        .par_iter()
        .filter(|line| !line.trim().is_empty() && !line.trim().starts_with('#'))
        .map(|line| format!("{}.{apex}", line.trim()))
        .collect())
}

fn read_wordlist_file(path: &PathBuf) -> anyhow::Result<Vec<String>> {
    if !path.is_file() {
        anyhow::bail!("wordlist file not found: {}", path.display());
    }
    Ok(std::fs::read_to_string(path)?.lines().map(|s| s.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_wordlist_generates_one_candidate_per_word() {
        let candidates = generate_candidates("example.com", &WordlistMode::Safe, Path::new(".")).unwrap();
        assert!(candidates.iter().all(|c| c.ends_with(".example.com")));
        assert!(!candidates.is_empty());
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let candidates = generate_candidates("example.com", &WordlistMode::Safe, Path::new(".")).unwrap();
        assert!(!candidates.iter().any(|c| c.starts_with('#') || c == ".example.com"));
    }
}
