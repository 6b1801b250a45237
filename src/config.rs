use serde::Deserialize;

/// Wordlist selection mode for the brute-force generator.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub enum WordlistMode {
    /// Small curated list shipped with the crate.
    Safe,
    /// Large (~110k word) list, downloaded/cached on first use.
    Deep,
    /// User-supplied path, validated via `security::is_safe_path`.
    Custom(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Worker-pool size: number of candidates resolved/probed concurrently.
    pub concurrency: u16,
    /// Per-request HTTP timeout in seconds.
    pub http_timeout_secs: u64,
    /// Per-source passive-discovery timeout in seconds.
    pub passive_timeout_secs: u64,
    pub wordlist: WordlistMode,
    pub recursive: bool,
    pub max_recursion_depth: u8,
    pub axfr: bool,
    pub nuclei: bool,
    pub nameservers: Vec<String>,
}

impl Config {
    /// Concurrent-HTTP-request bound derived from the worker count, per the
    /// pipeline's semaphore rule: never more than 50, never more than 5x workers.
    pub fn http_semaphore_permits(&self) -> usize {
        std::cmp::min(50, self.concurrency as usize * 5)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: 10,
            http_timeout_secs: 5,
            passive_timeout_secs: 30,
            wordlist: WordlistMode::Safe,
            recursive: false,
            max_recursion_depth: 2,
            axfr: false,
            nuclei: false,
            nameservers: vec![
                "8.8.8.8".to_string(),
                "1.1.1.1".to_string(),
                "1.0.0.1".to_string(),
                "208.67.222.222".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_semaphore_bounded_by_50() {
        let mut c = Config { concurrency: 20, ..Config::default() };
        assert_eq!(c.http_semaphore_permits(), 50);
        c.concurrency = 4;
        assert_eq!(c.http_semaphore_permits(), 20);
    }
}
