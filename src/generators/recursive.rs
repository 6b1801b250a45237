use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::RegexSet;

use crate::passive::PassiveSource;

static SKIP_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^gs-",
        r"^cdn-",
        r"^edge-",
        r"^node-",
        r"^server-",
        r"^instance-",
        r"^[a-f0-9]{8,}",
        r"-[a-z0-9]{10,}",
    ])
    .unwrap()
});

static KEEP_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        "api", "admin", "dev", "stage", "staging", "test", "uat", "prod", "internal", "vpn",
        "portal", "dashboard", "console", "panel", "mail", "smtp", "auth", "login", "sso",
    ])
    .unwrap()
});

/// Filters `candidates` to the subset worth recursing into: keyword matches,
/// or short simple hostnames, excluding obviously auto-generated labels.
pub fn filter_high_value(candidates: &HashSet<String>, apex: &str) -> HashSet<String> {
    candidates
        .iter()
        .filter(|c| {
            let suffix = format!(".{apex}");
            let prefix = c.strip_suffix(&suffix).unwrap_or(c).to_lowercase();
            if SKIP_PATTERNS.is_match(&prefix) {
                return false;
            }
            let is_high_value = KEEP_PATTERNS.is_match(&prefix);
            let is_simple = prefix.len() < 20 && prefix.matches('.').count() <= 1;
            is_high_value || is_simple
        })
        .cloned()
        .collect()
}

/// Runs every passive source against `host` as if it were its own apex,
/// retaining only results still ending in `original_apex`.
pub async fn enumerate_subdomain(
    sources: &[Box<dyn PassiveSource>],
    host: &str,
    original_apex: &str,
) -> HashSet<String> {
    let fetches = sources.iter().map(|source| source.fetch(host));
    let results = futures::future::join_all(fetches).await;

    let mut found = HashSet::new();
    for result in results {
        if let Ok(results) = result {
            found.extend(results.into_iter().filter(|r| r.ends_with(original_apex) && r != host));
        }
    }
    found
}

/// Bounded breadth-first expansion up to `max_depth` levels, seeded from the
/// high-value subset of `initial`.
pub async fn enumerate_recursive(
    sources: &[Box<dyn PassiveSource>],
    initial: &HashSet<String>,
    apex: &str,
    max_depth: u8,
) -> HashSet<String> {
    let mut all_found = initial.clone();
    let mut current_level = filter_high_value(initial, apex);

    for _ in 0..max_depth {
        if current_level.is_empty() {
            break;
        }
        let hosts: Vec<&str> = current_level.iter().filter(|h| h.as_str() != apex).map(|h| h.as_str()).collect();
        let fetches = hosts.iter().map(|host| enumerate_subdomain(sources, host, apex));
        let per_host_found = futures::future::join_all(fetches).await;

        let mut next_level = HashSet::new();
        for found in per_host_found {
            let new_discoveries: HashSet<String> = found.difference(&all_found).cloned().collect();
            next_level.extend(new_discoveries.clone());
            all_found.extend(new_discoveries);
        }
        current_level = next_level;
    }

    all_found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_keyword_and_short_hosts_drops_autogenerated() {
        let mut candidates = HashSet::new();
        candidates.insert("api.example.com".to_string());
        candidates.insert("gs-classic-9f8a7b6c5d.example.com".to_string());
        candidates.insert("short.example.com".to_string());

        let kept = filter_high_value(&candidates, "example.com");
        assert!(kept.contains("api.example.com"));
        assert!(kept.contains("short.example.com"));
        assert!(!kept.contains("gs-classic-9f8a7b6c5d.example.com"));
    }
}
