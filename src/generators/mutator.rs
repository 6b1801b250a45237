use std::collections::HashSet;

const LEXICON: &[&str] = &[
    "dev", "staging", "test", "prod", "beta", "demo", "admin", "v1", "v2", "api", "vpn", "mail",
    "web", "internal", "corp", "private", "public", "cloud", "backup", "db", "stage", "qa", "uat",
    "sandbox", "secure", "login",
];

const HIGH_VALUE_KEYWORDS: &[&str] = &[
    "api", "auth", "admin", "vpn", "login", "sso", "dev", "stage", "test", "prod", "beta",
    "internal", "secure", "portal", "dashboard", "jenkins", "jira", "gitlab", "git", "db", "sql",
    "backup",
];

const MAX_INTERESTING: usize = 100;
const NUMBER_RANGE: std::ops::Range<u32> = 1..5;

/// Selects up to 100 "interesting" hostnames from `candidates` and emits, for
/// each, a bounded set of prefix/suffix/number permutations under `apex`.
pub fn generate_permutations(candidates: &HashSet<String>, apex: &str) -> HashSet<String> {
    let interesting: Vec<&String> = candidates
        .iter()
        .filter(|c| c.as_str() != apex)
        .filter(|c| {
            let lower = c.to_lowercase();
            HIGH_VALUE_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .take(MAX_INTERESTING)
        .collect();

    let mut out = HashSet::new();
    for candidate in interesting {
        let suffix = format!(".{apex}");
        let prefix = candidate.strip_suffix(&suffix).unwrap_or(candidate);

        for word in LEXICON {
            out.insert(format!("{prefix}-{word}.{apex}"));
            out.insert(format!("{word}-{prefix}.{apex}"));
        }
        for i in NUMBER_RANGE {
            out.insert(format!("{prefix}{i}.{apex}"));
            out.insert(format!("{prefix}-{i}.{apex}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_permutes_high_value_candidates() {
        let mut candidates = HashSet::new();
        candidates.insert("api.example.com".to_string());
        candidates.insert("random123.example.com".to_string());

        let perms = generate_permutations(&candidates, "example.com");
        assert!(perms.iter().any(|p| p.contains("api")));
        assert!(!perms.iter().any(|p| p.contains("random123")));
    }

    #[test]
    fn emits_prefix_and_number_variants() {
        let mut candidates = HashSet::new();
        candidates.insert("admin.example.com".to_string());
        let perms = generate_permutations(&candidates, "example.com");
        assert!(perms.contains("admin-dev.example.com"));
        assert!(perms.contains("admin1.example.com"));
    }
}
