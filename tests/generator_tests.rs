use std::collections::HashSet;
use std::path::Path;

use subrecon::config::WordlistMode;
use subrecon::generators::{brute, mutator, recursive};

#[test]
fn safe_wordlist_scan_yields_exactly_one_candidate_for_a_single_word_file() {
    let dir = tempfile::tempdir().unwrap();
    let wordlist_path = dir.path().join("words.txt");
    std::fs::write(&wordlist_path, "# comment\n\nwww\n").unwrap();

    let candidates = brute::generate_candidates(
        "example.com",
        &WordlistMode::Custom(wordlist_path.to_string_lossy().to_string()),
        dir.path(),
    )
    .unwrap();

    assert_eq!(candidates, vec!["www.example.com".to_string()]);
}

#[test]
fn permutations_are_seeded_only_from_high_value_candidates() {
    let mut seeds = HashSet::new();
    seeds.insert("admin.example.com".to_string());
    seeds.insert("random7391.example.com".to_string());

    let perms = mutator::generate_permutations(&seeds, "example.com");
    assert!(perms.contains("admin-dev.example.com"));
    assert!(perms.contains("admin1.example.com"));
    assert!(!perms.iter().any(|p| p.contains("random7391")));
}

#[test]
fn recursive_filter_keeps_keyword_hosts_and_drops_autogenerated_ones() {
    let mut candidates = HashSet::new();
    candidates.insert("api.example.com".to_string());
    candidates.insert("gs-classic-9f8a7b6c5d.example.com".to_string());

    let kept = recursive::filter_high_value(&candidates, "example.com");
    assert!(kept.contains("api.example.com"));
    assert!(!kept.contains("gs-classic-9f8a7b6c5d.example.com"));
}

#[test]
fn custom_wordlist_outside_base_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let outside = Path::new("/etc/passwd");
    let result = brute::generate_candidates(
        "example.com",
        &WordlistMode::Custom(outside.to_string_lossy().to_string()),
        dir.path(),
    );
    assert!(result.is_err());
}
