use subrecon::analysis::Fingerprinter;

#[test]
fn near_identical_pages_collapse_to_one_finding() {
    let fp = Fingerprinter::new();

    let hash_a = Fingerprinter::hash(200, "Home", 500, "hello world");
    let hash_b = Fingerprinter::hash(200, "Home", 520, "hello world");
    assert_eq!(hash_a, hash_b, "lengths within 100 bytes must round to the same fingerprint");

    assert!(!fp.is_duplicate(&hash_a), "first sighting is never a duplicate");
    assert!(fp.is_duplicate(&hash_b), "second sighting of the same fingerprint is a duplicate");
}

#[test]
fn distinct_content_keeps_distinct_fingerprints() {
    let fp = Fingerprinter::new();
    let hash_a = Fingerprinter::hash(200, "Home", 500, "hello world");
    let hash_b = Fingerprinter::hash(200, "Login", 500, "sign in please");

    assert!(!fp.is_duplicate(&hash_a));
    assert!(!fp.is_duplicate(&hash_b));
}
