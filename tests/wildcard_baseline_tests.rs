use ahash::AHashMap;
use subrecon::model::{WildcardBaseline, WildcardSignature};

#[test]
fn wildcard_ip_short_circuits_without_signature_check() {
    let mut baseline = WildcardBaseline::default();
    baseline.ips.insert("1.2.3.4".to_string());

    assert!(baseline.is_wildcard_ip("1.2.3.4"));
    assert!(!baseline.is_wildcard_ip("9.9.9.9"));
}

#[test]
fn structural_match_drops_near_identical_responses() {
    let mut baseline = WildcardBaseline::default();
    baseline.signatures.push(WildcardSignature {
        status: 200,
        title: "hi".to_string(),
        content_length: 100,
        tags: AHashMap::new(),
    });

    // Length within 50 bytes of the baseline is a match even with a
    // different title.
    assert!(baseline.matches(200, "different", 140, &AHashMap::new()));
    // Far enough apart in both title and length: not a match.
    assert!(!baseline.matches(200, "different", 500, &AHashMap::new()));
    // Different status never matches.
    assert!(!baseline.matches(404, "hi", 100, &AHashMap::new()));
}
