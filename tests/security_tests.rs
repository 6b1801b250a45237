use subrecon::security::{is_valid_domain, sanitize_domain, validate_targets};

#[test]
fn valid_domains_round_trip_through_sanitize() {
    for domain in ["example.com", "api.dev.example.com", "a-b.example.co.uk"] {
        assert!(is_valid_domain(domain));
        assert_eq!(sanitize_domain(domain), domain.to_lowercase());
    }
}

#[test]
fn validate_targets_drops_malformed_entries_from_untrusted_sources() {
    let raw = vec![
        "good.example.com".to_string(),
        "https://scheme.example.com/path?x=1".to_string(),
        "not a domain".to_string(),
        "*.example.com".to_string(),
    ];
    let cleaned = validate_targets(&raw);
    assert!(cleaned.contains(&"good.example.com".to_string()));
    assert!(cleaned.contains(&"scheme.example.com".to_string()));
    assert!(!cleaned.iter().any(|d| d.contains('*')));
    assert!(!cleaned.iter().any(|d| d.contains(' ')));
}
