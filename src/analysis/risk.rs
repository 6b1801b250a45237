use once_cell::sync::Lazy;
use regex::RegexSet;

static API_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([r"api\.", r"/api/", r"/v1/", r"/v2/", r"graphql"]).unwrap()
});
static AUTH_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"auth", r"login", r"signin", r"sso", r"vpn", r"admin", r"dashboard", r"portal", r"jenkins", r"jira",
    ])
    .unwrap()
});
static DEV_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([r"dev", r"stg", r"stage", r"test", r"uat", r"beta", r"internal"]).unwrap()
});

/// Pure risk-scoring function: deductions for noise (private IP, 404),
/// additions for takeover/API/auth/dev signals. Reasons are appended in a
/// fixed, deterministic order.
pub fn score(
    subdomain: &str,
    http_status: u16,
    is_private: bool,
    takeover_service: Option<&str>,
) -> (i32, Vec<String>) {
    let mut total = 0i32;
    let mut reasons = Vec::new();
    let sub_lower = subdomain.to_lowercase();

    if is_private {
        total -= 5;
        reasons.push("Private IP".to_string());
    }
    if http_status == 404 {
        total -= 3;
        reasons.push("404 Not Found".to_string());
    }

    if let Some(service) = takeover_service {
        total += 10;
        reasons.push(format!("TAKEOVER ({service})"));
    }

    if API_PATTERNS.is_match(&sub_lower) {
        total += 5;
        reasons.push("API Endpoint".to_string());
    }

    if AUTH_PATTERNS.is_match(&sub_lower) {
        total += 6;
        reasons.push("Auth/Admin".to_string());
    }

    if DEV_PATTERNS.is_match(&sub_lower) {
        total += 3;
        reasons.push("Dev/Pre-Prod environment".to_string());
    }

    (total, reasons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_ip_deducts_exactly_five() {
        let (pub_score, _) = score("x.example.com", 200, false, None);
        let (priv_score, reasons) = score("x.example.com", 200, true, None);
        assert_eq!(pub_score - priv_score, 5);
        assert!(reasons.contains(&"Private IP".to_string()));
    }

    #[test]
    fn api_subdomain_scores_at_least_five() {
        let (s, reasons) = score("api.x.com", 200, false, None);
        assert!(s >= 5);
        assert!(reasons.contains(&"API Endpoint".to_string()));
    }

    #[test]
    fn admin_subdomain_scores_exactly_six() {
        let (s, reasons) = score("admin.x.com", 200, false, None);
        assert_eq!(s, 6);
        assert!(reasons.contains(&"Auth/Admin".to_string()));
    }

    #[test]
    fn dev_subdomain_scores_exactly_three() {
        let (s, _) = score("dev.x.com", 200, false, None);
        assert_eq!(s, 3);
    }

    #[test]
    fn takeover_adds_ten_and_names_the_service() {
        let (s, reasons) = score("old.x.com", 200, false, Some("AWS S3"));
        assert!(s >= 10);
        assert!(reasons.iter().any(|r| r.contains("AWS S3")));
    }
}
