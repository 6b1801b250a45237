use reqwest::header::HeaderMap;

/// Header/cookie-key signatures for common CDN/WAF products. `Via` is handled
/// separately since it only counts as CloudFront when it substring-matches.
const SIGNATURES: &[(&str, &[&str])] = &[
    ("Cloudflare", &["cf-ray", "__cfduid", "cf-cache-status"]),
    ("Akamai", &["x-akamai-transformed", "akamai-origin-hop"]),
    ("Imperva", &["x-iinfo", "incap-ses"]),
    ("F5 BIG-IP", &["bigipserver"]),
    ("Sucuri", &["x-sucuri-id"]),
    ("AWS CloudFront", &["x-amz-cf-id"]),
];

/// Linear scan of header/cookie keys against a fixed signature table, with a
/// special case for CloudFront's `Via` header.
pub fn detect_waf(headers: &HeaderMap) -> Option<String> {
    if let Some(via) = headers.get("via").and_then(|v| v.to_str().ok()) {
        if via.to_lowercase().contains("cloudfront") {
            return Some("AWS CloudFront".to_string());
        }
    }

    for (name, keys) in SIGNATURES {
        for key in *keys {
            if headers.contains_key(*key) {
                return Some((*name).to_string());
            }
            if let Some(cookie) = headers.get("set-cookie").and_then(|v| v.to_str().ok()) {
                if cookie.to_lowercase().contains(key) {
                    return Some((*name).to_string());
                }
            }
        }
    }

    None
}
