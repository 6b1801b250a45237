use std::collections::HashSet;

use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

const MAX_SCRIPTS: usize = 20;

/// Fetches the homepage and its `<script src>` assets, then regex-extracts
/// every hostname ending in `apex` from homepage + script bodies.
pub async fn scrape(client: &Client, apex: &str) -> HashSet<String> {
    let mut found = HashSet::new();

    let base = format!("https://{apex}");
    let home_html = match fetch_text(client, &base).await {
        Some(text) => text,
        None => match fetch_text(client, &format!("http://{apex}")).await {
            Some(text) => text,
            None => return found,
        },
    };

    let host_re = match Regex::new(&format!(r"(?:[a-zA-Z0-9][a-zA-Z0-9-]{{0,61}}[a-zA-Z0-9]\.)+{}", regex::escape(apex))) {
        Ok(re) => re,
        Err(_) => return found,
    };

    extract_hosts(&host_re, &home_html, apex, &mut found);

    let document = Html::parse_document(&home_html);
    let Ok(selector) = Selector::parse("script") else { return found };

    let script_urls: Vec<String> = document
        .select(&selector)
        .filter_map(|el| el.value().attr("src"))
        .filter_map(|src| normalize_script_url(&base, src))
        .take(MAX_SCRIPTS)
        .collect();

    let fetches = script_urls.iter().map(|url| fetch_text(client, url));
    let script_bodies = futures::future::join_all(fetches).await;
    for js_text in script_bodies.into_iter().flatten() {
        extract_hosts(&host_re, &js_text, apex, &mut found);
    }

    found
}

fn normalize_script_url(base: &str, src: &str) -> Option<String> {
    if let Some(stripped) = src.strip_prefix("//") {
        return Some(format!("https://{stripped}"));
    }
    if src.starts_with("http") {
        return Some(src.to_string());
    }
    Url::parse(base).ok().and_then(|b| b.join(src).ok()).map(|u| u.to_string())
}

fn extract_hosts(re: &Regex, text: &str, apex: &str, out: &mut HashSet<String>) {
    for m in re.find_iter(text) {
        let host = m.as_str().to_lowercase();
        let host = host.trim_matches('.');
        if host.ends_with(apex) && host != apex {
            out.insert(host.to_string());
        }
    }
}

async fn fetch_text(client: &Client, url: &str) -> Option<String> {
    let resp = client
        .get(url)
        .timeout(std::time::Duration::from_secs(5))
        .send()
        .await
        .ok()?;
    if resp.status() != reqwest::StatusCode::OK {
        return None;
    }
    resp.text().await.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_protocol_relative_and_root_relative_urls() {
        let base = "https://example.com";
        assert_eq!(normalize_script_url(base, "//cdn.example.com/a.js"), Some("https://cdn.example.com/a.js".to_string()));
        assert_eq!(normalize_script_url(base, "/static/a.js"), Some("https://example.com/static/a.js".to_string()));
        assert_eq!(normalize_script_url(base, "https://x.com/a.js"), Some("https://x.com/a.js".to_string()));
    }

    #[test]
    fn extracts_hostnames_ending_in_apex() {
        let re = Regex::new(r"(?:[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]\.)+example\.com").unwrap();
        let mut out = HashSet::new();
        extract_hosts(&re, "fetch('https://api.example.com/v1')", "example.com", &mut out);
        assert!(out.contains("api.example.com"));
    }
}
