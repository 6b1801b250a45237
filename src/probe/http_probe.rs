use ahash::AHashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

use crate::model::ProbeResult;
use crate::waf;

static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<title>(.*?)</title>").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([a-zA-Z0-9]+)").unwrap());

const BODY_SAMPLE_LIMIT: usize = 5000;

/// HEAD+GET prober with an HTTPS-then-HTTP fallback, shared across every
/// worker via a single pooled `reqwest::Client`.
pub struct Prober {
    client: Client,
    timeout_secs: u64,
}

impl Prober {
    pub fn new(client: Client, timeout_secs: u64) -> Self {
        Self { client, timeout_secs }
    }

    /// The shared, pooled client backing this prober; reused by the JS
    /// scraper so script fetches share the same connection pool and DNS cache.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn probe(&self, host: &str) -> ProbeResult {
        let https_url = format!("https://{host}");
        let result = self.probe_url(&https_url).await;
        if result.status != 0 {
            return result;
        }
        let http_url = format!("http://{host}");
        self.probe_url(&http_url).await
    }

    async fn probe_url(&self, url: &str) -> ProbeResult {
        let timeout = std::time::Duration::from_secs(self.timeout_secs);

        let head = tokio::time::timeout(timeout, self.client.head(url).send()).await;
        let mut result = ProbeResult::default();

        let status = match head {
            Ok(Ok(resp)) => {
                result.status = resp.status().as_u16();
                result.location = resp
                    .headers()
                    .get(reqwest::header::LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                result.waf = waf::detect_waf(resp.headers());
                result.status
            }
            _ => 0,
        };

        if !matches!(status, 200 | 403 | 500) {
            return result;
        }

        let get = tokio::time::timeout(timeout, self.client.get(url).send()).await;
        if let Ok(Ok(resp)) = get {
            result.status = resp.status().as_u16();
            if result.location.is_empty() {
                result.location = resp
                    .headers()
                    .get(reqwest::header::LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
            }
            if result.waf.is_none() {
                result.waf = waf::detect_waf(resp.headers());
            }
            if let Ok(bytes) = resp.bytes().await {
                let text = String::from_utf8_lossy(&bytes);
                result.content_length = text.len();
                result.title = extract_title(&text);
                result.tags = extract_tags(&text);
                result.body = text.chars().take(BODY_SAMPLE_LIMIT).collect();
            }
        }

        result
    }
}

fn extract_title(body: &str) -> String {
    TITLE_RE
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .map(|s| s.chars().take(100).collect())
        .unwrap_or_default()
}

fn extract_tags(body: &str) -> AHashMap<String, u32> {
    let mut tags = AHashMap::new();
    for cap in TAG_RE.captures_iter(body) {
        if let Some(m) = cap.get(1) {
            *tags.entry(m.as_str().to_lowercase()).or_insert(0) += 1;
        }
    }
    tags
}
