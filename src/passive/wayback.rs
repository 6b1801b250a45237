use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::Value;

use super::PassiveSource;

/// Web-archive CDX source: every URL the Wayback Machine has crawled under
/// `*.domain`, reduced to its hostname.
pub struct Wayback;

#[async_trait]
impl PassiveSource for Wayback {
    fn name(&self) -> &'static str {
        "wayback"
    }

    async fn fetch(&self, domain: &str) -> anyhow::Result<HashSet<String>> {
        let url = format!("http://web.archive.org/cdx/search/cdx?url=*.{domain}/*&output=json&collapse=urlkey");
        let client = reqwest::Client::new();
        let resp = client
            .get(&url)
            .timeout(std::time::Duration::from_secs(60))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Ok(HashSet::new());
        }
        let data: Vec<Value> = resp.json().await?;

        let mut out = HashSet::new();
        for entry in data {
            let Some(row) = entry.as_array() else { continue };
            if row.len() < 3 {
                continue;
            }
            let Some(original_url) = row[2].as_str() else { continue };
            let Some((_, rest)) = original_url.split_once("://") else { continue };
            let host = rest.split('/').next().unwrap_or("").to_lowercase();
            if host.ends_with(domain) && host != domain {
                out.insert(host);
            }
        }
        Ok(out)
    }
}
