use std::collections::HashSet;

use async_trait::async_trait;

use super::{normalize, PassiveSource};

/// Passive-DNS aggregator via HackerTarget's host-search API.
pub struct HackerTarget;

#[async_trait]
impl PassiveSource for HackerTarget {
    fn name(&self) -> &'static str {
        "hackertarget"
    }

    async fn fetch(&self, domain: &str) -> anyhow::Result<HashSet<String>> {
        let url = format!("https://api.hackertarget.com/hostsearch/?q={domain}");
        let client = reqwest::Client::new();
        let resp = client
            .get(&url)
            .timeout(std::time::Duration::from_secs(25))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Ok(HashSet::new());
        }
        let text = resp.text().await?;

        let mut out = HashSet::new();
        for line in text.lines() {
            if let Some((host, _)) = line.split_once(',') {
                if let Some(host) = normalize(host) {
                    if host.ends_with(domain) {
                        out.insert(host);
                    }
                }
            }
        }
        Ok(out)
    }
}
