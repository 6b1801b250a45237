use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::Value;

use super::{normalize, PassiveSource};

/// AlienVault OTX passive-DNS feed.
pub struct AlienVault;

#[async_trait]
impl PassiveSource for AlienVault {
    fn name(&self) -> &'static str {
        "alienvault"
    }

    async fn fetch(&self, domain: &str) -> anyhow::Result<HashSet<String>> {
        let url = format!("https://otx.alienvault.com/api/v1/indicators/domain/{domain}/passive_dns");
        let client = reqwest::Client::new();
        let resp = client
            .get(&url)
            .timeout(std::time::Duration::from_secs(25))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Ok(HashSet::new());
        }
        let data: Value = resp.json().await?;

        let mut out = HashSet::new();
        if let Some(entries) = data.get("passive_dns").and_then(|v| v.as_array()) {
            for entry in entries {
                if let Some(hostname) = entry.get("hostname").and_then(|v| v.as_str()) {
                    if let Some(host) = normalize(hostname) {
                        if host.ends_with(domain) {
                            out.insert(host);
                        }
                    }
                }
            }
        }
        Ok(out)
    }
}
