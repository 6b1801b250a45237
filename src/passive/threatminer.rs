use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::Value;

use super::PassiveSource;

/// ThreatMiner's domain passive-DNS endpoint (`rt=5` -> subdomains).
pub struct ThreatMiner;

#[async_trait]
impl PassiveSource for ThreatMiner {
    fn name(&self) -> &'static str {
        "threatminer"
    }

    async fn fetch(&self, domain: &str) -> anyhow::Result<HashSet<String>> {
        let url = format!("https://api.threatminer.org/v2/domain.php?q={domain}&rt=5");
        let client = reqwest::Client::new();
        let resp = client
            .get(&url)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Ok(HashSet::new());
        }
        let data: Value = resp.json().await?;

        let mut out = HashSet::new();
        if data.get("status_code").and_then(|v| v.as_str()) == Some("200") {
            if let Some(results) = data.get("results").and_then(|v| v.as_array()) {
                for sub in results {
                    if let Some(sub) = sub.as_str() {
                        let sub = sub.to_lowercase();
                        if sub.ends_with(domain) && sub != domain {
                            out.insert(sub);
                        }
                    }
                }
            }
        }
        Ok(out)
    }
}
