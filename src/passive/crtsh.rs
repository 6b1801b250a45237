use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::Value;

use super::{normalize, PassiveSource};

/// Certificate-transparency log search via crt.sh.
pub struct CrtSh;

#[async_trait]
impl PassiveSource for CrtSh {
    fn name(&self) -> &'static str {
        "crt.sh"
    }

    async fn fetch(&self, domain: &str) -> anyhow::Result<HashSet<String>> {
        let url = format!(
            "https://crt.sh/?q={}&output=json",
            urlencoding::encode(&format!("%.{domain}"))
        );
        let client = reqwest::Client::new();
        let resp = client
            .get(&url)
            .timeout(std::time::Duration::from_secs(30))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Ok(HashSet::new());
        }
        let text = resp.text().await?;
        let entries: Vec<Value> = serde_json::from_str(&text)?;

        let mut out = HashSet::new();
        for entry in entries {
            if let Some(name_value) = entry.get("name_value").and_then(|v| v.as_str()) {
                for sub in name_value.split('\n') {
                    if let Some(host) = normalize(sub) {
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
