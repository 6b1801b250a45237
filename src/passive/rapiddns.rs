use std::collections::HashSet;

use async_trait::async_trait;
use regex::Regex;

use super::{normalize, PassiveSource};

/// HTML-table scraper over RapidDNS's subdomain listing page.
pub struct RapidDns;

#[async_trait]
impl PassiveSource for RapidDns {
    fn name(&self) -> &'static str {
        "rapiddns"
    }

    async fn fetch(&self, domain: &str) -> anyhow::Result<HashSet<String>> {
        let url = format!("https://rapiddns.io/subdomain/{domain}?full=1");
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

        let pattern = Regex::new(&format!(r"[\w.-]+\.{}", regex::escape(domain)))?;
        let mut out = HashSet::new();
        for m in pattern.find_iter(&text) {
            if let Some(host) = normalize(m.as_str()) {
                out.insert(host);
            }
        }
        Ok(out)
    }
}
