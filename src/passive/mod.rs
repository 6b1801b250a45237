pub mod alienvault;
pub mod crtsh;
pub mod hackertarget;
pub mod rapiddns;
pub mod threatminer;
pub mod wayback;

use std::collections::HashSet;

use async_trait::async_trait;

/// A single remote index queried for hostnames ending in a given domain.
/// Implementations issue one request, never retry, and never panic on a
/// transport or parse failure -- that failure is returned as `Err`.
#[async_trait]
pub trait PassiveSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, domain: &str) -> anyhow::Result<HashSet<String>>;
}

/// The full set of passive sources wired up for a run.
pub fn all_sources() -> Vec<Box<dyn PassiveSource>> {
    vec![
        Box::new(crtsh::CrtSh),
        Box::new(hackertarget::HackerTarget),
        Box::new(rapiddns::RapidDns),
        Box::new(alienvault::AlienVault),
        Box::new(wayback::Wayback),
        Box::new(threatminer::ThreatMiner),
    ]
}

/// Lowercase a hostname and drop wildcard labels (`*.example.com` -> dropped).
pub(crate) fn normalize(host: &str) -> Option<String> {
    let host = host.trim().to_lowercase();
    if host.is_empty() || host.contains('*') {
        return None;
    }
    Some(host)
}
