use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use rand::Rng;

use crate::model::{RecordType, Resolution, Status};

/// CNAME/PTR substring fingerprints for CDN and cloud-provider tagging.
const CDN_SIGNATURES: &[(&str, &str)] = &[
    ("cloudflare", "CDN: Cloudflare"),
    ("cloudfront", "CDN: AWS CloudFront"),
    ("akamai", "CDN: Akamai"),
    ("fastly", "CDN: Fastly"),
    ("azureedge", "CDN: Azure"),
    ("googleusercontent", "Cloud: Google"),
    ("herokuapp", "Cloud: Heroku"),
    ("vercel", "CDN: Vercel"),
    ("netlify", "CDN: Netlify"),
    ("incapsula", "CDN: Imperva"),
    ("sucuri", "CDN: Sucuri"),
    ("awsglobalaccelerator", "CDN: AWS Global Accelerator"),
];

/// Async DNS resolver shared across all workers; cloning is cheap (the
/// underlying `TokioAsyncResolver` is itself reference-counted).
#[derive(Clone)]
pub struct Resolver {
    inner: TokioAsyncResolver,
}

impl Resolver {
    pub fn new(nameservers: &[String]) -> anyhow::Result<Self> {
        let ips: Vec<std::net::IpAddr> = nameservers
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        let group = NameServerConfigGroup::from_ips_clear(&ips, 53, true);
        let config = ResolverConfig::from_parts(None, vec![], group);
        let inner = TokioAsyncResolver::tokio(config, ResolverOpts::default());
        Ok(Self { inner })
    }

    /// Resolve a hostname: CNAME first (retaining the chain), falling back to
    /// a direct A lookup, then DEAD on both failures.
    pub async fn resolve(&self, domain: &str) -> Resolution {
        let mut res = Resolution::dead(domain.to_string());

        if let Ok(lookup) = self.inner.cname_lookup(domain).await {
            if let Some(cname_record) = lookup.iter().next() {
                let cname = cname_record.to_string().trim_end_matches('.').to_string();
                res.rtype = RecordType::Cname;
                res.status = Status::Live;
                res.cname = cname.clone();

                if let Ok(ip_lookup) = self.inner.ipv4_lookup(&cname).await {
                    if let Some(ip) = ip_lookup.iter().next() {
                        res.ip = ip.0.to_string();
                    }
                }
                res.provider = self.detect_provider(&res.ip, &res.cname).await;
                return res;
            }
        }

        if let Ok(lookup) = self.inner.ipv4_lookup(domain).await {
            if let Some(ip) = lookup.iter().next() {
                res.ip = ip.0.to_string();
                res.rtype = RecordType::A;
                res.status = Status::Live;
                res.provider = self.detect_provider(&res.ip, "").await;
            }
        }

        res
    }

    /// Tag a resolved candidate's CDN/cloud provider by CNAME match, falling
    /// back to reverse-DNS, falling back to the PTR's two-label suffix.
    pub async fn detect_provider(&self, ip: &str, cname: &str) -> String {
        if !cname.is_empty() {
            let lower = cname.to_lowercase();
            for (sig, name) in CDN_SIGNATURES {
                if lower.contains(sig) {
                    return name.to_string();
                }
            }
        }

        if !ip.is_empty() && ip != "-" {
            if let Ok(addr) = ip.parse::<std::net::IpAddr>() {
                if let Ok(lookup) = self.inner.reverse_lookup(addr).await {
                    if let Some(ptr) = lookup.iter().next() {
                        let ptr_name = ptr.to_string().trim_end_matches('.').to_lowercase();
                        for (sig, name) in CDN_SIGNATURES {
                            if ptr_name.contains(sig) {
                                return name.to_string();
                            }
                        }
                        let parts: Vec<&str> = ptr_name.split('.').collect();
                        if parts.len() > 2 {
                            return format!("Host: {}.{}", parts[parts.len() - 2], parts[parts.len() - 1]);
                        }
                    }
                }
            }
        }

        "-".to_string()
    }

    /// Nameservers authoritative for `domain`, as hostnames.
    pub async fn ns_lookup(&self, domain: &str) -> anyhow::Result<Vec<String>> {
        let lookup = self.inner.ns_lookup(domain).await?;
        Ok(lookup.iter().map(|ns| ns.to_string().trim_end_matches('.').to_string()).collect())
    }

    /// Resolve a random 10-character label under `apex`; LIVE indicates a
    /// wildcard DNS zone.
    pub async fn check_wildcard(&self, apex: &str) -> Resolution {
        let label = random_label(10);
        let test_domain = format!("{label}.{apex}");
        self.resolve(&test_domain).await
    }
}

/// A random lowercase-alphanumeric label of the given length, used for
/// wildcard canaries and as a generically "unpredictable" subdomain probe.
pub fn random_label(len: usize) -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_label_has_requested_length() {
        let label = random_label(10);
        assert_eq!(label.len(), 10);
        assert!(label.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
