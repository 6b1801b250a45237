use std::collections::HashSet;
use std::time::Duration;

use crate::external::process_runner::run_with_timeout;
use crate::resolver::Resolver;
use crate::security;

const AXFR_TIMEOUT: Duration = Duration::from_secs(10);

/// Attempts a DNS zone transfer against each of the apex's nameservers.
/// Only succeeds against misconfigured servers; every failure is swallowed
/// and treated as "not vulnerable".
pub async fn attempt_transfer(resolver: &Resolver, apex: &str) -> HashSet<String> {
    let mut subdomains = HashSet::new();

    if !security::is_valid_domain(apex) {
        return subdomains;
    }

    let Ok(ns_lookup) = resolver.ns_lookup(apex).await else {
        return subdomains;
    };

    for ns in ns_lookup {
        let ns_resolution = resolver.resolve(&ns).await;
        let ns_ip = ns_resolution.ip;
        if ns_ip.is_empty() || ns_ip == "-" {
            continue;
        }
        // SECURITY: validated domain and a resolver-returned IP only; never
        // interpolate raw user input into the subprocess argument list.
        if let Ok(output) = run_with_timeout("nslookup", &["-type=AXFR", apex, &ns_ip], AXFR_TIMEOUT).await {
            for line in output.lines() {
                if let Some(candidate) = line.split_whitespace().next() {
                    let candidate = candidate.trim_end_matches('.').to_lowercase();
                    if candidate.ends_with(apex) && security::is_valid_domain(&candidate) {
                        subdomains.insert(candidate);
                    }
                }
            }
        }
    }

    subdomains
}
