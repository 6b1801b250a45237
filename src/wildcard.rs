use crate::model::{Status, WildcardBaseline, WildcardSignature};
use crate::probe::Prober;
use crate::resolver::{random_label, Resolver};

const CANARY_ATTEMPTS: usize = 3;
const CANARY_LABEL_LEN: usize = 10;

/// Draws three random canary labels under `apex`; for any that resolve LIVE,
/// records the IP and a response signature. Frozen before Phase 1 starts.
pub async fn detect(resolver: &Resolver, prober: &Prober, apex: &str) -> WildcardBaseline {
    let mut baseline = WildcardBaseline::default();

    for _ in 0..CANARY_ATTEMPTS {
        let label = random_label(CANARY_LABEL_LEN);
        let test_domain = format!("wildcard_canary_{label}.{apex}");
        let res = resolver.resolve(&test_domain).await;

        if res.status != Status::Live {
            continue;
        }
        baseline.ips.insert(res.ip.clone());

        let probe = prober.probe(&test_domain).await;
        baseline.signatures.push(WildcardSignature {
            status: probe.status,
            title: probe.title,
            content_length: probe.content_length,
            tags: probe.tags,
        });
    }

    baseline
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;

    #[test]
    fn short_circuits_on_known_wildcard_ip() {
        let mut baseline = WildcardBaseline::default();
        baseline.ips.insert("1.2.3.4".to_string());
        assert!(baseline.is_wildcard_ip("1.2.3.4"));
        assert!(!baseline.is_wildcard_ip("5.6.7.8"));
    }

    #[test]
    fn structural_match_on_length_delta() {
        let mut baseline = WildcardBaseline::default();
        baseline.signatures.push(WildcardSignature {
            status: 200,
            title: "hi".to_string(),
            content_length: 100,
            tags: AHashMap::new(),
        });
        assert!(baseline.matches(200, "hi", 100, &AHashMap::new()));
        assert!(baseline.matches(200, "different-title", 140, &AHashMap::new()));
        assert!(!baseline.matches(200, "different-title", 500, &AHashMap::new()));
    }
}
