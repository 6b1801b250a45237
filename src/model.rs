use serde::{Deserialize, Serialize};

/// Status of a candidate after resolution and probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Live,
    Dead,
    Wildcard,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Live => "LIVE",
            Status::Dead => "DEAD",
            Status::Wildcard => "WILDCARD",
        }
    }
}

/// DNS record type behind a resolved candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    A,
    Cname,
    Unknown,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Cname => "CNAME",
            RecordType::Unknown => "-",
        }
    }
}

/// A discovered hostname, not yet validated or processed.
pub type Candidate = String;

/// Outcome of resolving a single candidate, mirroring the shape later enriched
/// into a `Finding` once the probe and analysis stages run.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub domain: String,
    pub ip: String,
    pub status: Status,
    pub rtype: RecordType,
    pub cname: String,
    pub provider: String,
}

impl Resolution {
    pub fn dead(domain: String) -> Self {
        Self {
            domain,
            ip: "-".to_string(),
            status: Status::Dead,
            rtype: RecordType::Unknown,
            cname: String::new(),
            provider: "-".to_string(),
        }
    }
}

/// A fully processed, live candidate that survived every analysis filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub domain: String,
    pub ip: String,
    pub status: String,
    pub rtype: String,
    pub cname: String,
    pub provider: String,
    pub http_status: u16,
    pub waf: String,
    pub title: String,
    pub content_length: usize,
    pub location: String,
    pub score: i32,
    pub risk_reasons: Vec<String>,
    pub is_takeover: bool,
    pub takeover_service: String,
}

impl Finding {
    pub fn from_resolution(res: &Resolution) -> Self {
        Self {
            domain: res.domain.clone(),
            ip: res.ip.clone(),
            status: res.status.as_str().to_string(),
            rtype: res.rtype.as_str().to_string(),
            cname: res.cname.clone(),
            provider: res.provider.clone(),
            http_status: 0,
            waf: String::new(),
            title: String::new(),
            content_length: 0,
            location: String::new(),
            score: 0,
            risk_reasons: Vec::new(),
            is_takeover: false,
            takeover_service: String::new(),
        }
    }
}

/// Outcome of a single HTTP probe against a host, before analysis.
#[derive(Debug, Clone, Default)]
pub struct ProbeResult {
    pub status: u16,
    pub waf: Option<String>,
    pub title: String,
    pub content_length: usize,
    pub location: String,
    pub tags: ahash::AHashMap<String, u32>,
    pub body: String,
}

/// A single recorded response shape captured during wildcard baselining.
#[derive(Debug, Clone)]
pub struct WildcardSignature {
    pub status: u16,
    pub title: String,
    pub content_length: usize,
    pub tags: ahash::AHashMap<String, u32>,
}

/// The frozen result of Phase 0: every IP and response shape a wildcard DNS
/// zone returned for random canary labels.
#[derive(Debug, Clone, Default)]
pub struct WildcardBaseline {
    pub ips: ahash::AHashSet<String>,
    pub signatures: Vec<WildcardSignature>,
}

impl WildcardBaseline {
    pub fn is_wildcard_ip(&self, ip: &str) -> bool {
        self.ips.contains(ip)
    }

    /// Structural match per the signature-diff rule: same status and either
    /// identical title, near-identical length, or a low tag-histogram delta.
    pub fn matches(&self, status: u16, title: &str, content_length: usize, tags: &ahash::AHashMap<String, u32>) -> bool {
        for sig in &self.signatures {
            if sig.status != status {
                continue;
            }
            if sig.title == title {
                return true;
            }
            if (sig.content_length as i64 - content_length as i64).unsigned_abs() < 50 {
                return true;
            }
            let total: u32 = sig.tags.values().sum();
            if total > 0 {
                let mut diff = 0i64;
                for (tag, count) in &sig.tags {
                    let other = tags.get(tag).copied().unwrap_or(0);
                    diff += (*count as i64 - other as i64).abs();
                }
                if (diff as f64 / total as f64) < 0.10 {
                    return true;
                }
            }
        }
        false
    }
}
