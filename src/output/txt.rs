use std::path::Path;

use crate::model::Finding;

/// Writes one domain per line, no header, in the order given.
pub fn write_txt(path: &Path, findings: &[Finding]) -> anyhow::Result<()> {
    let mut lines = String::new();
    for f in findings {
        lines.push_str(&f.domain);
        lines.push('\n');
    }
    std::fs::write(path, lines)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Finding;

    fn sample(domain: &str) -> Finding {
        Finding {
            domain: domain.to_string(),
            ip: "1.2.3.4".to_string(),
            status: "LIVE".to_string(),
            rtype: "A".to_string(),
            cname: String::new(),
            provider: "-".to_string(),
            http_status: 200,
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

    #[test]
    fn one_domain_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_txt(&path, &[sample("a.example.com"), sample("b.example.com")]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "a.example.com\nb.example.com\n");
    }
}
