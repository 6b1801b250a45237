use std::path::Path;

use crate::model::Finding;

/// Writes `findings` as a pretty-printed, 2-space-indented JSON array, field
/// order matching `Finding`'s declaration.
pub fn write_json(path: &Path, findings: &[Finding]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(findings)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Finding;

    #[test]
    fn writes_valid_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let finding = Finding {
            domain: "api.example.com".to_string(),
            ip: "1.2.3.4".to_string(),
            status: "LIVE".to_string(),
            rtype: "A".to_string(),
            cname: String::new(),
            provider: "-".to_string(),
            http_status: 200,
            waf: String::new(),
            title: "Home".to_string(),
            content_length: 100,
            location: String::new(),
            score: 5,
            risk_reasons: vec!["API Endpoint".to_string()],
            is_takeover: false,
            takeover_service: String::new(),
        };
        write_json(&path, &[finding]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"domain\": \"api.example.com\""));
        let parsed: Vec<Finding> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
