use std::path::Path;

use crate::model::Finding;

const HEADER: [&str; 15] = [
    "Domain", "IP", "Status", "Type", "CNAME", "Provider", "HTTP Status", "WAF", "Title",
    "Content Length", "Location", "Risk Score", "Risk Reasons", "Takeover", "Takeover Service",
];

/// Writes `findings` as RFC 4180 CSV with the fixed header above.
pub fn write_csv(path: &Path, findings: &[Finding]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(HEADER)?;

    for f in findings {
        writer.write_record(&[
            f.domain.clone(),
            f.ip.clone(),
            f.status.clone(),
            f.rtype.clone(),
            f.cname.clone(),
            f.provider.clone(),
            f.http_status.to_string(),
            f.waf.clone(),
            f.title.clone(),
            f.content_length.to_string(),
            f.location.clone(),
            f.score.to_string(),
            f.risk_reasons.join(", "),
            f.is_takeover.to_string(),
            f.takeover_service.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
