use std::io::Write;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::external::process_runner::run_with_timeout;
use crate::security;

const NUCLEI_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnFinding {
    pub host: String,
    pub template: String,
    pub name: String,
    pub severity: String,
}

/// Invokes an already-installed `nuclei` binary against the validated target
/// list. Every target is sanitized through `security::validate_targets`
/// before it's written to the temp file nuclei reads with `-l`.
pub async fn scan_targets(nuclei_bin: &str, templates_dir: &str, targets: &[String]) -> anyhow::Result<Vec<VulnFinding>> {
    let validated = security::validate_targets(targets);
    if validated.is_empty() {
        return Ok(Vec::new());
    }

    let mut target_file = NamedTempFile::new()?;
    for target in &validated {
        writeln!(target_file, "https://{target}")?;
    }
    let path = target_file.path().to_string_lossy().to_string();

    let args = ["-l", &path, "-severity", "low,medium,high,critical", "-silent", "-json", "-t", templates_dir];
    let output = run_with_timeout(nuclei_bin, &args, NUCLEI_TIMEOUT).await?;

    let mut findings = Vec::new();
    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(line) {
            findings.push(VulnFinding {
                host: value.get("host").and_then(|v| v.as_str()).unwrap_or_default().to_string(),
                template: value.get("template-id").and_then(|v| v.as_str()).unwrap_or_default().to_string(),
                name: value
                    .get("info")
                    .and_then(|i| i.get("name"))
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string(),
                severity: value
                    .get("info")
                    .and_then(|i| i.get("severity"))
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string(),
            });
        }
    }

    Ok(findings)
}
