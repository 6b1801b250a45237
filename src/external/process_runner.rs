use std::time::Duration;
use tokio::process::Command;

/// Runs `cmd args...` with a hard timeout, returning stdout on success.
/// Callers MUST validate every argument via `crate::security` before calling.
pub async fn run_with_timeout(cmd: &str, args: &[&str], timeout: Duration) -> anyhow::Result<String> {
    let fut = Command::new(cmd).args(args).output();
    let output = tokio::time::timeout(timeout, fut).await??;
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
