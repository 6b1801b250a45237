use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Builds the single `reqwest::Client` shared by the Prober and JS scraper
/// across an entire run, so connection pooling and TLS session resumption
/// carry over between candidates. TLS verification is disabled: targets
/// turned up by enumeration are frequently mis-configured or self-signed.
pub fn build_client(timeout_secs: u64) -> anyhow::Result<Client> {
    let client = ClientBuilder::new()
        .tcp_nodelay(true)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(5))
        .gzip(true)
        .brotli(true)
        .use_rustls_tls()
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_client_with_timeout() {
        let client = build_client(5);
        assert!(client.is_ok());
    }
}
