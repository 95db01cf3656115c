//! Client side of `--health-check`: queries a running server's `/health`.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8000;

const TIMEOUT: Duration = Duration::from_secs(1);

/// Port from `WORDHINT_PORT`, or the default when unset or unparsable.
pub fn port_from_env() -> u16 {
    std::env::var("WORDHINT_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Returns `true` when `/health` at `addr` answers with a success status.
pub async fn check_health(addr: SocketAddr) -> bool {
    let url = format!("http://{}/health", addr);

    let client = match reqwest::Client::builder().timeout(TIMEOUT).build() {
        Ok(client) => client,
        Err(_) => return false,
    };

    match client.get(&url).send().await {
        Ok(res) => res.status().is_success(),
        Err(e) => {
            tracing::debug!(error = %e, url = %url, "Health check request failed");
            false
        }
    }
}
