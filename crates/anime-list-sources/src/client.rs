use std::time::Duration;

use anyhow::{bail, Context, Result};
use anime_list_config::HttpConfig;
use reqwest::Client;

/// Build the HTTP client shared by the whole collect run: profile page,
/// profile picture, and every list page go through one connection pool.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("failed to build HTTP client")
}

/// Fetch the profile page HTML. Any non-success status aborts the whole
/// run; the observed status code is returned for the run metadata.
pub async fn fetch_profile_page(client: &Client, url: &str) -> Result<(u16, String)> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("profile page request failed for {}", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("non-success status code {} for {}", status, url);
    }

    let body = response
        .text()
        .await
        .context("failed to read profile page body")?;
    Ok((status.as_u16(), body))
}
