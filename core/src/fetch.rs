//! Remote downloads: the range list and the latency-tester binary.
//!
//! Plain unauthenticated GETs with no retries. No request timeout is
//! configured; the pipeline blocks for as long as the server does.

use std::path::Path;

use anyhow::{Context, Result};
use edgesift_common::network::range::{self, CidrRange};
use tracing::debug;

/// Builds the HTTP client shared by both downloads.
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("edgesift/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to create HTTP client")
}

/// Downloads the range list and parses it into ordered scan targets.
///
/// Transport failures and non-success HTTP statuses are errors. An empty
/// parse result is returned as-is; the caller decides whether that is
/// fatal.
pub async fn fetch_ranges(client: &reqwest::Client, url: &str) -> Result<Vec<CidrRange>> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("range list request to {url} failed"))?
        .error_for_status()
        .with_context(|| format!("range list request to {url} rejected"))?;

    let body = resp
        .text()
        .await
        .context("failed to read range list body")?;

    debug!("Range list body is {} bytes", body.len());
    Ok(range::parse_range_list(&body))
}

/// Downloads `url` into `dest`, overwriting any existing file.
pub async fn download_file(client: &reqwest::Client, url: &str, dest: &Path) -> Result<()> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("download request to {url} failed"))?
        .error_for_status()
        .with_context(|| format!("download request to {url} rejected"))?;

    let content = resp
        .bytes()
        .await
        .with_context(|| format!("failed to read download body from {url}"))?;

    tokio::fs::write(dest, &content)
        .await
        .with_context(|| format!("failed to write {}", dest.display()))?;

    debug!("Downloaded {} bytes to {}", content.len(), dest.display());
    Ok(())
}
