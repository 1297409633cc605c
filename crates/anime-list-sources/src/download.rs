use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

/// Fetch an image and persist it verbatim at `dest`, creating the parent
/// folder when absent. No retry policy here: a transport failure aborts
/// the run.
pub async fn download_image(client: &Client, image_url: &str, dest: &Path) -> Result<PathBuf> {
    let response = client
        .get(image_url)
        .send()
        .await
        .with_context(|| format!("image request failed for {}", image_url))?
        .error_for_status()
        .with_context(|| format!("image request rejected for {}", image_url))?;

    let bytes = response
        .bytes()
        .await
        .context("failed to read image body")?;

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create image folder {}", parent.display()))?;
    }
    std::fs::write(dest, &bytes)
        .with_context(|| format!("failed to write image to {}", dest.display()))?;

    info!(url = image_url, path = %dest.display(), size = bytes.len(), "Downloaded image");
    Ok(dest.to_path_buf())
}
