use std::path::PathBuf;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use anime_list_config::{Config, PathManager};
use anime_list_models::ProfileMetadata;
use anime_list_sources::{
    client::{create_client, fetch_profile_page},
    download::download_image,
    extract::{extract_list_link, extract_profile_picture, resolve_profile_name},
    fetch_full_list, ListApi,
};

use crate::store::SnapshotStore;

/// What one collect run produced: the metadata threaded through every
/// stage plus the pagination statistics and file artifacts.
#[derive(Debug)]
pub struct CollectReport {
    pub metadata: ProfileMetadata,
    pub entries: usize,
    pub requests: u32,
    pub retries: u32,
    pub budget_exhausted: bool,
    /// Absent when zero entries were collected (no file is written then).
    pub list_file: Option<PathBuf>,
    pub image_file: PathBuf,
}

/// Runs the whole collection pipeline for one profile URL: resolve the
/// profile name, fetch the profile page, extract the picture and list
/// links, download the picture, walk the paginated list endpoint, and
/// persist the snapshot.
pub struct Collector {
    client: Client,
    paths: PathManager,
}

impl Collector {
    pub fn new(config: &Config, paths: PathManager) -> Result<Self> {
        Ok(Self {
            client: create_client(&config.http)?,
            paths,
        })
    }

    pub async fn run(&self, profile_url: &str) -> Result<CollectReport> {
        let mut metadata = ProfileMetadata::new(profile_url);

        // Resolution failure halts the whole run; this is a pure string
        // operation with no retries.
        let profile_name = resolve_profile_name(profile_url)
            .context("could not resolve a profile name from the URL")?;
        metadata.profile_name = Some(profile_name.clone());
        info!(profile = %profile_name, "Resolved profile name");

        self.paths.ensure_directories()?;

        let (status_code, html) = fetch_profile_page(&self.client, profile_url).await?;
        metadata.status_code = Some(status_code);

        // Both signatures are required; either one missing fails the run
        // with no partial output.
        let picture_url = extract_profile_picture(&html)?;
        metadata.picture_url = Some(picture_url.clone());
        let list_url = extract_list_link(&html)?;
        metadata.list_url = Some(list_url);

        let image_file = download_image(
            &self.client,
            &picture_url,
            &self.paths.profile_image_file(&profile_name),
        )
        .await?;

        let api = ListApi::new(self.client.clone());
        let outcome = fetch_full_list(&api, &profile_name).await;

        let store = SnapshotStore::new(&self.paths);
        let list_file = store.save(&profile_name, &outcome.snapshot)?;

        metadata.set_message(if outcome.budget_exhausted {
            format!(
                "retry budget exhausted; kept {} entries from {} requests",
                outcome.snapshot.len(),
                outcome.requests
            )
        } else {
            format!(
                "collected {} entries in {} requests",
                outcome.snapshot.len(),
                outcome.requests
            )
        });

        Ok(CollectReport {
            entries: outcome.snapshot.len(),
            requests: outcome.requests,
            retries: outcome.retries,
            budget_exhausted: outcome.budget_exhausted,
            list_file,
            image_file,
            metadata,
        })
    }
}
