use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use anime_list_models::{ListEntry, ListSnapshot};

// List endpoint base URL
const API_BASE: &str = "https://myanimelist.net";

/// Fixed pagination step of the list endpoint.
pub const PAGE_SIZE: u64 = 300;

/// Transient-failure budget for one whole pagination run. The counter is
/// never reset after a successful page, so the budget is cumulative across
/// the run, not per-page.
pub const MAX_RETRIES: u32 = 3;

/// One page of the offset-paginated list endpoint.
///
/// The reqwest-backed implementation lives in [`ListApi`]; tests drive the
/// pagination loop with scripted in-memory sources instead.
#[async_trait]
pub trait PageSource {
    async fn fetch_page(&self, profile_name: &str, offset: u64) -> Result<Vec<ListEntry>>;
}

pub struct ListApi {
    client: Client,
    base_url: String,
}

impl ListApi {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: API_BASE.to_string(),
        }
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn page_url(&self, profile_name: &str, offset: u64) -> String {
        format!(
            "{}/animelist/{}/load.json?offset={}",
            self.base_url, profile_name, offset
        )
    }
}

#[async_trait]
impl PageSource for ListApi {
    async fn fetch_page(&self, profile_name: &str, offset: u64) -> Result<Vec<ListEntry>> {
        let url = self.page_url(profile_name, offset);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("list page request failed for {}", url))?
            .error_for_status()
            .with_context(|| format!("list page request rejected for {}", url))?;

        // Deserializing through ListEntry is the allow-list projection;
        // a body that fails to parse counts as a transient failure.
        let page: Vec<ListEntry> = response
            .json()
            .await
            .with_context(|| format!("failed to parse list page body from {}", url))?;
        Ok(page)
    }
}

/// What one full pagination run produced.
#[derive(Debug)]
pub struct PaginationOutcome {
    pub snapshot: ListSnapshot,
    /// Total requests issued, retries included.
    pub requests: u32,
    /// Transient failures absorbed before the loop ended.
    pub retries: u32,
    /// True when pagination stopped because the retry budget ran out
    /// rather than because an empty page was returned.
    pub budget_exhausted: bool,
}

/// Walk the offset-paginated list endpoint until an empty page is returned,
/// accumulating projected entries in page order.
///
/// A transient failure (connection error, timeout, non-2xx, unparseable
/// body) retries the same offset while fewer than [`MAX_RETRIES`] failures
/// have been absorbed across the whole run; one more failure after that
/// stops pagination with whatever has accumulated. This never fails the
/// run: partial data is a valid outcome.
pub async fn fetch_full_list<S: PageSource + ?Sized>(
    source: &S,
    profile_name: &str,
) -> PaginationOutcome {
    let mut snapshot = ListSnapshot::new();
    let mut offset: u64 = 0;
    let mut retries: u32 = 0;
    let mut requests: u32 = 0;
    let mut budget_exhausted = false;

    loop {
        requests += 1;
        match source.fetch_page(profile_name, offset).await {
            Ok(page) => {
                if page.is_empty() {
                    debug!(offset, "Empty page, list exhausted");
                    break;
                }
                debug!(offset, items = page.len(), "Fetched list page");
                snapshot.extend_page(page);
                offset += PAGE_SIZE;
            }
            Err(e) => {
                if retries < MAX_RETRIES {
                    retries += 1;
                    warn!(
                        offset,
                        attempt = retries,
                        max = MAX_RETRIES,
                        "List page fetch failed, retrying same offset: {:#}",
                        e
                    );
                } else {
                    warn!(
                        offset,
                        "Maximum retries reached, stopping pagination with {} entries: {:#}",
                        snapshot.len(),
                        e
                    );
                    budget_exhausted = true;
                    break;
                }
            }
        }
    }

    PaginationOutcome {
        snapshot,
        requests,
        retries,
        budget_exhausted,
    }
}
