pub mod api;
pub mod client;
pub mod download;
pub mod extract;

pub use api::{fetch_full_list, ListApi, PageSource, PaginationOutcome, MAX_RETRIES, PAGE_SIZE};
pub use client::create_client;
