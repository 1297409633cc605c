use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

/// Derive the canonical profile identifier from a profile URL: the text
/// after the last `/`, or the whole string when no `/` exists. No decoding
/// and no trimming beyond the segment boundary.
pub fn resolve_profile_name(url: &str) -> Result<String> {
    let segment = url.rsplit('/').next().unwrap_or(url);
    if segment.is_empty() {
        return Err(anyhow!("no profile name found in URL {}", url));
    }
    Ok(segment.to_string())
}

/// Locate the profile-picture URL on the profile page. The picture is the
/// lone lazy-loaded image, its real source sits in `data-src`.
pub fn extract_profile_picture(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("img.lazyload").map_err(|e| anyhow!("invalid selector: {}", e))?;

    document
        .select(&selector)
        .find_map(|img| img.value().attr("data-src"))
        .map(str::to_string)
        .ok_or_else(|| anyhow!("profile picture not found or data-src attribute missing"))
}

/// Locate the link to the full list page on the profile page.
pub fn extract_list_link(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a.btn-profile-submit.fl-l")
        .map_err(|e| anyhow!("invalid selector: {}", e))?;

    document
        .select(&selector)
        .find_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .ok_or_else(|| anyhow!("anime list link not found on profile page"))
}
