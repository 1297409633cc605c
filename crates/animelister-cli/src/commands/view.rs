use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;

use anime_list_config::Config;
use anime_list_core::{ImageStore, SnapshotStore};
use anime_list_models::{AiringStatus, ListEntry, WatchStatus};
use anime_list_sources::extract::resolve_profile_name;

use crate::output::Output;

pub fn run_view(profile: Option<String>, output: &Output) -> Result<()> {
    let config = Config::load_or_default().map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;

    let profile_name = match profile {
        Some(name) => name,
        None => {
            let url = config.profile.default_url.clone().ok_or_else(|| {
                color_eyre::eyre::eyre!(
                    "no profile given; pass a name or set profile.default_url in the config file"
                )
            })?;
            resolve_profile_name(&url).map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?
        }
    };

    let paths = config.path_manager();
    let store = SnapshotStore::new(&paths);
    let snapshot = store
        .load(&profile_name)
        .map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;
    let images = ImageStore::new(&paths);

    // Resolve every image up front; a single missing image fails the view.
    let mut rows = Vec::with_capacity(snapshot.len());
    for (index, entry) in snapshot.iter().enumerate() {
        let title = entry.display_title().ok_or_else(|| {
            color_eyre::eyre::eyre!("entry {} has no title, cannot resolve its image", index + 1)
        })?;
        let image = images
            .lookup(title)
            .map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;
        rows.push((index + 1, title.to_string(), image, entry));
    }

    if output.is_human() {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        table.set_header(vec![
            Cell::new("#").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Status").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Score").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Eps").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Airing").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Site Score").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Image").add_attribute(comfy_table::Attribute::Bold),
        ]);
        for (index, title, image, entry) in &rows {
            table.add_row(vec![
                Cell::new(index.to_string()),
                Cell::new(title),
                Cell::new(status_label(entry)),
                Cell::new(display_or_dash(entry.score.map(|s| s.to_string()))),
                Cell::new(display_or_dash(
                    entry.num_watched_episodes.map(|n| n.to_string()),
                )),
                Cell::new(airing_label(entry)),
                Cell::new(display_or_dash(
                    entry.anime_score_val.map(|s| format!("{:.2}", s)),
                )),
                Cell::new(image.display().to_string()),
            ]);
        }
        output.println(format!("{}", table));
        output.info(format!(
            "{} entries for {}",
            rows.len(),
            profile_name
        ));
    } else {
        let entries: Vec<serde_json::Value> = rows
            .iter()
            .map(|(index, title, image, entry)| {
                json!({
                    "index": index,
                    "title": title,
                    "image": image.display().to_string(),
                    "entry": entry,
                })
            })
            .collect();
        output.print_json(&json!({
            "type": "list",
            "profile": profile_name,
            "entries": entries,
        }));
    }

    Ok(())
}

fn status_label(entry: &ListEntry) -> String {
    match entry.status {
        Some(code) => match WatchStatus::from_code(code) {
            Some(status) => status.to_string(),
            None => format!("status {}", code),
        },
        None => "-".to_string(),
    }
}

fn airing_label(entry: &ListEntry) -> String {
    match entry.anime_airing_status {
        Some(code) => match AiringStatus::from_code(code) {
            Some(status) => status.to_string(),
            None => format!("code {}", code),
        },
        None => "-".to_string(),
    }
}

fn display_or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
