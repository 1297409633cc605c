use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;

use anime_list_config::{Config, PathManager};

use crate::output::Output;

pub fn show_config(output: &Output) -> Result<()> {
    let config = Config::load_or_default().map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;
    let paths = config.path_manager();

    let config_file = PathManager::config_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no config directory on this platform)".to_string());
    let default_url = config
        .profile
        .default_url
        .clone()
        .unwrap_or_else(|| "(not set)".to_string());

    if output.is_human() {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        table.set_header(vec![
            Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
        ]);
        table.add_row(vec![Cell::new("Config file"), Cell::new(&config_file)]);
        table.add_row(vec![Cell::new("Default profile URL"), Cell::new(&default_url)]);
        table.add_row(vec![
            Cell::new("HTTP timeout"),
            Cell::new(format!("{}s", config.http.timeout_secs)),
        ]);
        table.add_row(vec![Cell::new("User agent"), Cell::new(&config.http.user_agent)]);
        table.add_row(vec![
            Cell::new("Base directory"),
            Cell::new(paths.base_dir().display().to_string()),
        ]);
        table.add_row(vec![
            Cell::new("List data"),
            Cell::new(paths.list_data_dir().display().to_string()),
        ]);
        table.add_row(vec![
            Cell::new("Profile images"),
            Cell::new(paths.profile_images_dir().display().to_string()),
        ]);
        table.add_row(vec![
            Cell::new("Anime images"),
            Cell::new(paths.anime_images_dir().display().to_string()),
        ]);
        output.println(format!("{}", table));
    } else {
        output.print_json(&json!({
            "type": "config",
            "config_file": config_file,
            "default_profile_url": config.profile.default_url,
            "http_timeout_secs": config.http.timeout_secs,
            "user_agent": config.http.user_agent,
            "base_dir": paths.base_dir().display().to_string(),
            "list_data_dir": paths.list_data_dir().display().to_string(),
            "profile_images_dir": paths.profile_images_dir().display().to_string(),
            "anime_images_dir": paths.anime_images_dir().display().to_string(),
        }));
    }

    Ok(())
}
