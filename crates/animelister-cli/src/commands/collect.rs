use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use std::io::IsTerminal;
use std::time::Duration;

use anime_list_config::Config;
use anime_list_core::Collector;

use crate::output::Output;

pub async fn run_collect(url: Option<String>, output: &Output) -> Result<()> {
    tracing::debug!("Collect command started");

    let config = Config::load_or_default().map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;

    let profile_url = url
        .or_else(|| config.profile.default_url.clone())
        .ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "no profile URL given; pass one as an argument or set profile.default_url in the config file"
            )
        })?;

    let paths = config.path_manager();
    let collector = Collector::new(&config, paths)
        .map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;

    let spinner = if output.is_human() && !output.is_quiet() && std::io::stdout().is_terminal() {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        pb.set_message(format!("Collecting {}...", profile_url));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = collector.run(&profile_url).await;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let report = result.map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;

    let profile_name = report
        .metadata
        .profile_name
        .clone()
        .unwrap_or_else(|| profile_url.clone());

    if output.is_human() {
        output.success(format!(
            "Collected {} entries for {}",
            report.entries, profile_name
        ));
        output.info(format!(
            "  {} requests, {} retried",
            report.requests, report.retries
        ));
        if report.budget_exhausted {
            output.warn("Retry budget exhausted; the list may be incomplete");
        }
        match &report.list_file {
            Some(path) => output.info(format!("  List data: {}", path.display())),
            None => output.warn("No entries collected; no snapshot file was written"),
        }
        output.info(format!("  Profile image: {}", report.image_file.display()));
    } else {
        output.print_json(&json!({
            "type": "report",
            "profile": profile_name,
            "entries": report.entries,
            "requests": report.requests,
            "retries": report.retries,
            "budget_exhausted": report.budget_exhausted,
            "list_file": report.list_file.as_ref().map(|p| p.display().to_string()),
            "image_file": report.image_file.display().to_string(),
            "metadata": report.metadata,
        }));
    }

    Ok(())
}
