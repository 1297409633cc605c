use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use commands::{clear, collect, config, view};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "animelister")]
#[command(about = "Collect a MyAnimeList profile's anime list and browse it offline")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Also write logs to this file (rotated daily)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect a profile's anime list into local JSON
    #[command(long_about = "Fetch the profile page, download the profile picture, walk the \
paginated list endpoint until it is exhausted, and save the accumulated entries as a JSON \
snapshot under the storage directory.")]
    Collect {
        /// Profile URL (falls back to profile.default_url from the config file)
        url: Option<String>,
    },
    /// Render a collected list as a table
    #[command(long_about = "Read the JSON snapshot collected for a profile and render one row \
per entry with its cached image path and fields. Purely offline: no network access.")]
    View {
        /// Profile name (falls back to the name resolved from profile.default_url)
        profile: Option<String>,
    },
    /// Delete collected data
    #[command(long_about = "Delete collected snapshots and/or downloaded images. Use --data for \
list snapshots, --images for the image directories, or --all for both.")]
    Clear {
        /// Clear snapshots and images
        #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["data", "images"])]
        all: bool,

        /// Clear collected list snapshots
        #[arg(long, action = ArgAction::SetTrue)]
        data: bool,

        /// Clear downloaded images
        #[arg(long, action = ArgAction::SetTrue)]
        images: bool,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the resolved configuration and storage paths
    Show,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Collect { url } => collect::run_collect(url, &output).await,
        Commands::View { profile } => view::run_view(profile, &output),
        Commands::Clear { all, data, images } => clear::run_clear(all, data, images, &output),
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => config::show_config(&output),
        },
    }
}
