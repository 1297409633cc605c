use std::fs;
use std::path::Path;

use color_eyre::Result;

use anime_list_config::Config;

use crate::output::Output;

pub fn run_clear(all: bool, data: bool, images: bool, output: &Output) -> Result<()> {
    let config = Config::load_or_default().map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;
    let paths = config.path_manager();

    if all {
        clear_dir(&paths.list_data_dir(), "list data", output)?;
        clear_dir(&paths.images_dir(), "images", output)?;
        output.success("All collected data cleared");
        return Ok(());
    }

    let mut cleared_anything = false;

    if data {
        clear_dir(&paths.list_data_dir(), "list data", output)?;
        cleared_anything = true;
    }

    if images {
        clear_dir(&paths.images_dir(), "images", output)?;
        cleared_anything = true;
    }

    if !cleared_anything {
        output.warn("No clear option specified. Use --data, --images, or --all");
        output.println("\nExample: animelister clear --data");
    }

    Ok(())
}

fn clear_dir(dir: &Path, label: &str, output: &Output) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| {
            color_eyre::eyre::eyre!("failed to remove {} at {}: {}", label, dir.display(), e)
        })?;
        output.success(format!("Cleared {}: {}", label, dir.display()));
    } else {
        output.info(format!("No {} found to clear", label));
    }
    Ok(())
}
