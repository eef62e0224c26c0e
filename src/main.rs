mod auth;
mod error;
mod ledger;
mod models;
mod report;
mod run;
mod settings;
mod store;
mod ui;

use anyhow::{Context, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let settings = settings::load_settings();
    let data_dir = get_data_dir(&settings)?;
    let store = store::Store::open(&data_dir)
        .with_context(|| format!("Failed to open data directory: {}", data_dir.display()))?;

    match args.len() {
        1 => run::as_tui(&store, settings.currency),
        2.. => run::as_cli(&args, &store, &settings.currency),
        _ => {
            eprintln!("Usage: fintrack [command]");
            Ok(())
        }
    }
}

fn get_data_dir(settings: &settings::Settings) -> Result<PathBuf> {
    if let Some(ref dir) = settings.data_dir {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = directories::ProjectDirs::from("com", "fintrack", "FinTrack")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
