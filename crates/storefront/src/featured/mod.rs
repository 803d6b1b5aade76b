use crate::config::Settings;
use crate::prelude::{println, *};
use crate::store::JsonFileStore;
use storefront_core::config::Collection;
use storefront_core::featured::{Direction, RenumberConfig};

pub mod edit;
pub mod list;
pub mod renumber;
pub mod reorder;
pub mod stats;
pub mod toggle;

/// Featured ranking operations for one collection
#[derive(Debug, clap::Parser)]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List items in display order
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Show band usage and priority gaps
    #[clap(name = "stats")]
    Stats(stats::StatsOptions),

    /// Check the stored collection against its priority bands
    #[clap(name = "validate")]
    Validate(stats::StatsOptions),

    /// Close priority gaps in both bands
    #[clap(name = "renumber")]
    Renumber(renumber::RenumberOptions),

    /// Move a featured item towards the top of the featured band
    #[clap(name = "move-up")]
    MoveUp(reorder::MoveOptions),

    /// Move a featured item towards the bottom of the featured band
    #[clap(name = "move-down")]
    MoveDown(reorder::MoveOptions),

    /// Add an item to the end of the featured band
    #[clap(name = "feature")]
    Feature(toggle::ToggleOptions),

    /// Remove an item from the featured band
    #[clap(name = "unfeature")]
    Unfeature(toggle::ToggleOptions),
}

/// Everything a command needs to know about the collection it works on.
#[derive(Debug, Clone)]
pub struct Target {
    pub collection: Collection,
    pub bands: RenumberConfig,
    pub store: JsonFileStore,
    pub verbose: bool,
}

impl Target {
    pub fn new(collection: Collection, settings: &Settings) -> Self {
        Self {
            collection,
            bands: settings.bands_for(collection),
            store: JsonFileStore::new(settings.data_path(collection)),
            verbose: settings.verbose,
        }
    }
}

pub fn run(app: App, collection: Collection, settings: &Settings) -> Result<()> {
    let target = Target::new(collection, settings);

    if target.verbose {
        println!(
            "{} bands: featured {}-{}, others from {}",
            collection.plural(),
            target.bands.featured_start,
            target.bands.featured_end,
            target.bands.non_featured_start
        );
        println!();
    }

    match app.command {
        Commands::List(options) => list::run(options, &target),
        Commands::Stats(options) => stats::run(options, &target),
        Commands::Validate(options) => stats::validate(options, &target),
        Commands::Renumber(options) => renumber::run(options, &target),
        Commands::MoveUp(options) => reorder::run(options, Direction::Up, &target),
        Commands::MoveDown(options) => reorder::run(options, Direction::Down, &target),
        Commands::Feature(options) => toggle::run(options, true, &target),
        Commands::Unfeature(options) => toggle::run(options, false, &target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn settings(dir: &TempDir) -> Settings {
        let config = dir.path().join("storefront.toml");
        fs::write(&config, "").unwrap();

        Settings::load(&crate::Global {
            data_dir: Some(dir.path().to_path_buf()),
            config: Some(config),
            verbose: true,
        })
        .unwrap()
    }

    #[test]
    fn test_run_dispatches_with_verbose_output() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("categories.json"),
            r#"[{ "id": "shoes", "name": "Shoes", "featured": true, "priority": 1 }]"#,
        )
        .unwrap();

        let app = App::parse_from(["categories", "list", "--json"]);
        assert!(run(app, Collection::Categories, &settings(&dir)).is_ok());
    }

    #[test]
    fn test_run_reports_missing_data_file() {
        let dir = TempDir::new().unwrap();

        let app = App::parse_from(["tags", "stats"]);
        let err = run(app, Collection::Tags, &settings(&dir)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
