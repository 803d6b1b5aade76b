use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use storefront_core::config::Collection;

mod config;
mod error;
mod featured;
mod prelude;
mod store;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Manage featured rankings for the storefront category and tag data files"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Directory holding categories.json and tags.json
    #[clap(long, env = "STOREFRONT_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Path to a storefront.toml configuration file
    #[clap(long, env = "STOREFRONT_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "STOREFRONT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Featured category rankings (featured band 1-7, others from 8)
    Categories(crate::featured::App),

    /// Featured tag rankings (featured band 1-8, others from 21)
    Tags(crate::featured::App),
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    init_logging(app.global.verbose);

    let settings = config::Settings::load(&app.global)?;

    match app.command {
        SubCommands::Categories(sub_app) => {
            crate::featured::run(sub_app, Collection::Categories, &settings)
        }
        SubCommands::Tags(sub_app) => crate::featured::run(sub_app, Collection::Tags, &settings),
    }
}
