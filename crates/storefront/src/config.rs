use crate::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use storefront_core::config::{parse_config, Collection, StorefrontConfig};
use storefront_core::featured::RenumberConfig;

const CONFIG_FILE_NAME: &str = "storefront.toml";
const DEFAULT_DATA_DIR: &str = "data";

/// Effective settings after merging CLI flags, environment and config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub verbose: bool,
    file: StorefrontConfig,
}

impl Settings {
    pub fn load(global: &crate::Global) -> Result<Self> {
        let file = match &global.config {
            Some(path) => load_explicit(path)?,
            None => discover_config(),
        };

        Ok(Self {
            data_dir: resolve_data_dir(global.data_dir.clone(), &file),
            verbose: global.verbose,
            file,
        })
    }

    pub fn bands_for(&self, collection: Collection) -> RenumberConfig {
        self.file.bands_for(collection)
    }

    pub fn data_path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }
}

/// CLI/env value wins over the config file, which wins over `./data`.
fn resolve_data_dir(cli: Option<PathBuf>, file: &StorefrontConfig) -> PathBuf {
    cli.or_else(|| file.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// A config file named on the command line must load.
fn load_explicit(path: &Path) -> Result<StorefrontConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config = parse_config(&contents).map_err(Error::InvalidConfig)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs_next::config_dir() {
        candidates.push(dir.join("storefront").join("config.toml"));
    }
    candidates
}

fn discover_config() -> StorefrontConfig {
    config_candidates()
        .iter()
        .find_map(|path| try_load_config_from_path(path))
        .unwrap_or_else(|| {
            log::debug!("No storefront config found. Using built-in bands.");
            StorefrontConfig::default()
        })
}

/// Implicitly discovered files fall back to defaults on any failure.
fn try_load_config_from_path(path: &Path) -> Option<StorefrontConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, path.display());
            None
        }
    }
}
