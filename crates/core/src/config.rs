//! Collection presets and configuration file parsing
//!
//! The shell reads the configuration file; this module only turns its
//! contents into typed settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::featured::RenumberConfig;

/// The catalog collections that carry featured rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Categories,
    Tags,
}

impl Collection {
    pub fn default_config(&self) -> RenumberConfig {
        match self {
            Collection::Categories => RenumberConfig::CATEGORIES,
            Collection::Tags => RenumberConfig::TAGS,
        }
    }

    /// Name of the JSON data file inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Categories => "categories.json",
            Collection::Tags => "tags.json",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Collection::Categories => "category",
            Collection::Tags => "tag",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Collection::Categories => "categories",
            Collection::Tags => "tags",
        }
    }
}

/// Contents of a `storefront.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorefrontConfig {
    pub data_dir: Option<PathBuf>,
    pub categories: Option<RenumberConfig>,
    pub tags: Option<RenumberConfig>,
}

impl StorefrontConfig {
    /// Bands for `collection`, falling back to the built-in preset.
    pub fn bands_for(&self, collection: Collection) -> RenumberConfig {
        let custom = match collection {
            Collection::Categories => self.categories,
            Collection::Tags => self.tags,
        };
        custom.unwrap_or_else(|| collection.default_config())
    }
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(contents: &str) -> Result<StorefrontConfig, String> {
    let config = toml::from_str::<StorefrontConfig>(contents)
        .map_err(|e| format!("Failed to parse storefront config: {}", e))?;

    for (section, bands) in [("categories", &config.categories), ("tags", &config.tags)] {
        if let Some(bands) = bands {
            bands
                .validate()
                .map_err(|e| format!("Invalid [{}] bands: {}", section, e))?;
        }
    }

    Ok(config)
}
