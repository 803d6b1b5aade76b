use crate::prelude::{eprintln, println, *};
use crate::store::RecordStore;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use storefront_core::featured::{
    calculate_stats, featured_in_order, format_gap_report, format_reorder_list, format_summary,
    validate_featured_operation, RankableItem, RenumberConfig, Stats, ValidationResult,
};
use storefront_core::records::project;

use super::Target;

#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct StatsOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsOutput {
    pub collection: &'static str,
    pub bands: RenumberConfig,
    pub stats: Stats,
    pub featured: Vec<RankableItem>,
}

pub fn stats_data(target: &Target) -> Result<StatsOutput> {
    let items = project(&target.store.load()?);

    Ok(StatsOutput {
        collection: target.collection.plural(),
        bands: target.bands,
        stats: calculate_stats(&items, &target.bands),
        featured: featured_in_order(&items),
    })
}

pub fn run(options: StatsOptions, target: &Target) -> Result<()> {
    let data = stats_data(target)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!(
        "{}\n",
        f!("{} SUMMARY", data.collection.to_uppercase())
            .bright_cyan()
            .bold()
    );
    println!("{}", format_summary(&data.stats, &data.bands, data.collection));

    if data.stats.has_priority_gaps {
        println!("\n{}", format_gap_report(&data.stats).yellow());
        println!(
            "\nRun {} to close the gaps.",
            f!("storefront {} renumber", data.collection).cyan()
        );
    }

    println!("\n{}", "Featured order:".green());
    println!("{}", format_reorder_list(&data.featured, None));

    Ok(())
}

pub fn validate_data(target: &Target) -> Result<ValidationResult> {
    let items = project(&target.store.load()?);
    Ok(validate_featured_operation(&items, &target.bands))
}

/// Validate the stored collection; invalid data makes the command fail.
pub fn validate(options: StatsOptions, target: &Target) -> Result<()> {
    let verdict = validate_data(target)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else if verdict.success {
        println!(
            "{}",
            f!("{} is valid.", target.store.describe()).green()
        );
    } else {
        for error in &verdict.errors {
            eprintln!("{} {}", "✗".red(), error);
        }
    }

    if verdict.success {
        Ok(())
    } else {
        Err(Error::ValidationFailed(verdict.errors).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::featured::list::list_data;
    use crate::store::JsonFileStore;
    use serde_json::json;
    use std::fs;
    use storefront_core::config::Collection;
    use tempfile::TempDir;

    fn target(dir: &TempDir, records: serde_json::Value) -> Target {
        let path = dir.path().join("tags.json");
        fs::write(&path, records.to_string()).unwrap();

        Target {
            collection: Collection::Tags,
            bands: RenumberConfig::TAGS,
            store: JsonFileStore::new(path),
            verbose: false,
        }
    }

    fn gapped() -> serde_json::Value {
        json!([
            { "id": "vegan", "name": "Vegan", "featured": true, "priority": 2 },
            { "id": "local", "name": "Local", "featured": true, "priority": 1 },
            { "id": "sale", "name": "Sale", "featured": false, "priority": 25 }
        ])
    }

    #[test]
    fn test_stats_data() {
        let dir = TempDir::new().unwrap();
        let data = stats_data(&target(&dir, gapped())).unwrap();

        assert_eq!(data.collection, "tags");
        assert_eq!(data.stats.featured_count, 2);
        assert!(data.stats.has_priority_gaps);
        assert_eq!(data.featured[0].id, "local");
    }

    #[test]
    fn test_validate_accepts_gaps() {
        let dir = TempDir::new().unwrap();
        let target = target(&dir, gapped());

        assert!(validate_data(&target).unwrap().success);
        assert!(validate(StatsOptions { json: true }, &target).is_ok());
    }

    #[test]
    fn test_validate_fails_on_out_of_band() {
        let dir = TempDir::new().unwrap();
        let target = target(
            &dir,
            json!([{ "id": "sale", "name": "Sale", "featured": false, "priority": 3 }]),
        );

        let err = validate(StatsOptions { json: true }, &target).unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_list_data_orders_and_filters() {
        let dir = TempDir::new().unwrap();
        let target = target(&dir, gapped());

        let all = list_data(&target, false).unwrap();
        let ids: Vec<&str> = all.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["local", "vegan", "sale"]);

        let featured = list_data(&target, true).unwrap();
        assert_eq!(featured.total, 3);
        assert_eq!(featured.items.len(), 2);
    }
}
