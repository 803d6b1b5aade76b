use crate::prelude::{println, *};
use crate::store::RecordStore;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use storefront_core::featured::RankableItem;
use storefront_core::ordering::sort_for_display;
use storefront_core::records::project;

use super::Target;

#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct ListOptions {
    /// Only show featured items
    #[arg(long)]
    pub featured: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub collection: &'static str,
    pub total: usize,
    pub items: Vec<RankableItem>,
}

/// Load the collection and return it in display order.
pub fn list_data(target: &Target, featured_only: bool) -> Result<ListOutput> {
    let records = target.store.load()?;
    let total = records.len();

    let items: Vec<RankableItem> = sort_for_display(&project(&records))
        .into_iter()
        .filter(|item| item.featured || !featured_only)
        .collect();

    Ok(ListOutput {
        collection: target.collection.plural(),
        total,
        items,
    })
}

pub fn run(options: ListOptions, target: &Target) -> Result<()> {
    let data = list_data(target, options.featured)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!(
        "Showing {} of {} {}:\n",
        data.items.len(),
        data.total,
        data.collection
    );

    if data.items.is_empty() {
        println!("{}", f!("No {} found.", data.collection).yellow());
        return Ok(());
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row!["#", "Name", "ID", "Featured", "Priority"]);

    for (idx, item) in data.items.iter().enumerate() {
        let featured = if item.featured { "★" } else { "" };
        table.add_row(prettytable::row![
            idx + 1,
            &item.name,
            &item.id,
            featured,
            item.priority
        ]);
    }

    table.printstd();

    Ok(())
}
