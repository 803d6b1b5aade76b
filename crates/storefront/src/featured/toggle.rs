use crate::prelude::*;
use serde::Serialize;
use storefront_core::featured::EditOp;

use super::edit::{run_edit, EditFlags};
use super::Target;

#[derive(Debug, clap::Args, Serialize, Clone)]
pub struct ToggleOptions {
    /// ID of the item to feature or unfeature
    #[arg(value_name = "ID")]
    pub id: String,

    #[clap(flatten)]
    pub flags: EditFlags,
}

pub fn run(options: ToggleOptions, feature: bool, target: &Target) -> Result<()> {
    log::debug!(
        "{} {} {}",
        if feature { "Featuring" } else { "Unfeaturing" },
        target.collection.singular(),
        options.id
    );

    let op = if feature {
        EditOp::Feature(options.id)
    } else {
        EditOp::Unfeature(options.id)
    };

    run_edit(target, vec![op], &options.flags)
}
