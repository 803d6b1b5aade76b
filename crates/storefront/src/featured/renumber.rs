use crate::prelude::*;
use serde::Serialize;
use storefront_core::featured::EditOp;

use super::edit::{run_edit, EditFlags};
use super::Target;

#[derive(Debug, clap::Args, Serialize, Clone)]
pub struct RenumberOptions {
    #[clap(flatten)]
    pub flags: EditFlags,
}

/// Rewrite both bands into contiguous runs.
pub fn run(options: RenumberOptions, target: &Target) -> Result<()> {
    run_edit(target, vec![EditOp::Renumber], &options.flags)
}
