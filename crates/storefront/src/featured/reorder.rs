use crate::prelude::*;
use serde::Serialize;
use storefront_core::featured::{Direction, EditOp};

use super::edit::{run_edit, EditFlags};
use super::Target;

#[derive(Debug, clap::Args, Serialize, Clone)]
pub struct MoveOptions {
    /// ID of the featured item to move
    #[arg(value_name = "ID")]
    pub id: String,

    /// Number of positions to move
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub steps: u32,

    #[clap(flatten)]
    pub flags: EditFlags,
}

/// One swap per step; moves past the end of the band are no-ops.
pub fn move_ops(id: &str, direction: Direction, steps: u32) -> Vec<EditOp> {
    (0..steps)
        .map(|_| match direction {
            Direction::Up => EditOp::MoveUp(id.to_string()),
            Direction::Down => EditOp::MoveDown(id.to_string()),
        })
        .collect()
}

pub fn run(options: MoveOptions, direction: Direction, target: &Target) -> Result<()> {
    log::debug!(
        "Moving {} {:?} by {} in {}",
        options.id,
        direction,
        options.steps,
        target.collection.plural()
    );

    run_edit(
        target,
        move_ops(&options.id, direction, options.steps),
        &options.flags,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_ops_repeats_direction() {
        assert_eq!(
            move_ops("shoes", Direction::Down, 2),
            vec![
                EditOp::MoveDown("shoes".to_string()),
                EditOp::MoveDown("shoes".to_string()),
            ]
        );
        assert_eq!(
            move_ops("bags", Direction::Up, 1),
            vec![EditOp::MoveUp("bags".to_string())]
        );
    }
}
