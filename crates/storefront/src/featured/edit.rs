use crate::prelude::{eprint, println, *};
use crate::store::RecordStore;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use storefront_core::featured::{
    calculate_stats, format_renumber_comparison, renumber_comparison, EditOp, EditSession,
    RenumberChange, RenumberConfig, SessionError, Stats,
};
use storefront_core::records::{apply_rankings, project, CatalogRecord};

use super::Target;

/// Flags shared by every command that writes to the store.
#[derive(Debug, clap::Args, Serialize, Clone, Default)]
pub struct EditFlags {
    /// Apply without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Show the changes without saving them
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
    NoChanges,
    DryRun,
    Cancelled,
    Committed,
}

#[derive(Debug, Serialize)]
pub struct EditReport {
    pub collection: &'static str,
    pub outcome: EditOutcome,
    pub changes: Vec<RenumberChange>,
    pub stats: Stats,
}

/// Loaded collection with all edits applied and validated, awaiting commit.
#[derive(Debug)]
pub struct PreparedEdit {
    records: Vec<CatalogRecord>,
    session: EditSession,
}

impl PreparedEdit {
    pub fn has_changes(&self) -> bool {
        self.session.has_changes()
    }

    pub fn changes(&self) -> Vec<RenumberChange> {
        renumber_comparison(self.session.original(), self.session.working())
    }

    pub fn stats(&self) -> Stats {
        calculate_stats(self.session.working(), self.session.config())
    }

    /// Persist the working copy through `store`.
    pub fn commit<S: RecordStore + ?Sized>(mut self, store: &S) -> Result<Vec<CatalogRecord>> {
        let committed = self.session.confirm()?;
        let merged = apply_rankings(&self.records, &committed)?;
        store.save(&merged)?;
        Ok(merged)
    }

    pub fn cancel(mut self) {
        // Only fails when already terminal, which a prepared edit never is.
        let _ = self.session.cancel();
    }
}

/// Load the collection, apply `ops` and validate the result.
///
/// Edits that change nothing skip validation so that no-op moves on a
/// collection with pre-existing problems still succeed.
pub fn prepare_edits<S: RecordStore + ?Sized>(
    store: &S,
    bands: RenumberConfig,
    ops: &[EditOp],
) -> Result<PreparedEdit> {
    let records = store.load()?;

    let mut session = EditSession::new(bands);
    session.begin(project(&records))?;

    for op in ops {
        log::debug!("Applying {:?}", op);
        session.apply(op)?;
    }

    if session.has_changes() {
        match session.propose() {
            Ok(_) => {}
            Err(SessionError::Rejected(errors)) => return Err(Error::ValidationFailed(errors).into()),
            Err(err) => return Err(err.into()),
        }
    }

    Ok(PreparedEdit { records, session })
}

/// Drive a prepared edit to completion: show, confirm, save.
pub fn finish<S: RecordStore + ?Sized>(
    prepared: PreparedEdit,
    store: &S,
    flags: &EditFlags,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Result<EditOutcome> {
    if !prepared.has_changes() {
        prepared.cancel();
        return Ok(EditOutcome::NoChanges);
    }

    if flags.dry_run {
        prepared.cancel();
        return Ok(EditOutcome::DryRun);
    }

    if !flags.yes && !confirm(&format!("Save changes to {}?", store.describe())) {
        log::info!("Edit cancelled by user");
        prepared.cancel();
        return Ok(EditOutcome::Cancelled);
    }

    prepared.commit(store)?;
    Ok(EditOutcome::Committed)
}

/// Shared entry point for renumber, move and toggle commands.
pub fn run_edit(target: &Target, ops: Vec<EditOp>, flags: &EditFlags) -> Result<()> {
    let prepared = prepare_edits(&target.store, target.bands, &ops)?;
    let changes = prepared.changes();
    let stats = prepared.stats();

    if !flags.json {
        println!("{}", format_comparison(&changes));
    }

    let outcome = finish(prepared, &target.store, flags, &mut confirm)?;

    if flags.json {
        let report = EditReport {
            collection: target.collection.plural(),
            outcome,
            changes,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let message = match outcome {
        EditOutcome::NoChanges => "Nothing to save.".yellow(),
        EditOutcome::DryRun => "Dry run: no changes saved.".yellow(),
        EditOutcome::Cancelled => "Cancelled. No changes saved.".yellow(),
        EditOutcome::Committed => format!("Saved {}.", target.store.describe()).green(),
    };
    println!("\n{message}");

    Ok(())
}

fn format_comparison(changes: &[RenumberChange]) -> String {
    let text = format_renumber_comparison(changes);
    let mut lines = text.lines();
    match lines.next() {
        Some(header) => {
            let rest: Vec<&str> = lines.collect();
            if rest.is_empty() {
                header.bright_cyan().to_string()
            } else {
                format!("{}\n{}", header.bright_cyan().bold(), rest.join("\n"))
            }
        }
        None => String::new(),
    }
}

fn confirm(prompt: &str) -> bool {
    eprint!("{prompt} (y/N): ");
    io::stderr().flush().ok();

    let mut input = String::new();
    io::stdin().read_line(&mut input).ok();

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
