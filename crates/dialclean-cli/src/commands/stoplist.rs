use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use dialclean_ingest::read_table;
use dialclean_store::stop_list_from_table;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum StoplistCommand {
    /// Replace the persisted stop list with the first column of a file.
    Upload(UploadArgs),
    /// Print the current stop-list entries.
    Show(ShowArgs),
    /// Print the resolved stop-list location.
    Path,
}

#[derive(Debug, Args)]
pub struct UploadArgs {
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct UploadReport {
    path: String,
    entries: usize,
}

#[derive(Debug, Serialize)]
struct ShowReport {
    path: String,
    count: usize,
    entries: Vec<String>,
}

pub fn upload(ctx: &Context<'_>, args: UploadArgs) -> Result<()> {
    let table = read_table(&args.file)
        .with_context(|| format!("read stop list file {}", args.file.display()))?;

    // A rejected upload leaves the prior list untouched; replace only runs
    // once the table has been validated and cleaned.
    let entries = stop_list_from_table(&table)
        .with_context(|| format!("clean stop list file {}", args.file.display()))?;
    ctx.store
        .replace(&entries)
        .with_context(|| format!("write stop list {}", ctx.store.path().display()))?;

    let report = UploadReport {
        path: ctx.store.path().display().to_string(),
        entries: entries.len(),
    };

    if ctx.json {
        return print_json(&report);
    }

    println!("Stop list replaced: {} entries in {}", report.entries, report.path);
    Ok(())
}

pub fn show(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let mut entries = ctx.store.load();
    let count = entries.len();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if ctx.json {
        let report = ShowReport {
            path: ctx.store.path().display().to_string(),
            count,
            entries,
        };
        return print_json(&report);
    }

    for entry in &entries {
        println!("{entry}");
    }
    if entries.len() < count {
        println!("... {} more", count - entries.len());
    }
    Ok(())
}

pub fn path(ctx: &Context<'_>) -> Result<()> {
    if ctx.json {
        let report = serde_json::json!({ "path": ctx.store.path().display().to_string() });
        return print_json(&report);
    }
    println!("{}", ctx.store.path().display());
    Ok(())
}
