use crate::commands::{default_output_path, print_json, resolve_keep_plus, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use dialclean_core::domain::phonumber_column;
use dialclean_core::filter::apply_stop_list;
use dialclean_ingest::{read_table, write_phonumber_csv};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ScrubArgs {
    pub file: PathBuf,
    /// Name of the column holding the phone numbers.
    #[arg(long)]
    pub column: String,
    /// Emit +1XXXXXXXXXX (overrides the config default).
    #[arg(long, conflicts_with = "no_plus")]
    pub plus: bool,
    /// Emit 1XXXXXXXXXX without the plus prefix.
    #[arg(long)]
    pub no_plus: bool,
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ScrubReport {
    input: String,
    column: String,
    output: String,
    total: usize,
    kept: usize,
    removed: usize,
    stop_entries: usize,
    stop_list_empty: bool,
}

pub fn scrub(ctx: &Context<'_>, args: ScrubArgs) -> Result<()> {
    let keep_plus = resolve_keep_plus(args.plus, args.no_plus, ctx.config);
    let table = read_table(&args.file)
        .with_context(|| format!("read input file {}", args.file.display()))?;

    let phones = phonumber_column(&table, &args.column, keep_plus)?;

    let stop = ctx.store.load();
    debug!(entries = stop.len(), "stop list loaded");
    // Zero removed rows means something different when the list itself is
    // empty; surface that to the operator rather than a silent no-op.
    if stop.is_empty() {
        eprintln!(
            "warning: stop list at {} is empty, no rows will be removed",
            ctx.store.path().display()
        );
    }

    let (kept, removed) = apply_stop_list(&phones, &stop);

    let out = args
        .out
        .unwrap_or_else(|| default_output_path(&args.file, "_scrubbed.csv"));
    write_phonumber_csv(&out, &kept)
        .with_context(|| format!("write output file {}", out.display()))?;

    let report = ScrubReport {
        input: args.file.display().to_string(),
        column: args.column,
        output: out.display().to_string(),
        total: phones.len(),
        kept: kept.len(),
        removed,
        stop_entries: stop.len(),
        stop_list_empty: stop.is_empty(),
    };

    if ctx.json {
        return print_json(&report);
    }

    println!(
        "Kept {} of {} rows ({} removed by stop list) into {}",
        report.kept, report.total, report.removed, report.output
    );
    Ok(())
}
