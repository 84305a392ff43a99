use crate::commands::{default_output_path, print_json, resolve_keep_plus, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use dialclean_core::domain::phonumber_column;
use dialclean_ingest::{read_table, write_phonumber_csv};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
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
struct NormalizeReport {
    input: String,
    column: String,
    output: String,
    total: usize,
    normalized: usize,
    unparseable: usize,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let keep_plus = resolve_keep_plus(args.plus, args.no_plus, ctx.config);
    let table = read_table(&args.file)
        .with_context(|| format!("read input file {}", args.file.display()))?;
    debug!(rows = table.rows.len(), "input file parsed");

    let phones = phonumber_column(&table, &args.column, keep_plus)?;
    let unparseable = phones.iter().filter(|phone| phone.is_empty()).count();

    let out = args
        .out
        .unwrap_or_else(|| default_output_path(&args.file, "_normalized.csv"));
    write_phonumber_csv(&out, &phones)
        .with_context(|| format!("write output file {}", out.display()))?;

    let report = NormalizeReport {
        input: args.file.display().to_string(),
        column: args.column,
        output: out.display().to_string(),
        total: phones.len(),
        normalized: phones.len() - unparseable,
        unparseable,
    };

    if ctx.json {
        return print_json(&report);
    }

    println!(
        "Normalized {} of {} rows ({} unparseable) into {}",
        report.normalized, report.total, report.unparseable, report.output
    );
    Ok(())
}
