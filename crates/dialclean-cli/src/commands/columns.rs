use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use dialclean_ingest::read_table;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ColumnsArgs {
    pub file: PathBuf,
}

pub fn list_columns(ctx: &Context<'_>, args: ColumnsArgs) -> Result<()> {
    let table = read_table(&args.file)
        .with_context(|| format!("read input file {}", args.file.display()))?;

    if ctx.json {
        return print_json(&table.headers);
    }

    for header in &table.headers {
        println!("{header}");
    }
    Ok(())
}
