use anyhow::Result;
use dialclean_config::AppConfig;
use dialclean_store::StopListStore;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod columns;
pub mod completions;
pub mod normalize;
pub mod scrub;
pub mod stoplist;

pub struct Context<'a> {
    pub store: &'a StopListStore,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Default output path: the input file's stem plus a suffix, next to the
/// input.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}{suffix}"))
}

/// Resolves the plus-prefix toggle: explicit flags win, config supplies the
/// default.
pub fn resolve_keep_plus(plus: bool, no_plus: bool, config: &AppConfig) -> bool {
    if plus {
        true
    } else if no_plus {
        false
    } else {
        config.keep_plus
    }
}
