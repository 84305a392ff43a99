mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{columns, completions, normalize, scrub, stoplist, Context};
use crate::error::{exit_code_for, report_error};
use dialclean_config as config;
use dialclean_store::{paths, StopListStore};

#[derive(Debug, Parser)]
#[command(name = "dialclean", version, about = "dialclean CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Path of the persisted stop list (overrides config and the default).
    #[arg(long, global = true)]
    stop_list: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the column names of an input file
    Columns(columns::ColumnsArgs),
    /// Normalize a phone column into a phonumber CSV
    Normalize(normalize::NormalizeArgs),
    /// Normalize and drop rows present in the stop list
    Scrub(scrub::ScrubArgs),
    #[command(subcommand)]
    Stoplist(stoplist::StoplistCommand),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        stop_list,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path).with_context(|| "load config")?;

            let stop_list_path =
                paths::resolve_stop_list_path(stop_list.or_else(|| app_config.stop_list_path.clone()))
                    .with_context(|| "resolve stop list path")?;
            if verbose {
                debug!(path = %stop_list_path.display(), "stop list path resolved");
            }
            let store = StopListStore::open(stop_list_path);

            let ctx = Context {
                store: &store,
                json,
                config: &app_config,
            };

            match command {
                Command::Columns(args) => columns::list_columns(&ctx, args),
                Command::Normalize(args) => normalize::normalize(&ctx, args),
                Command::Scrub(args) => scrub::scrub(&ctx, args),
                Command::Stoplist(cmd) => match cmd {
                    stoplist::StoplistCommand::Upload(args) => stoplist::upload(&ctx, args),
                    stoplist::StoplistCommand::Show(args) => stoplist::show(&ctx, args),
                    stoplist::StoplistCommand::Path => stoplist::path(&ctx),
                },
                Command::Completions(_) => {
                    unreachable!("completions command handled before store initialization")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
