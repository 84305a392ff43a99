use anyhow::Error;
use dialclean_config::ConfigError;
use dialclean_core::CoreError;
use dialclean_ingest::IngestError;
use dialclean_store::{StoreError, StoreErrorKind};
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(ingest_err) = cause.downcast_ref::<IngestError>() {
            return ExitCode::from(ingest_exit_code(ingest_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::EmptyUpload | StoreErrorKind::InvalidDataPath => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir | StoreErrorKind::Csv | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidStopListPath
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn ingest_exit_code(err: &IngestError) -> u8 {
    match err {
        IngestError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => EXIT_NOT_FOUND,
        IngestError::Io(_) => EXIT_FAILURE,
        IngestError::Csv(_) | IngestError::Spreadsheet(_) => EXIT_INVALID_INPUT,
    }
}
