use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("column '{0}' does not exist in the input file")]
    UnknownColumn(String),
}
