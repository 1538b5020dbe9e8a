use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read job file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON formatted input is invalid: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Job file does not match the required shape: {reason}")]
    SchemaError { reason: String },

    #[error("Failed to resolve input parameters: {0}")]
    InputError(#[from] InputError),

    #[error("Failed to resolve output parameters: {0}")]
    OutputError(#[from] OutputError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("input method was not specified")]
    MissingMethod,

    #[error("input field was not supplied: \"{0}\"")]
    MissingField(&'static str),

    #[error("input data is not a valid hex string")]
    InvalidHex,

    #[error("input data has an odd number of hex digits")]
    OddLength,

    #[error("unsupported input method: {0}")]
    UnsupportedMethod(String),

    #[error("out of memory")]
    OutOfMemory,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutputError {
    #[error("output method was not specified")]
    MissingMethod,

    #[error("output field was not supplied: \"{0}\"")]
    MissingField(&'static str),

    #[error("unsupported export method: {0}")]
    UnsupportedMethod(String),

    #[error("out of memory")]
    OutOfMemory,
}

pub type Result<T> = std::result::Result<T, LoadError>;
