use crate::utils::error::{InputError, OutputError};
use std::fmt;
use std::str::FromStr;

/// How an odd number of hex digits in `inline-data` is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HexPolicy {
    /// Drop the trailing nibble and decode the rest.
    #[default]
    Truncate,
    /// Reject the string outright.
    Strict,
}

/// Decoder selected by the `input.method` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    InlineData,
}

impl FromStr for InputMethod {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline-data" => Ok(InputMethod::InlineData),
            other => Err(InputError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Sink selected by the `output.method` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMethod {
    FileOut,
}

impl FromStr for OutputMethod {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file-out" => Ok(OutputMethod::FileOut),
            other => Err(OutputError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Byte buffer decoded from the input section, produced at most once per load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBuffer {
    data: Vec<u8>,
}

impl RawBuffer {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

/// Destination parameters captured for the downstream writer. No filesystem
/// checks happen at resolution time; the strings are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputParams {
    FileOut {
        directory_path: String,
        name_suffix: String,
    },
}

impl fmt::Display for OutputParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputParams::FileOut {
                directory_path,
                name_suffix,
            } => write!(
                f,
                "files of suffix {} to directory path {}",
                name_suffix, directory_path
            ),
        }
    }
}

/// Everything a successful load produces, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub name: Option<String>,
    pub raw_data: RawBuffer,
    pub output: OutputParams,
}
