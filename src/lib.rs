pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::loader::{load, load_with_policy};
pub use crate::domain::model::{
    HexPolicy, InputMethod, LoadResult, OutputMethod, OutputParams, RawBuffer,
};
pub use crate::utils::error::{InputError, LoadError, OutputError, Result};
