pub mod input;
pub mod loader;
pub mod output;

pub use crate::domain::model::{HexPolicy, LoadResult, OutputParams, RawBuffer};
pub use crate::utils::error::Result;
