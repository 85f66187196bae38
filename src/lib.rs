pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::BatchConfig;
pub use crate::core::batch::{BatchChecker, BatchOptions, BatchReport};
pub use crate::core::checksum::{is_valid_gtin, is_valid_gtin_u64};
pub use crate::core::comparator::{
    compare, equal, greater_or_equal, greater_than, less_or_equal, less_than, not_equal, to_text,
};
pub use crate::core::normalizer::{from_text, normalize};
pub use crate::domain::model::{Gtin, GtinWidth, MAX_GTIN_LEN};
pub use crate::domain::ports::ExternalType;
pub use crate::utils::error::{GtinError, Result};
