pub mod batch;
pub mod checksum;
pub mod comparator;
pub mod normalizer;

pub use crate::domain::model::Gtin;
pub use crate::utils::error::Result;
