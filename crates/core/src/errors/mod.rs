//! Error types and validation helpers for credkit operations

mod builders;
mod conversions;
mod display;
mod types;
mod validation;

pub use types::{Error, Result};
pub use validation::Validate;
