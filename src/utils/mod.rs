//! Utility modules

pub mod csv;
pub mod errors;
pub mod logging;

pub use errors::{ApiError, Result};
