//! Shared types

mod errors;

pub use errors::{ExtensionError, Result};
