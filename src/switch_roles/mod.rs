//! AWS Extend Switch Roles extension
//!
//! Turns the teams and `aws` providers of the global configuration into the
//! profile file read by the AWS Extend Switch Roles browser extension.

mod renderer;
mod section;

pub use renderer::{ConfigRenderer, BANNER, EXTENSION_NAME};
pub use section::RenderedSection;
