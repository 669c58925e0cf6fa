//! Terraless Switch Roles - AWS Extend Switch Roles extension for Terraless
//!
//! This crate renders the teams and AWS providers of a Terraless global
//! configuration into the profile format understood by the
//! "AWS Extend Switch Roles" browser extension.

pub mod config;
pub mod extension;
pub mod logging;
pub mod switch_roles;
pub mod types;

pub use config::{ConfigLoader, GlobalConfig, TerralessData};
pub use extension::{Extension, ExtensionInfo};
pub use logging::{Logger, RecordingLogger, SharedLogger, TracingLogger};
pub use switch_roles::ConfigRenderer;
pub use types::ExtensionError;
