//! Global configuration for Terraless extensions
//!
//! The host loads one [`GlobalConfig`] per run and hands it to every
//! extension as a read-only snapshot.

mod loader;
mod schema;

pub use loader::{ConfigLoader, CONFIG_ENV_VAR, PROJECT_CONFIG_FILE};
pub use schema::{GlobalConfig, Metadata, Provider, Team, TerralessData, AWS_PROVIDER_TYPE};
