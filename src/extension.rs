//! Contract shared by Terraless extensions

use crate::config::{GlobalConfig, TerralessData};
use crate::types::Result;

/// Name and version an extension reports to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionInfo {
    pub name: String,
    pub version: String,
}

pub trait Extension {
    fn info(&self) -> ExtensionInfo;

    /// Run the extension against one configuration snapshot.
    ///
    /// `data` is shared between all extensions of a run.
    fn exec(&self, global_config: &GlobalConfig, data: &TerralessData) -> Result<()>;
}
