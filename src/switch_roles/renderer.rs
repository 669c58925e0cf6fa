//! AWS Extend Switch Roles configuration renderer
//!
//! Produces one base profile per team and one assume-role profile per role
//! of every `aws` provider, in declaration order:
//!
//! ```text
//! [team]
//! aws_account_id = <baseAccountId>
//!
//!
//! [provider-role]
//! source_profile = team
//! color = <color>
//! role_arn = arn:aws:iam::<accountId>:role/<role>
//! ```

use super::section::RenderedSection;
use crate::config::{GlobalConfig, Provider, Team, TerralessData};
use crate::extension::{Extension, ExtensionInfo};
use crate::logging::SharedLogger;
use crate::types::Result;
use std::fmt::Write;
use tracing::debug;

/// First line of the rendered output
pub const BANNER: &str = "AWS Extend Switch Roles configuration:";

pub const EXTENSION_NAME: &str = "aws-extend-switch-roles";

pub struct ConfigRenderer {
    logger: SharedLogger,
}

impl ConfigRenderer {
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }

    /// All sections for `global_config`, in output order
    pub fn sections(global_config: &GlobalConfig) -> Vec<RenderedSection> {
        let mut sections = Vec::new();

        for team in &global_config.teams {
            sections.push(Self::team_section(team));

            for provider in team.providers.iter().filter(|p| p.is_aws()) {
                for role in &provider.roles {
                    sections.push(Self::role_section(team, provider, role));
                }
            }
        }

        sections
    }

    fn team_section(team: &Team) -> RenderedSection {
        RenderedSection::new(team.name.as_str())
            .field("aws_account_id", team.data.get_or_empty("baseAccountId"))
    }

    fn role_section(team: &Team, provider: &Provider, role: &str) -> RenderedSection {
        RenderedSection::new(format!("{}-{}", provider.name, role))
            .field("source_profile", team.name.as_str())
            .field("color", provider.data.get_or_empty("color"))
            .field(
                "role_arn",
                format!(
                    "arn:aws:iam::{}:role/{}",
                    provider.data.get_or_empty("accountId"),
                    role
                ),
            )
    }

    /// Render the complete configuration text
    pub fn render(global_config: &GlobalConfig) -> String {
        let sections = Self::sections(global_config);
        debug!(
            "Rendering {} section(s) for {} team(s)",
            sections.len(),
            global_config.teams.len()
        );

        let mut output = format!("{}\n\n", BANNER);
        for section in &sections {
            // Writing into a String cannot fail
            let _ = write!(output, "{}", section);
        }
        output
    }
}

impl Extension for ConfigRenderer {
    fn info(&self) -> ExtensionInfo {
        ExtensionInfo {
            name: EXTENSION_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn exec(&self, global_config: &GlobalConfig, _data: &TerralessData) -> Result<()> {
        let configuration = Self::render(global_config);
        self.logger.info(&configuration, &[]);
        Ok(())
    }
}
