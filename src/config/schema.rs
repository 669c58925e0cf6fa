//! Terraless global configuration types
//!
//! The global configuration is a tree of teams, each owning a base AWS
//! account and a list of typed providers. Deserialised from TOML by the
//! [`ConfigLoader`](crate::config::ConfigLoader) and read-only afterwards.

use crate::types::{ExtensionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Provider type handled by the switch-roles renderer
pub const AWS_PROVIDER_TYPE: &str = "aws";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub data: Metadata,
    #[serde(default)]
    pub providers: Vec<Provider>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub data: Metadata,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Free-form string metadata attached to teams and providers.
///
/// Recognised keys depend on the provider type, so lookups never fail:
/// a missing key reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(HashMap<String, String>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, or `""` when absent
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl Provider {
    pub fn is_aws(&self) -> bool {
        self.kind == AWS_PROVIDER_TYPE
    }
}

impl GlobalConfig {
    /// Check the invariants the loader guarantees to extensions:
    /// team names are non-empty and unique, provider names are non-empty.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for team in &self.teams {
            if team.name.trim().is_empty() {
                return Err(ExtensionError::InvalidConfig(
                    "team name must not be empty".to_string(),
                ));
            }
            if !seen.insert(team.name.as_str()) {
                return Err(ExtensionError::InvalidConfig(format!(
                    "duplicate team name '{}'",
                    team.name
                )));
            }
            for provider in &team.providers {
                if provider.name.trim().is_empty() {
                    return Err(ExtensionError::InvalidConfig(format!(
                        "provider of type '{}' in team '{}' has no name",
                        provider.kind, team.name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Data shared between extensions during one Terraless run.
///
/// Reserved for cross-extension exchange; the switch-roles renderer accepts
/// it but neither reads nor writes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerralessData {
    #[serde(default)]
    pub entries: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str) -> Team {
        Team {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_metadata_get_or_empty() {
        let data: Metadata = [("accountId", "123")].into_iter().collect();
        assert_eq!(data.get_or_empty("accountId"), "123");
        assert_eq!(data.get_or_empty("color"), "");
        assert_eq!(data.get("color"), None);
    }

    #[test]
    fn test_provider_type_match_is_exact() {
        let mut provider = Provider {
            kind: "aws".to_string(),
            name: "p".to_string(),
            ..Default::default()
        };
        assert!(provider.is_aws());

        provider.kind = "AWS".to_string();
        assert!(!provider.is_aws());

        provider.kind = "dummy".to_string();
        assert!(!provider.is_aws());
    }

    #[test]
    fn test_validate_accepts_unique_teams() {
        let config = GlobalConfig {
            teams: vec![team("a"), team("b")],
        };
        assert!(config.validate().is_ok());
        assert!(GlobalConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_team() {
        let config = GlobalConfig {
            teams: vec![team("a"), team("a")],
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate team name 'a'"));
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        let config = GlobalConfig {
            teams: vec![team(" ")],
        };
        assert!(matches!(
            config.validate(),
            Err(ExtensionError::InvalidConfig(_))
        ));

        let mut with_provider = team("a");
        with_provider.providers.push(Provider {
            kind: "aws".to_string(),
            ..Default::default()
        });
        let config = GlobalConfig {
            teams: vec![with_provider],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert!(config.teams.is_empty());

        let config: GlobalConfig = toml::from_str(
            r#"
            [[teams]]
            name = "Odania"

            [[teams.providers]]
            type = "aws"
            name = "aws-provider"
            "#,
        )
        .unwrap();
        let provider = &config.teams[0].providers[0];
        assert!(provider.is_aws());
        assert!(provider.roles.is_empty());
        assert!(provider.data.is_empty());
    }
}
