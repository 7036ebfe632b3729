//! Identity directory configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which directory backend serves lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryProvider {
    /// AWS Cognito user pool.
    #[default]
    Cognito,
    /// In-process directory seeded from `users`.
    Memory,
}

/// Identity directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Backend selection.
    #[serde(default)]
    pub provider: DirectoryProvider,
    /// Cognito user pool id. Required per request; no default.
    #[serde(default)]
    pub user_pool_id: Option<String>,
    /// Region override. When unset the AWS default chain decides.
    #[serde(default)]
    pub region: Option<String>,
    /// Endpoint override, e.g. a local emulator.
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// Attribute matched against the submitted CPF.
    #[serde(default = "default_lookup_attribute")]
    pub lookup_attribute: String,
    /// Users served by the memory provider.
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

/// A user record for the memory provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    /// Directory username.
    pub username: String,
    /// Attribute name to value.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            provider: DirectoryProvider::default(),
            user_pool_id: None,
            region: None,
            endpoint_url: None,
            lookup_attribute: default_lookup_attribute(),
            users: Vec::new(),
        }
    }
}

fn default_lookup_attribute() -> String {
    "preferred_username".to_string()
}
