//! Credential resolution and storage.
//!
//! Lookup order, first non-blank value wins:
//! 1. `--api-key` flag
//! 2. `VIBES_COMMIT_API_KEY` environment variable
//! 3. `vibesCommitIt.apiKey` from git config (repository, global, system)

use std::env;
use std::fmt;
use std::path::Path;

use git2::{Config, ConfigLevel, ErrorCode, Repository};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Git config key holding the API key.
pub const API_KEY_CONFIG_KEY: &str = "vibesCommitIt.apiKey";

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV_VAR: &str = "VIBES_COMMIT_API_KEY";

/// An API key for the completion endpoint. Never blank.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap `value`, returning `None` if it is empty or whitespace.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Where `set-api-key` persists the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    Global,
    Local,
}

/// Resolve the API key for one invocation.
///
/// Unreadable git config is logged and treated as "not set".
pub fn resolve_api_key(flag: Option<&str>, workspace: Option<&Path>) -> Option<ApiKey> {
    if let Some(key) = flag.and_then(ApiKey::new) {
        debug!("Using API key from --api-key");
        return Some(key);
    }

    if let Some(key) = env::var(API_KEY_ENV_VAR).ok().and_then(ApiKey::new) {
        debug!("Using API key from {}", API_KEY_ENV_VAR);
        return Some(key);
    }

    match read_config_key(workspace) {
        Ok(Some(value)) => {
            debug!("Using API key from git config {}", API_KEY_CONFIG_KEY);
            ApiKey::new(value)
        }
        Ok(None) => None,
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Read `vibesCommitIt.apiKey` from the git config visible from `workspace`.
fn read_config_key(workspace: Option<&Path>) -> Result<Option<String>, ConfigError> {
    let config = open_config(workspace)?;

    match config.get_string(API_KEY_CONFIG_KEY) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read {
            key: API_KEY_CONFIG_KEY,
            source,
        }),
    }
}

/// Open the repository config when `workspace` is inside a repository
/// (which also includes global and system levels), else the default config.
fn open_config(workspace: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(repo) = workspace.and_then(|p| Repository::discover(p).ok()) {
        return repo.config().map_err(ConfigError::Open);
    }
    Config::open_default().map_err(ConfigError::Open)
}

/// Persist `key` as `vibesCommitIt.apiKey` in the chosen git config level.
pub fn store_api_key(
    key: &str,
    scope: ConfigScope,
    workspace: &Path,
) -> Result<(), ConfigError> {
    let key = ApiKey::new(key).ok_or(ConfigError::EmptyKey)?;

    let mut config = match scope {
        ConfigScope::Global => Config::open_default()
            .and_then(|mut c| c.open_global())
            .map_err(ConfigError::Open)?,
        ConfigScope::Local => Repository::discover(workspace)
            .and_then(|r| r.config())
            .and_then(|c| c.open_level(ConfigLevel::Local))
            .map_err(ConfigError::Open)?,
    };

    config
        .set_str(API_KEY_CONFIG_KEY, key.expose())
        .map_err(|source| ConfigError::Write {
            key: API_KEY_CONFIG_KEY,
            source,
        })
}
