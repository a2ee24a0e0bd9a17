//! Settings shared by the discovery sources

use credkit_core::{
    is_usable, Result, ACCESS_KEY_ID_VAR, DEFAULT_CREDENTIALS_DIR,
    DEFAULT_CREDENTIALS_FILE, DEFAULT_PROFILE, PROFILE_VAR, SECRET_ACCESS_KEY_VAR,
    SHARED_CREDENTIALS_FILE_VAR,
};
use credkit_utils::SyncEnv;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the environment and profile-file sources look for credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Variable holding the identifier
    pub identifier_var: String,
    /// Variable holding the secret
    pub secret_var: String,
    /// Profile section to read from the shared credentials file
    pub profile: String,
    /// Explicit credentials file; `~/.aws/credentials` when unset
    pub credentials_file: Option<PathBuf>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            identifier_var: ACCESS_KEY_ID_VAR.to_string(),
            secret_var: SECRET_ACCESS_KEY_VAR.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            credentials_file: None,
        }
    }
}

impl ProviderSettings {
    /// Defaults overlaid with `AWS_PROFILE` and `AWS_SHARED_CREDENTIALS_FILE`
    ///
    /// Blank variables are ignored.
    pub fn from_env() -> Result<Self> {
        Self::default().overlay_env()
    }

    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply profile and credentials-file overrides from the environment
    pub fn overlay_env(mut self) -> Result<Self> {
        if let Some(profile) = usable_var(PROFILE_VAR)? {
            self.profile = profile;
        }
        if let Some(file) = usable_var(SHARED_CREDENTIALS_FILE_VAR)? {
            self.credentials_file = Some(PathBuf::from(file));
        }
        Ok(self)
    }

    /// The credentials file to read, if one can be located
    pub fn credentials_path(&self) -> Option<PathBuf> {
        self.credentials_file.clone().or_else(|| {
            dirs::home_dir().map(|home| {
                home.join(DEFAULT_CREDENTIALS_DIR)
                    .join(DEFAULT_CREDENTIALS_FILE)
            })
        })
    }
}

fn usable_var(name: &str) -> Result<Option<String>> {
    Ok(SyncEnv::var(name)?.filter(|v| is_usable(Some(v.as_str()))))
}
