use crate::utils::error::{CompassError, Result};
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// TOML configuration for the remote records backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub remote: RemoteSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSection {
    pub endpoint: String,
    /// Extra request headers, typically project id and API key.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl RemoteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CompassError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| CompassError::Config {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values so
    /// secrets stay out of the config file. Unset variables are left
    /// untouched.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn header_pairs(&self) -> Vec<(String, String)> {
        self.remote
            .headers
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl Validate for RemoteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("remote.endpoint", &self.remote.endpoint)
    }
}
