//! YAML configuration for an [`OriginGate`].
//!
//! ```yaml
//! rules:
//!   - path: "/**"
//!     allowed_origins: ["http://localhost:5173"]
//!     allowed_methods: [GET, POST, PUT, DELETE, OPTIONS]
//!     allow_credentials: true
//! ```
//!
//! Omitted rule fields take the values of the local frontend policy; a
//! document without `rules` yields that single policy.

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_MAX_AGE, method, path};
use crate::gate::OriginGate;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::{Origin, OriginMatcher};
use crate::rule::PolicyRule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read cors configuration from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse cors configuration")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid cors rule for path '{path}'")]
    InvalidRule {
        path: String,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    pub rules: Vec<RuleConfig>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            rules: vec![RuleConfig::default()],
        }
    }
}

/// One path mapping. `"*"` in `allowed_origins`, `allowed_methods` or
/// `allowed_headers` admits anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    pub path: String,
    pub allowed_origins: Vec<String>,
    /// Wildcard origins such as `https://*.example.com`.
    pub allowed_origin_patterns: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age: Option<u64>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            path: path::MATCH_ALL.to_string(),
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            allowed_origin_patterns: Vec::new(),
            allowed_methods: [
                method::GET,
                method::POST,
                method::PUT,
                method::DELETE,
                method::OPTIONS,
            ]
            .map(String::from)
            .to_vec(),
            allowed_headers: vec!["*".to_string()],
            exposed_headers: Vec::new(),
            allow_credentials: true,
            max_age: Some(DEFAULT_MAX_AGE),
        }
    }
}

impl RuleConfig {
    pub fn to_rule(&self) -> Result<PolicyRule, ValidationError> {
        PolicyRule::new(&self.path, self.to_options()?)
    }

    fn to_options(&self) -> Result<CorsOptions, ValidationError> {
        let mut matchers: Vec<OriginMatcher> = self
            .allowed_origins
            .iter()
            .map(|origin| OriginMatcher::exact(origin.as_str()))
            .collect();
        for pattern in &self.allowed_origin_patterns {
            matchers.push(OriginMatcher::wildcard(pattern)?);
        }

        Ok(CorsOptions {
            origin: Origin::list(matchers),
            methods: AllowedMethods::list(&self.allowed_methods),
            allowed_headers: AllowedHeaders::list(&self.allowed_headers),
            exposed_headers: self.exposed_headers.clone(),
            credentials: self.allow_credentials,
            max_age: self.max_age,
        })
    }
}

impl GateConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn build(&self) -> Result<OriginGate, ConfigError> {
        let rules = self
            .rules
            .iter()
            .map(|rule| {
                rule.to_rule().map_err(|source| ConfigError::InvalidRule {
                    path: rule.path.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(rules = rules.len(), "cors gate configured");
        Ok(OriginGate::new(rules))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
