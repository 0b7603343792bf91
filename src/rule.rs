use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_MAX_AGE, method};
use crate::options::{CorsOptions, ValidationError};
use crate::origin::Origin;
use crate::path_pattern::PathPattern;
use tracing::warn;

/// A path pattern bound to the CORS settings applied to requests it matches.
#[derive(Clone, Debug)]
pub struct PolicyRule {
    path_pattern: PathPattern,
    options: CorsOptions,
}

impl PolicyRule {
    pub fn new(path_pattern: &str, options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        let path_pattern = PathPattern::parse(path_pattern)?;

        if options.origin.is_empty() {
            warn!(
                path_pattern = %path_pattern,
                "cors rule has no allowed origins; every cross-origin request on it is denied"
            );
        }

        Ok(Self {
            path_pattern,
            options,
        })
    }

    /// Every path, `http://localhost:5173` only, GET/POST/PUT/DELETE/OPTIONS, with credentials.
    pub fn local_frontend() -> Self {
        Self {
            path_pattern: PathPattern::match_all(),
            options: CorsOptions {
                origin: Origin::exact(DEFAULT_ALLOWED_ORIGIN),
                methods: AllowedMethods::list([
                    method::GET,
                    method::POST,
                    method::PUT,
                    method::DELETE,
                    method::OPTIONS,
                ]),
                allowed_headers: AllowedHeaders::Any,
                exposed_headers: Vec::new(),
                credentials: true,
                max_age: Some(DEFAULT_MAX_AGE),
            },
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.path_pattern.matches(path)
    }

    pub fn path_pattern(&self) -> &PathPattern {
        &self.path_pattern
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }
}

#[cfg(test)]
#[path = "rule_test.rs"]
mod rule_test;
