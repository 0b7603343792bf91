use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::DEFAULT_MAX_AGE;
use crate::origin::{Origin, PatternError};
use crate::path_pattern::PathPatternError;
use crate::util::is_http_token;
use thiserror::Error;

/// Per-rule CORS settings.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: Vec<String>,
    pub credentials: bool,
    /// Seconds a preflight response may be cached; `None` omits the header.
    pub max_age: Option<u64>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::default(),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: Vec::new(),
            credentials: false,
            max_age: Some(DEFAULT_MAX_AGE),
        }
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "When credentials are allowed, the allowed origins cannot be '*'. List the origins explicitly or use origin patterns."
    )]
    AnyOriginWithCredentials,
    #[error("The method '{0}' is not a valid HTTP method token.")]
    InvalidMethod(String),
    #[error("The exposed header '{0}' is not a valid HTTP header name.")]
    InvalidExposedHeader(String),
    #[error("The allowed header '{0}' is not a valid HTTP header name.")]
    InvalidAllowedHeader(String),
    #[error(transparent)]
    PathPattern(#[from] PathPatternError),
    #[error(transparent)]
    OriginPattern(#[from] PatternError),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials && matches!(self.origin, Origin::Any) {
            return Err(ValidationError::AnyOriginWithCredentials);
        }

        if let Some(method) = self.methods.invalid_entry() {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }

        if let AllowedHeaders::List(values) = &self.allowed_headers
            && let Some(name) = values.iter().find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidAllowedHeader(name.clone()));
        }

        if let Some(name) = self
            .exposed_headers
            .iter()
            .find(|name| !is_http_token(name.trim()))
        {
            return Err(ValidationError::InvalidExposedHeader(name.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
