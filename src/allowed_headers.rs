use crate::util::{normalize_lower, split_header_list};
use std::collections::HashSet;

/// Request headers a preflight may ask for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Any requested header is allowed and mirrored back.
    #[default]
    Any,
}

impl AllowedHeaders {
    /// Trims entries and drops case-insensitive duplicates; a `"*"` entry yields
    /// [`AllowedHeaders::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed == "*" {
                return Self::Any;
            }
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(normalize_lower(&trimmed)) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Whether every header named in an `Access-Control-Request-Headers` value is allowed.
    pub fn allows_headers(&self, request_headers: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => split_header_list(request_headers).all(|requested| {
                allowed
                    .iter()
                    .any(|allowed_header| allowed_header.eq_ignore_ascii_case(requested))
            }),
        }
    }

    /// `Access-Control-Allow-Headers` value for an admitted preflight: the
    /// requested headers, normalized into a comma-separated list.
    pub fn header_value(&self, request_headers: &str) -> Option<String> {
        let requested: Vec<&str> = split_header_list(request_headers).collect();
        if requested.is_empty() {
            None
        } else {
            Some(requested.join(", "))
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
