use crate::constants::method;
use crate::util::is_http_token;

/// Configuration for the methods a rule admits and the `Access-Control-Allow-Methods` value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Admit any method; the requested method is echoed back.
    Any,
    /// Admit only the listed methods. Matching is case-sensitive, as HTTP methods are.
    List(Vec<String>),
}

impl AllowedMethods {
    /// Construct an explicit list. Entries are trimmed, exact duplicates dropped,
    /// and a `"*"` entry yields [`AllowedMethods::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed == "*" {
                return Self::Any;
            }
            if !deduped.contains(&trimmed) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows_method(&self, candidate: &str) -> bool {
        match self {
            AllowedMethods::Any => true,
            AllowedMethods::List(values) => values.iter().any(|value| value == candidate),
        }
    }

    /// Header value for a decision on `requested`; `None` when nothing would be listed.
    pub fn header_value(&self, requested: &str) -> Option<String> {
        match self {
            AllowedMethods::Any if requested.is_empty() => None,
            AllowedMethods::Any => Some(requested.to_string()),
            AllowedMethods::List(values) if values.is_empty() => None,
            AllowedMethods::List(values) => Some(values.join(", ")),
        }
    }

    /// First entry that is not a valid HTTP method token.
    pub(crate) fn invalid_entry(&self) -> Option<&str> {
        match self {
            AllowedMethods::Any => None,
            AllowedMethods::List(values) => values
                .iter()
                .map(String::as_str)
                .find(|value| !is_http_token(value)),
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([method::GET, method::HEAD, method::POST])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
