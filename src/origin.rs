use crate::util::{equals_ignore_case, normalize_origin, push_regex_literal, strip_trailing_slash};
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Origins a rule admits.
#[derive(Clone, Debug)]
pub enum Origin {
    /// Any origin. Cannot be combined with credentials.
    Any,
    /// Only origins matched by one of the listed matchers. An empty list admits nothing.
    List(Vec<OriginMatcher>),
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern '{pattern}'")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

#[derive(Clone)]
pub enum OriginMatcher {
    Exact(String),
    Pattern { source: String, regex: Regex },
}

impl fmt::Debug for OriginMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginMatcher::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            OriginMatcher::Pattern { source, .. } => {
                f.debug_tuple("Pattern").field(source).finish()
            }
        }
    }
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(normalize_origin(&value.into()).to_string())
    }

    /// Compiles a case-insensitive regular expression. Anchors are the caller's
    /// responsibility.
    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile(pattern, pattern)
    }

    /// Compiles a wildcard origin such as `https://*.example.com`, where `*`
    /// stands for any run of characters other than `/`. The whole origin must match.
    pub fn wildcard(pattern: &str) -> Result<Self, PatternError> {
        let pattern = normalize_origin(pattern);
        let mut expression = String::with_capacity(pattern.len() + 8);
        expression.push('^');
        for ch in pattern.chars() {
            if ch == '*' {
                expression.push_str("[^/]*");
            } else {
                push_regex_literal(&mut expression, ch);
            }
        }
        expression.push('$');

        Self::compile(pattern, &expression)
    }

    fn compile(source: &str, expression: &str) -> Result<Self, PatternError> {
        if expression.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: expression.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let regex = Regex::new(&format!("(?i:{expression})")).map_err(|err| {
            PatternError::Build {
                pattern: source.to_string(),
                source: Box::new(err),
            }
        })?;

        Ok(Self::Pattern {
            source: source.to_string(),
            regex,
        })
    }

    /// Tests a request origin. A single trailing `/` is ignored for every matcher kind.
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate = strip_trailing_slash(candidate);
        match self {
            OriginMatcher::Exact(value) => equals_ignore_case(value, candidate),
            OriginMatcher::Pattern { regex, .. } => regex.is_match(candidate.as_bytes()),
        }
    }

    fn is_wildcard(&self) -> bool {
        matches!(self, OriginMatcher::Exact(value) if value == "*")
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::exact(value)
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::List(vec![OriginMatcher::exact(value)])
    }

    /// Builds an allow-list. A literal `"*"` entry turns the list into [`Origin::Any`].
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        let matchers: Vec<OriginMatcher> = values.into_iter().map(Into::into).collect();
        if matchers.iter().any(OriginMatcher::is_wildcard) {
            Self::Any
        } else {
            Self::List(matchers)
        }
    }

    pub fn allows(&self, origin: &str) -> bool {
        if origin.len() > MAX_ORIGIN_LENGTH {
            return false;
        }

        match self {
            Origin::Any => true,
            Origin::List(matchers) => matchers.iter().any(|matcher| matcher.matches(origin)),
        }
    }

    /// True when the allow-list can never admit an origin.
    pub fn is_empty(&self) -> bool {
        matches!(self, Origin::List(matchers) if matchers.is_empty())
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
