use crate::constants::path;
use crate::util::push_regex_literal;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 4_096;

#[derive(Debug, Error)]
pub enum PathPatternError {
    #[error("path pattern '{pattern}' has an unclosed '{{' at byte {position}")]
    UnclosedVariable { pattern: String, position: usize },
    #[error("path pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
    #[error("failed to compile path pattern '{pattern}'")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
}

/// Glob-like request path matcher.
///
/// `**` as a whole segment spans any number of segments, `*` any run of
/// characters inside one segment, `?` exactly one such character, and
/// `{name}` one non-empty segment. `{name:regex}` constrains the variable to
/// `regex`; braces inside it must balance. A trailing `/` on the request path
/// is tolerated.
#[derive(Clone)]
pub struct PathPattern {
    source: String,
    matcher: Matcher,
}

#[derive(Clone)]
enum Matcher {
    All,
    Compiled(Regex),
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, PathPatternError> {
        let trimmed = pattern.trim();
        let source = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        if source.len() > MAX_PATTERN_LENGTH {
            return Err(PathPatternError::TooLong {
                length: source.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        if source == path::MATCH_ALL {
            return Ok(Self {
                source,
                matcher: Matcher::All,
            });
        }

        let expression = Self::translate(&source)?;
        let regex = Regex::new(&expression).map_err(|err| PathPatternError::Build {
            pattern: source.clone(),
            source: Box::new(err),
        })?;

        Ok(Self {
            source,
            matcher: Matcher::Compiled(regex),
        })
    }

    /// Pattern matching every path.
    pub fn match_all() -> Self {
        Self {
            source: path::MATCH_ALL.to_string(),
            matcher: Matcher::All,
        }
    }

    fn translate(source: &str) -> Result<String, PathPatternError> {
        let mut expression = String::with_capacity(source.len() * 2);
        expression.push('^');

        // `source` always starts with '/'; offset tracks byte positions for errors.
        let mut offset = 1;
        for segment in source[1..].split('/') {
            if segment == "**" {
                expression.push_str("(?:/[^/]*)*");
            } else {
                expression.push('/');
                Self::translate_segment(source, segment, offset, &mut expression)?;
            }
            offset += segment.len() + 1;
        }

        expression.push_str("/?$");
        Ok(expression)
    }

    fn translate_segment(
        source: &str,
        segment: &str,
        offset: usize,
        expression: &mut String,
    ) -> Result<(), PathPatternError> {
        let mut chars = segment.char_indices();
        while let Some((index, ch)) = chars.next() {
            match ch {
                '*' => expression.push_str("[^/]*"),
                '?' => expression.push_str("[^/]"),
                '{' => {
                    let mut depth = 1;
                    let mut close = None;
                    for (inner, next) in chars.by_ref() {
                        match next {
                            '{' => depth += 1,
                            '}' => {
                                depth -= 1;
                                if depth == 0 {
                                    close = Some(inner);
                                    break;
                                }
                            }
                            _ => {}
                        }
                    }
                    let Some(close) = close else {
                        return Err(PathPatternError::UnclosedVariable {
                            pattern: source.to_string(),
                            position: offset + index,
                        });
                    };

                    match segment[index + 1..close].split_once(':') {
                        Some((_, constraint)) if !constraint.is_empty() => {
                            expression.push_str("(?:");
                            expression.push_str(constraint);
                            expression.push(')');
                        }
                        _ => expression.push_str("[^/]+"),
                    }
                }
                other => push_regex_literal(expression, other),
            }
        }
        Ok(())
    }

    /// Matches the path portion of `request_path`; any query or fragment is ignored.
    pub fn matches(&self, request_path: &str) -> bool {
        match &self.matcher {
            Matcher::All => true,
            Matcher::Compiled(regex) => {
                let path = request_path
                    .split(['?', '#'])
                    .next()
                    .unwrap_or(request_path);
                regex.is_match(path.as_bytes())
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathPattern").field(&self.source).finish()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Default for PathPattern {
    fn default() -> Self {
        Self::match_all()
    }
}

#[cfg(test)]
#[path = "path_pattern_test.rs"]
mod path_pattern_test;
