pub(crate) fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        value.to_ascii_lowercase()
    } else {
        value.to_lowercase()
    }
}

pub(crate) fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        normalize_lower(a) == normalize_lower(b)
    }
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Trims whitespace and a single trailing `/` from a configured origin so
/// that `http://host/` and `http://host` compare equal.
pub(crate) fn normalize_origin(value: &str) -> &str {
    strip_trailing_slash(value.trim())
}

/// Request-side counterpart of [`normalize_origin`]. Whitespace is kept so a
/// padded origin never matches and is never echoed back.
pub(crate) fn strip_trailing_slash(value: &str) -> &str {
    value.strip_suffix('/').unwrap_or(value)
}

/// Splits a comma-separated header value, dropping empty entries.
pub(crate) fn split_header_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

/// Appends `value` to `out` with regex metacharacters escaped.
pub(crate) fn push_regex_literal(out: &mut String, value: char) {
    if matches!(
        value,
        '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '#'
            | '&' | '-' | '~'
    ) {
        out.push('\\');
    }
    out.push(value);
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
