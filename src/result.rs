use crate::headers::Headers;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// `OPTIONS` carrying `Access-Control-Request-Method`.
    Preflight,
    Actual,
}

/// Headers to emit for an admitted request.
#[derive(Debug, Clone)]
pub struct Allowance {
    pub kind: RequestKind,
    pub headers: Headers,
}

/// A rejected request. `headers` holds only cache-keying headers (`Vary`).
#[derive(Debug, Clone)]
pub struct Denial {
    pub kind: RequestKind,
    pub reason: DenyReason,
    pub headers: Headers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    NoMatchingRule,
    OriginNotAllowed,
    MethodNotAllowed { method: String },
    HeadersNotAllowed { requested_headers: String },
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::NoMatchingRule => f.write_str("no cors rule matches the request path"),
            DenyReason::OriginNotAllowed => f.write_str("origin not allowed"),
            DenyReason::MethodNotAllowed { method } => {
                write!(f, "method '{method}' not allowed")
            }
            DenyReason::HeadersNotAllowed { requested_headers } => {
                write!(f, "headers '{requested_headers}' not allowed")
            }
        }
    }
}

/// Outcome of evaluating one request against the gate.
#[derive(Debug, Clone)]
pub enum Decision {
    Allow(Allowance),
    Deny(Denial),
    /// The request carries no `Origin`; it is not subject to CORS.
    NotApplicable,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Decision::Deny(_))
    }

    pub fn is_preflight(&self) -> bool {
        self.kind() == Some(RequestKind::Preflight)
    }

    pub fn kind(&self) -> Option<RequestKind> {
        match self {
            Decision::Allow(allowance) => Some(allowance.kind),
            Decision::Deny(denial) => Some(denial.kind),
            Decision::NotApplicable => None,
        }
    }

    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Decision::Allow(allowance) => Some(&allowance.headers),
            Decision::Deny(denial) => Some(&denial.headers),
            Decision::NotApplicable => None,
        }
    }
}
