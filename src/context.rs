/// Borrowed view of the request attributes the gate inspects.
///
/// `origin` is `None` for same-origin and non-browser requests. The preflight
/// fields carry the raw `Access-Control-Request-*` header values, if present.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub path: &'a str,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// An actual (non-preflight) request.
    pub fn new(method: &'a str, origin: Option<&'a str>, path: &'a str) -> Self {
        Self {
            method,
            origin,
            path,
            access_control_request_method: None,
            access_control_request_headers: None,
        }
    }

    /// Origin with empty values treated as absent.
    pub fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.trim().is_empty())
    }

    pub fn is_preflight(&self) -> bool {
        self.method == crate::constants::method::OPTIONS
            && self
                .access_control_request_method
                .is_some_and(|value| !value.trim().is_empty())
    }

    /// The method subject to the allow-list: the requested method for a
    /// preflight, the request method otherwise.
    pub fn effective_method(&self) -> &'a str {
        if self.is_preflight() {
            self.access_control_request_method
                .map(str::trim)
                .unwrap_or(self.method)
        } else {
            self.method
        }
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
