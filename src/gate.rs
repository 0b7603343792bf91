use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderCollection, Headers};
use crate::options::{CorsOptions, ValidationError};
use crate::result::{Allowance, Decision, Denial, DenyReason, RequestKind};
use crate::rule::PolicyRule;
use once_cell::sync::Lazy;
use tracing::debug;

static LOCAL_FRONTEND_GATE: Lazy<OriginGate> =
    Lazy::new(|| OriginGate::new(vec![PolicyRule::local_frontend()]));

/// Ordered, immutable set of [`PolicyRule`]s evaluated before requests reach handlers.
///
/// The first rule whose path pattern matches a request decides it. Requests
/// matching no rule are denied.
#[derive(Clone, Debug, Default)]
pub struct OriginGate {
    rules: Vec<PolicyRule>,
}

impl OriginGate {
    pub fn new(rules: Vec<PolicyRule>) -> Self {
        Self { rules }
    }

    pub fn builder() -> OriginGateBuilder {
        OriginGateBuilder::default()
    }

    /// Shared gate admitting the local development frontend on every path.
    pub fn default_gate() -> &'static OriginGate {
        &LOCAL_FRONTEND_GATE
    }

    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> Decision {
        let Some(origin) = request.origin() else {
            return Decision::NotApplicable;
        };

        let kind = if request.is_preflight() {
            RequestKind::Preflight
        } else {
            RequestKind::Actual
        };

        let Some(rule) = self.rules.iter().find(|rule| rule.matches(request.path)) else {
            return Self::deny(request, kind, DenyReason::NoMatchingRule, Headers::new());
        };

        let options = rule.options();
        let builder = HeaderBuilder::new(options);

        if let Some(reason) = Self::check(options, request, origin, kind) {
            let vary = builder.build_vary_header().into_headers();
            return Self::deny(request, kind, reason, vary);
        }

        let method = request.effective_method();
        let mut headers = HeaderCollection::with_estimate(8);
        headers.extend(builder.build_origin_header(origin));
        headers.extend(builder.build_methods_header(method));
        headers.extend(builder.build_credentials_header());
        match kind {
            RequestKind::Preflight => {
                headers.extend(
                    builder.build_allowed_headers(
                        request.access_control_request_headers.unwrap_or_default(),
                    ),
                );
                headers.extend(builder.build_max_age_header());
            }
            RequestKind::Actual => headers.extend(builder.build_exposed_headers()),
        }
        headers.extend(builder.build_vary_header());

        Decision::Allow(Allowance {
            kind,
            headers: headers.into_headers(),
        })
    }

    fn check(
        options: &CorsOptions,
        request: &RequestContext<'_>,
        origin: &str,
        kind: RequestKind,
    ) -> Option<DenyReason> {
        if !options.origin.allows(origin) {
            return Some(DenyReason::OriginNotAllowed);
        }

        let method = request.effective_method();
        if !options.methods.allows_method(method) {
            return Some(DenyReason::MethodNotAllowed {
                method: method.to_string(),
            });
        }

        if kind == RequestKind::Preflight {
            let requested = request.access_control_request_headers.unwrap_or_default();
            if !options.allowed_headers.allows_headers(requested) {
                return Some(DenyReason::HeadersNotAllowed {
                    requested_headers: requested.trim().to_string(),
                });
            }
        }

        None
    }

    fn deny(
        request: &RequestContext<'_>,
        kind: RequestKind,
        reason: DenyReason,
        headers: Headers,
    ) -> Decision {
        let preflight = kind == RequestKind::Preflight;
        debug!(
            origin = request.origin.unwrap_or_default(),
            method = request.method,
            path = request.path,
            preflight,
            %reason,
            "cors request denied"
        );

        Decision::Deny(Denial {
            kind,
            reason,
            headers,
        })
    }
}

/// Registers rules in evaluation order, mirroring a mapping registry.
#[derive(Default)]
pub struct OriginGateBuilder {
    mappings: Vec<(String, CorsOptions)>,
}

impl OriginGateBuilder {
    pub fn mapping(mut self, path_pattern: impl Into<String>, options: CorsOptions) -> Self {
        self.mappings.push((path_pattern.into(), options));
        self
    }

    pub fn build(self) -> Result<OriginGate, ValidationError> {
        let rules = self
            .mappings
            .into_iter()
            .map(|(pattern, options)| PolicyRule::new(&pattern, options))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OriginGate::new(rules))
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;
