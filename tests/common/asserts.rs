use cors_gate::{Allowance, Decision, Denial, Headers, RequestKind};

pub fn assert_allowed(decision: Decision) -> Allowance {
    match decision {
        Decision::Allow(allowance) => allowance,
        other => panic!("expected allow decision, got {:?}", other),
    }
}

pub fn assert_actual_allowed(decision: Decision) -> Headers {
    let allowance = assert_allowed(decision);
    assert_eq!(allowance.kind, RequestKind::Actual);
    allowance.headers
}

pub fn assert_preflight_allowed(decision: Decision) -> Headers {
    let allowance = assert_allowed(decision);
    assert_eq!(allowance.kind, RequestKind::Preflight);
    allowance.headers
}

pub fn assert_denied(decision: Decision) -> Denial {
    match decision {
        Decision::Deny(denial) => denial,
        other => panic!("expected deny decision, got {:?}", other),
    }
}
