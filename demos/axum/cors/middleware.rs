use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_gate::{Decision, Denial, Headers, RequestContext, RequestKind, constants::header};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let decision = state.gate.evaluate(&owned_ctx.as_request_context());

    match decision {
        Decision::Allow(allowance) if allowance.kind == RequestKind::Preflight => {
            response_with(StatusCode::NO_CONTENT, &allowance.headers, Body::empty())
        }
        Decision::Allow(allowance) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &allowance.headers);
            response
        }
        Decision::Deny(denial) => rejection_response(denial),
        Decision::NotApplicable => next.run(request).await,
    }
}

fn rejection_response(denial: Denial) -> Response {
    let message = match denial.kind {
        RequestKind::Preflight => format!("Preflight rejected: {}", denial.reason),
        RequestKind::Actual => format!("Request rejected: {}", denial.reason),
    };
    response_with(StatusCode::FORBIDDEN, &denial.headers, Body::from(message))
}

fn response_with(status: StatusCode, headers: &Headers, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    apply_headers(response.headers_mut(), headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            if name.eq_ignore_ascii_case(header::VARY) {
                map.append(header_name, header_value);
            } else {
                map.insert(header_name, header_value);
            }
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    path: String,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            path: request.uri().path().to_string(),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            path: &self.path,
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
