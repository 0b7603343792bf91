use cors_gate::constants::method;
use cors_gate::{
    AllowedHeaders, AllowedMethods, CorsOptions, Decision, Origin, OriginGate, RequestContext,
};

pub struct GateBuilder {
    path: String,
    options: CorsOptions,
}

impl GateBuilder {
    pub fn new() -> Self {
        Self {
            path: "/**".into(),
            options: CorsOptions::default(),
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.options.origin = origin;
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.methods = AllowedMethods::list(methods);
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.options.allowed_headers = headers;
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.credentials = enabled;
        self
    }

    pub fn max_age(mut self, value: Option<u64>) -> Self {
        self.options.max_age = value;
        self
    }

    pub fn build(self) -> OriginGate {
        OriginGate::builder()
            .mapping(self.path, self.options)
            .build()
            .expect("valid CORS configuration")
    }
}

pub struct ActualRequestBuilder {
    method: String,
    origin: Option<String>,
    path: String,
}

impl ActualRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
            path: "/api/anything".into(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn evaluate(&self, gate: &OriginGate) -> Decision {
        gate.evaluate(&RequestContext::new(
            &self.method,
            self.origin.as_deref(),
            &self.path,
        ))
    }
}

pub struct PreflightRequestBuilder {
    origin: Option<String>,
    path: String,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self {
            origin: None,
            path: "/api/anything".into(),
            request_method: None,
            request_headers: None,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn evaluate(&self, gate: &OriginGate) -> Decision {
        gate.evaluate(&RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            path: &self.path,
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        })
    }
}

pub fn gate() -> GateBuilder {
    GateBuilder::new()
}

pub fn actual_request() -> ActualRequestBuilder {
    ActualRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
