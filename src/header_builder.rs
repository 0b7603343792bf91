use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::Origin;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_header(&self, request_origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        let value = match self.options.origin {
            // Validation keeps `Any` and credentials apart, so the wildcard is honored.
            Origin::Any => "*",
            Origin::List(_) => request_origin,
        };
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        headers
    }

    pub(crate) fn build_methods_header(&self, requested: &str) -> HeaderCollection {
        if let Some(value) = self.options.methods.header_value(requested) {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_allowed_headers(&self, request_headers: &str) -> HeaderCollection {
        if let Some(value) = self.options.allowed_headers.header_value(request_headers) {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let entries = self
            .options
            .exposed_headers
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .collect::<Vec<_>>();

        if entries.is_empty() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, entries.join(", "));
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if let Some(value) = self.options.max_age {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_MAX_AGE, value.to_string());
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_vary_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.add_vary(header::ORIGIN);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
