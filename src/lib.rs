//! Allow-list CORS gate evaluated before a request reaches application handlers.
//!
//! Build an [`OriginGate`] once at startup, either in code through
//! [`OriginGate::builder`] or from YAML through [`GateConfig`], share it by
//! reference, and call [`OriginGate::evaluate`] for each request.

mod allowed_headers;
mod allowed_methods;
mod config;
pub mod constants;
mod context;
mod gate;
mod header_builder;
mod headers;
mod options;
mod origin;
mod path_pattern;
mod result;
mod rule;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, GateConfig, RuleConfig};
pub use context::RequestContext;
pub use gate::{OriginGate, OriginGateBuilder};
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginMatcher, PatternError};
pub use path_pattern::{PathPattern, PathPatternError};
pub use result::{Allowance, Decision, Denial, DenyReason, RequestKind};
pub use rule::PolicyRule;
