use std::sync::Arc;

use cors_gate::{ConfigError, GateConfig, OriginGate};

pub type SharedGate = Arc<OriginGate>;

#[derive(Clone)]
pub struct AppState {
    pub gate: SharedGate,
    pub greeting: &'static str,
}

pub fn build_state(config_path: Option<String>) -> Result<AppState, ConfigError> {
    let config = match config_path {
        Some(path) => GateConfig::from_path(path)?,
        None => GateConfig::default(),
    };

    Ok(AppState {
        gate: Arc::new(config.build()?),
        greeting: "Welcome to the axum CORS gate demo!",
    })
}

pub mod middleware;
