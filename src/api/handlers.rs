//! Core HTTP handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::Config;
use crate::employees::EmployeeStore;

/// Application state shared with handlers.
///
/// The configuration is loaded once at startup and read-only from here on;
/// cloning the state is cheap and every handler sees the same values.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable settings loaded at process start.
    pub config: Arc<Config>,
    /// Shared in-memory employee directory.
    pub employees: EmployeeStore,
}

impl AppState {
    /// Create app state with a seeded example resource.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            employees: EmployeeStore::seeded(),
        }
    }

    /// Create app state with an empty example resource.
    pub fn with_empty_store(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            employees: EmployeeStore::new(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    #[schema(example = "ok")]
    pub status: &'static str,
}

/// Welcome response served on the root path.
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// Greeting message.
    pub message: String,
    /// Service name from configuration.
    pub service: String,
    /// Crate version.
    pub version: &'static str,
}

/// Non-sensitive configuration echo.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigResponse {
    /// Service name.
    pub service_name: String,
    /// Deployment environment.
    pub environment: String,
    /// Debug flag.
    pub debug: bool,
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "meta"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Root handler - welcome message with service metadata.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    ),
    tag = "meta"
)]
pub async fn root(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Hello from {}!", state.config.service_name),
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Configuration echo handler - exposes non-sensitive settings only.
#[utoipa::path(
    get,
    path = "/config",
    responses(
        (status = 200, description = "Active non-sensitive settings", body = ConfigResponse)
    ),
    tag = "meta"
)]
pub async fn config_info(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        service_name: state.config.service_name.clone(),
        environment: state.config.environment.clone(),
        debug: state.config.debug,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_body_is_stable() {
        let body = serde_json::to_string(&HealthResponse { status: "ok" }).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[test]
    fn app_state_shares_config() {
        let state = AppState::new(Config::default());
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.config, &clone.config));
    }
}
