//! OpenAPI document assembled from the handler annotations.
//!
//! Served interactively at `/docs`, as raw JSON at `/api-docs/openapi.json`.

use utoipa::OpenApi;

/// OpenAPI specification for the whole service.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::root,
        crate::api::handlers::health,
        crate::api::handlers::config_info,
        crate::employees::handlers::list_employees,
        crate::employees::handlers::get_employee,
        crate::employees::handlers::create_employee,
        crate::employees::handlers::update_employee,
        crate::employees::handlers::delete_employee,
    ),
    components(schemas(
        crate::api::handlers::HealthResponse,
        crate::api::handlers::WelcomeResponse,
        crate::api::handlers::ConfigResponse,
        crate::employees::Employee,
        crate::employees::Message,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "meta", description = "Service metadata and liveness"),
        (name = "employees", description = "Example in-memory resource")
    ),
    info(
        title = "api-starter",
        description = "HTTP API starter service"
    )
)]
pub struct ApiDoc;
