//! CRUD handlers for the employee resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::api::AppState;
use crate::employees::types::{Employee, Message};
use crate::error::{ApiError, ErrorBody};

/// Convert a body extraction failure into the shared structured error.
///
/// Without this, a malformed JSON body (or a missing content type) would be
/// answered by the extractor's plain-text rejection instead of the
/// `{"detail": ...}` shape every other client error gets.
fn bad_body(rejection: JsonRejection) -> ApiError {
    ApiError::Validation(format!("invalid request body: {}", rejection.body_text()))
}

/// Parse a path segment into an employee id.
///
/// Parsed by hand rather than via `Path<u32>` so malformed input gets the
/// same structured error body as every other client error.
fn parse_id(raw: &str) -> Result<u32, ApiError> {
    match raw.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::Validation(format!(
            "employee id must be a positive integer, got '{raw}'"
        ))),
    }
}

/// List all employees.
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees, ordered by id", body = [Employee])
    ),
    tag = "employees"
)]
pub async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.employees.list())
}

/// Fetch one employee by id.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = u32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "The employee", body = Employee),
        (status = 404, description = "No employee with this id", body = ErrorBody),
        (status = 422, description = "Id is not a positive integer", body = ErrorBody)
    ),
    tag = "employees"
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let id = parse_id(&id)?;
    state.employees.get(id).map(Json)
}

/// Add a new employee.
#[utoipa::path(
    post,
    path = "/employees",
    request_body = Employee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "An employee with this id already exists", body = ErrorBody),
        (status = 422, description = "Field validation failed", body = ErrorBody)
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<Employee>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let Json(employee) = body.map_err(bad_body)?;
    employee.validate()?;
    let created = state.employees.insert(employee)?;
    info!(id = created.id, "employee created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an existing employee.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(("id" = u32, Path, description = "Employee id")),
    request_body = Employee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 404, description = "No employee with this id", body = ErrorBody),
        (status = 422, description = "Field validation failed", body = ErrorBody)
    ),
    tag = "employees"
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Employee>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    let id = parse_id(&id)?;
    let Json(employee) = body.map_err(bad_body)?;
    employee.validate()?;

    if employee.id != id {
        return Err(ApiError::Validation(format!(
            "body id {} does not match path id {id}",
            employee.id
        )));
    }

    let updated = state.employees.update(id, employee)?;
    info!(id, "employee updated");
    Ok(Json(updated))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = u32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee deleted", body = Message),
        (status = 404, description = "No employee with this id", body = ErrorBody),
        (status = 422, description = "Id is not a positive integer", body = ErrorBody)
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&id)?;
    state.employees.remove(id)?;
    info!(id, "employee deleted");

    Ok(Json(Message {
        message: format!("employee {id} deleted"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_zero_and_garbage() {
        assert!(parse_id("0").is_err());
        assert!(parse_id("-1").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
    }
}
