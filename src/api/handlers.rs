//! API handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::api::{AppState, CUSTOMER_PATH};
use crate::types::{Customer, CustomerDto};
use crate::validation::validate_customer;
use crate::Error;

/// Health check with store status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.backend_name().to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: String,
}

/// Fetch a customer by id
pub async fn get_customer(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Customer>, ApiError> {
    let id = path_id(path)?;
    let customer = state.store.get_by_id(id).await?;

    tracing::debug!(%id, "Fetched customer");
    Ok(Json(customer))
}

/// Create a customer
///
/// Responds 201 with an empty body and a `Location` header pointing at the
/// newly issued id.
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<Response, ApiError> {
    let dto = checked_payload(payload)?;
    let customer = state.store.create(dto).await?;

    tracing::info!(id = %customer.id, "Created customer");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{}/{}", CUSTOMER_PATH, customer.id))],
    )
        .into_response())
}

/// Update a customer; the id comes from the path, never the body
pub async fn update_customer(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(path)?;
    let dto = checked_payload(payload)?;
    state.store.update(id, dto).await?;

    tracing::info!(%id, "Updated customer");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a customer
pub async fn delete_customer(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(path)?;
    state.store.delete(id).await?;

    tracing::info!(%id, "Deleted customer");
    Ok(StatusCode::NO_CONTENT)
}

fn path_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, ApiError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "Rejected customer id");
            Err(ApiError::bad_request("id", rejection.body_text()))
        }
    }
}

/// Decode and validate a customer payload. Nothing reaches the store unless
/// this succeeds.
fn checked_payload(
    payload: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<CustomerDto, ApiError> {
    let Json(dto) = payload.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "Rejected customer payload");
        ApiError::bad_request("body", rejection.body_text())
    })?;

    if let Err(err) = validate_customer(&dto) {
        tracing::warn!(field = err.field, error = %err, "Customer failed validation");
        return Err(Error::Validation(err).into());
    }

    Ok(dto)
}

/// Error response carrying a JSON array of `"<field> : <message>"` strings.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    messages: Vec<String>,
}

impl ApiError {
    fn new(status: StatusCode, field: &str, message: impl std::fmt::Display) -> Self {
        Self {
            status,
            messages: vec![format!("{} : {}", field, message)],
        }
    }

    fn bad_request(field: &str, message: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::BAD_REQUEST, field, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(violation) => Self {
                status: StatusCode::BAD_REQUEST,
                messages: vec![violation.to_string()],
            },
            Error::NotFound(id) => Self::new(
                StatusCode::NOT_FOUND,
                "id",
                format!("customer {} not found", id),
            ),
            other => {
                tracing::error!(error = %other, "Customer store failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", other)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.messages)).into_response()
    }
}
