use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;

use crate::api::problem::Problem;
use crate::domain::error::DomainError;
use crate::errors::ErrorCode;

/// JSON body extractor whose rejections render as Problem responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Problem))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for Problem {
    fn from(rejection: JsonRejection) -> Self {
        let mut problem = ErrorCode::MalformedRequest.as_problem(rejection.body_text());
        problem.status = rejection.status();
        problem
    }
}

fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

/// Map domain error to RFC 9457 Problem using the error catalog
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = current_trace_id();

    match e {
        DomainError::UnknownMenuItem { name } => ErrorCode::UnknownMenuItem.with_context(
            format!("Menu item '{name}' does not exist"),
            instance,
            trace_id,
        ),
        DomainError::ItemNotFound { id } => ErrorCode::ItemNotFound.with_context(
            format!("Order item {id} not found"),
            instance,
            trace_id,
        ),
        DomainError::InvalidTableNumber { raw } => ErrorCode::InvalidTableNumber.with_context(
            format!("Table number must be a positive integer, got '{raw}'"),
            instance,
            trace_id,
        ),
        DomainError::Validation { field, message } => ErrorCode::Validation.with_context(
            format!("Validation error on '{field}': {message}"),
            instance,
            trace_id,
        ),
        DomainError::Database { .. } => {
            tracing::error!(error = ?e, "Database error occurred");
            ErrorCode::InternalDatabase.with_context(
                "An internal database error occurred",
                instance,
                trace_id,
            )
        }
    }
}

/// Problem for a path segment that is not a valid item id.
pub fn invalid_item_id_problem(raw: &str, instance: &str) -> Problem {
    ErrorCode::InvalidItemId.with_context(
        format!("'{raw}' is not a valid item id"),
        instance,
        current_trace_id(),
    )
}
