// bluetick/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use tickflow::FlowError;

use crate::ai::CapabilityError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  /// The visitor's tier does not include the requested feature.
  #[error("Not Entitled: {0}")]
  Entitlement(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Illegal state change from '{from}' to '{to}'")]
  InvalidTransition { from: String, to: String },

  #[error("AI Capability Error: {0}")]
  Capability(#[from] CapabilityError),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Workflow Error: {source}")]
  Workflow { source: FlowError },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<FlowError> for AppError {
  fn from(err: FlowError) -> Self {
    match err {
      FlowError::InvalidTransition { from, to } => AppError::InvalidTransition { from, to },
      other => AppError::Workflow { source: other },
    }
  }
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<AppError>() {
      Ok(app_err) => app_err,
      Err(other) => AppError::Internal(other.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Auth(_) => StatusCode::UNAUTHORIZED,
      AppError::Entitlement(_) => StatusCode::FORBIDDEN,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::InvalidTransition { .. } => StatusCode::CONFLICT,
      AppError::Capability(_) => StatusCode::BAD_GATEWAY,
      AppError::Config(_) | AppError::Workflow { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    tracing::error!(application_error = %self, "Responding with error");
    let body = match self {
      AppError::Validation(m) | AppError::Auth(m) | AppError::Entitlement(m) | AppError::NotFound(m) => {
        json!({"error": m})
      }
      AppError::InvalidTransition { from, to } => json!({
        "error": "Request does not fit the current state",
        "detail": format!("{} -> {}", from, to),
      }),
      AppError::Capability(e) => json!({"error": "AI service error", "detail": e.to_string()}),
      AppError::Config(m) => json!({"error": "Configuration issue", "detail": m}),
      AppError::Workflow { source } => {
        tracing::error!(flow_error_source = ?source, "Workflow error details");
        json!({"error": "Workflow processing error", "detail": source.to_string()})
      }
      AppError::Internal(m) => json!({"error": "An internal error occurred", "detail": m}),
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_transition_maps_to_conflict() {
    let err = AppError::from(FlowError::InvalidTransition {
      from: "redirecting".into(),
      to: "submitting".into(),
    });
    assert!(matches!(err, AppError::InvalidTransition { .. }));
    assert_eq!(err.status_code(), StatusCode::CONFLICT);
  }

  #[test]
  fn other_flow_errors_are_workflow_errors() {
    let err = AppError::from(FlowError::Internal("x".into()));
    assert!(matches!(err, AppError::Workflow { .. }));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn anyhow_keeps_wrapped_app_errors() {
    let wrapped = anyhow::Error::new(AppError::NotFound("pkg".into()));
    assert!(matches!(AppError::from(wrapped), AppError::NotFound(_)));
  }
}
