// bluetick/src/web/extractors.rs

use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::warn;
use uuid::Uuid;

use crate::errors::{AppError, Result as AppResult};
use crate::state::AppState;
use crate::store::SessionHandle;

pub const SESSION_HEADER: &str = "X-Session-Id";

/// The visitor session named by the `X-Session-Id` header.
#[derive(Debug, Clone)]
pub struct Visitor {
  pub session_id: Uuid,
  pub session: SessionHandle,
}

impl FromRequest for Visitor {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    ready(visitor_from(req))
  }
}

fn visitor_from(req: &HttpRequest) -> AppResult<Visitor> {
  let app_state = req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;

  let raw = req
    .headers()
    .get(SESSION_HEADER)
    .and_then(|v| v.to_str().ok())
    .ok_or_else(|| {
      warn!("Visitor extractor: missing {} header.", SESSION_HEADER);
      AppError::Validation(format!("Missing {} header. Create one with POST /api/v1/sessions.", SESSION_HEADER))
    })?;
  let session_id = Uuid::parse_str(raw.trim())
    .map_err(|_| AppError::Validation(format!("Malformed {} header.", SESSION_HEADER)))?;

  let session = app_state.store.session(session_id)?;
  Ok(Visitor { session_id, session })
}
