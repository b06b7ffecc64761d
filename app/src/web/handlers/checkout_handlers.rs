// bluetick/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::checkout;
use crate::errors::AppError;
use crate::models::DraftPatch;
use crate::state::AppState;
use crate::web::extractors::Visitor;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectPackagePayload {
  pub package_id: String,
}

#[instrument(
  name = "handler::select_package",
  skip(visitor, payload),
  fields(session_id = %visitor.session_id, package_id = %payload.package_id)
)]
pub async fn select_package_handler(
  visitor: Visitor,
  payload: web::Json<SelectPackagePayload>,
) -> Result<HttpResponse, AppError> {
  let view = checkout::select_package(&visitor.session, &payload.package_id)?;
  Ok(HttpResponse::Ok().json(view))
}

#[instrument(name = "handler::update_draft", skip_all, fields(session_id = %visitor.session_id))]
pub async fn update_draft_handler(visitor: Visitor, patch: web::Json<DraftPatch>) -> Result<HttpResponse, AppError> {
  let view = checkout::update_draft(&visitor.session, patch.into_inner())?;
  Ok(HttpResponse::Ok().json(view))
}

pub async fn get_checkout_handler(visitor: Visitor) -> HttpResponse {
  HttpResponse::Ok().json(checkout::view(&visitor.session))
}

/// Answers once the order is handed off; the client follows `redirectUrl`
/// after `redirectAfterMs`.
#[instrument(name = "handler::submit_checkout", skip_all, fields(session_id = %visitor.session_id))]
pub async fn submit_checkout_handler(app_state: web::Data<AppState>, visitor: Visitor) -> Result<HttpResponse, AppError> {
  let submission = checkout::submit_checkout(app_state.get_ref(), &visitor.session).await?;
  info!(order_id = %submission.order_id, delivered = submission.delivered, "Checkout submitted.");
  Ok(HttpResponse::Ok().json(submission))
}
