// bluetick/src/web/handlers/studio_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, Instrument};

use crate::errors::AppError;
use crate::models::{Tier, UploadedFile};
use crate::state::AppState;
use crate::studio::{self, StudioSettings};
use crate::web::extractors::Visitor;

#[derive(Debug, Deserialize)]
pub struct UploadPayload {
  pub files: Vec<UploadedFile>,
}

#[instrument(name = "handler::upload_files", skip_all, fields(session_id = %visitor.session_id))]
pub async fn upload_files_handler(visitor: Visitor, payload: web::Json<UploadPayload>) -> HttpResponse {
  let jobs = studio::enqueue_files(&visitor.session, payload.into_inner().files);
  HttpResponse::Created().json(json!({ "jobs": jobs }))
}

/// Starts the batch and answers right away; poll `GET /studio/jobs` for
/// results. Running jobs can't be cancelled.
#[instrument(name = "handler::process_queue", skip_all, fields(session_id = %visitor.session_id))]
pub async fn process_queue_handler(app_state: web::Data<AppState>, visitor: Visitor) -> Result<HttpResponse, AppError> {
  let items = studio::start_processing(&visitor.session)?;
  let job_ids: Vec<String> = items.iter().map(|i| i.job_id.clone()).collect();

  if !items.is_empty() {
    let batch = studio::run_batch(app_state.get_ref().clone(), visitor.session.clone(), items);
    tokio::spawn(batch.in_current_span());
    info!(jobs = job_ids.len(), "Batch dispatched.");
  }
  Ok(HttpResponse::Accepted().json(json!({ "started": job_ids })))
}

pub async fn studio_state_handler(visitor: Visitor) -> HttpResponse {
  HttpResponse::Ok().json(studio::view(&visitor.session))
}

#[derive(Debug, Deserialize)]
pub struct TierPayload {
  pub tier: Tier,
}

pub async fn set_tier_handler(visitor: Visitor, payload: web::Json<TierPayload>) -> HttpResponse {
  HttpResponse::Ok().json(studio::set_tier(&visitor.session, payload.tier))
}

#[derive(Debug, Deserialize)]
pub struct UnlockPayload {
  pub code: String,
}

pub async fn unlock_tier_handler(
  app_state: web::Data<AppState>,
  visitor: Visitor,
  payload: web::Json<UnlockPayload>,
) -> Result<HttpResponse, AppError> {
  let view = studio::unlock_tier(app_state.get_ref(), &visitor.session, &payload.code)?;
  Ok(HttpResponse::Ok().json(view))
}

pub async fn update_settings_handler(visitor: Visitor, payload: web::Json<StudioSettings>) -> HttpResponse {
  HttpResponse::Ok().json(studio::update_settings(&visitor.session, payload.into_inner()))
}
