// bluetick/src/web/handlers/ai_handlers.rs

//! Direct access to the AI demo capabilities.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::ai::{ArticleInfographicRequest, Capability, CopyRequest, ImageEditRequest, RepoInfographicRequest};
use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::ai_copy", skip_all)]
pub async fn copy_handler(app_state: web::Data<AppState>, req: web::Json<CopyRequest>) -> Result<HttpResponse, AppError> {
  let text = app_state.capabilities.copywriter.invoke(req.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "text": text })))
}

#[instrument(name = "handler::ai_article_infographic", skip_all)]
pub async fn article_infographic_handler(
  app_state: web::Data<AppState>,
  req: web::Json<ArticleInfographicRequest>,
) -> Result<HttpResponse, AppError> {
  let infographic = app_state.capabilities.article_infographic.invoke(req.into_inner()).await?;
  Ok(HttpResponse::Ok().json(infographic))
}

#[instrument(name = "handler::ai_repo_infographic", skip_all)]
pub async fn repo_infographic_handler(
  app_state: web::Data<AppState>,
  req: web::Json<RepoInfographicRequest>,
) -> Result<HttpResponse, AppError> {
  let image = app_state.capabilities.repo_infographic.invoke(req.into_inner()).await?;
  Ok(HttpResponse::Ok().json(image))
}

#[instrument(name = "handler::ai_image_edit", skip_all)]
pub async fn image_edit_handler(
  app_state: web::Data<AppState>,
  req: web::Json<ImageEditRequest>,
) -> Result<HttpResponse, AppError> {
  let image = app_state.capabilities.image_editor.invoke(req.into_inner()).await?;
  Ok(HttpResponse::Ok().json(image))
}
