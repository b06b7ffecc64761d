// bluetick/src/web/handlers/admin_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::admin;
use crate::errors::AppError;
use crate::models::{AdminTab, ArticleDraft, QuickAction};
use crate::state::AppState;
use crate::web::extractors::Visitor;

#[derive(Deserialize)]
pub struct LoginPayload {
  pub password: String,
}

#[instrument(name = "handler::admin_login", skip_all, fields(session_id = %visitor.session_id))]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  visitor: Visitor,
  payload: web::Json<LoginPayload>,
) -> Result<HttpResponse, AppError> {
  admin::login(app_state.get_ref(), &visitor.session, &payload.password)?;
  Ok(HttpResponse::Ok().json(json!({ "authenticated": true })))
}

pub async fn logout_handler(visitor: Visitor) -> HttpResponse {
  admin::logout(&visitor.session);
  HttpResponse::NoContent().finish()
}

pub async fn panel_handler(app_state: web::Data<AppState>, visitor: Visitor) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(admin::panel(&app_state.store, &visitor.session)?))
}

pub async fn list_notes_handler(app_state: web::Data<AppState>, visitor: Visitor) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(admin::notes(&app_state.store, &visitor.session)?))
}

#[derive(Debug, Deserialize)]
pub struct NotePayload {
  pub text: String,
}

pub async fn post_note_handler(
  app_state: web::Data<AppState>,
  visitor: Visitor,
  payload: web::Json<NotePayload>,
) -> Result<HttpResponse, AppError> {
  let note = admin::post_note(&app_state.store, &visitor.session, &payload.text)?;
  Ok(HttpResponse::Created().json(note))
}

/// Body `{"draft": {...}}`; without a draft the editor contents are published.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SaveArticlePayload {
  pub draft: Option<ArticleDraft>,
}

#[instrument(name = "handler::save_article", skip_all, fields(session_id = %visitor.session_id))]
pub async fn save_article_handler(
  app_state: web::Data<AppState>,
  visitor: Visitor,
  payload: web::Json<SaveArticlePayload>,
) -> Result<HttpResponse, AppError> {
  let article = admin::save_article(&app_state.store, &visitor.session, payload.into_inner().draft)?;
  Ok(HttpResponse::Created().json(article))
}

pub async fn delete_article_handler(
  app_state: web::Data<AppState>,
  visitor: Visitor,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  admin::delete_article(&app_state.store, &visitor.session, &path.into_inner())?;
  Ok(HttpResponse::NoContent().finish())
}

pub async fn update_editor_handler(visitor: Visitor, payload: web::Json<ArticleDraft>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(admin::update_editor(&visitor.session, payload.into_inner())?))
}

#[derive(Debug, Deserialize)]
pub struct TabPayload {
  pub tab: AdminTab,
}

pub async fn set_tab_handler(visitor: Visitor, payload: web::Json<TabPayload>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(admin::set_tab(&visitor.session, payload.tab)?))
}

/// `action` is `voice-post` or `new-article`.
#[instrument(name = "handler::quick_action", skip(visitor), fields(session_id = %visitor.session_id))]
pub async fn quick_action_handler(visitor: Visitor, path: web::Path<String>) -> Result<HttpResponse, AppError> {
  let slug = path.into_inner();
  let action = QuickAction::from_slug(&slug).ok_or_else(|| AppError::NotFound(format!("Unknown quick action '{}'", slug)))?;
  Ok(HttpResponse::Ok().json(admin::quick_action(&visitor.session, action)?))
}
