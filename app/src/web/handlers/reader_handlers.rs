// bluetick/src/web/handlers/reader_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::time::Instant;
use tracing::instrument;

use crate::errors::AppError;
use crate::reader::Language;
use crate::state::AppState;
use crate::web::extractors::Visitor;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenPayload {
  pub article_id: String,
  pub language: Option<Language>,
}

#[instrument(name = "handler::reader_listen", skip_all, fields(session_id = %visitor.session_id, article_id = %payload.article_id))]
pub async fn listen_handler(
  app_state: web::Data<AppState>,
  visitor: Visitor,
  payload: web::Json<ListenPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  let article = app_state.store.article(&payload.article_id)?;
  let reader = visitor.session.update(|s| {
    if let Some(language) = payload.language {
      s.reader.set_language(language);
    }
    s.reader.listen(&article, Instant::now());
    s.reader.clone()
  });
  Ok(HttpResponse::Ok().json(reader))
}

pub async fn pause_handler(app_state: web::Data<AppState>, visitor: Visitor) -> Result<HttpResponse, AppError> {
  let rate = app_state.config.reader_scroll_px_per_sec;
  let reader = visitor.session.update(|s| {
    s.reader.pause(Instant::now(), rate)?;
    Ok::<_, AppError>(s.reader.clone())
  })?;
  Ok(HttpResponse::Ok().json(reader))
}

pub async fn resume_handler(visitor: Visitor) -> Result<HttpResponse, AppError> {
  let reader = visitor.session.update(|s| {
    s.reader.resume(Instant::now())?;
    Ok::<_, AppError>(s.reader.clone())
  })?;
  Ok(HttpResponse::Ok().json(reader))
}

pub async fn stop_handler(visitor: Visitor) -> HttpResponse {
  let reader = visitor.session.update(|s| {
    s.reader.stop();
    s.reader.clone()
  });
  HttpResponse::Ok().json(reader)
}

#[derive(Debug, Deserialize)]
pub struct LanguagePayload {
  pub language: Language,
}

pub async fn set_language_handler(visitor: Visitor, payload: web::Json<LanguagePayload>) -> HttpResponse {
  let reader = visitor.session.update(|s| {
    s.reader.set_language(payload.language);
    s.reader.clone()
  });
  HttpResponse::Ok().json(reader)
}

/// Current reader state with the scroll offset brought up to now.
pub async fn reader_state_handler(app_state: web::Data<AppState>, visitor: Visitor) -> HttpResponse {
  let rate = app_state.config.reader_scroll_px_per_sec;
  let reader = visitor.session.update(|s| {
    s.reader.sync(Instant::now(), rate);
    s.reader.clone()
  });
  HttpResponse::Ok().json(reader)
}
