// bluetick/src/web/handlers/article_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::reader::utterance_text;
use crate::services::markdown;
use crate::state::AppState;

pub async fn list_articles_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(app_state.store.articles())
}

/// Counts a view and returns the article with its body parsed into blocks.
#[instrument(name = "handler::get_article", skip(app_state, path))]
pub async fn get_article_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, AppError> {
  let article = app_state.store.record_view(&path.into_inner())?;
  let blocks = markdown::render(&article.body);
  Ok(HttpResponse::Ok().json(json!({ "article": article, "blocks": blocks })))
}

pub async fn article_utterance_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let article = app_state.store.article(&path.into_inner())?;
  Ok(HttpResponse::Ok().json(json!({ "articleId": article.id, "text": utterance_text(&article) })))
}
