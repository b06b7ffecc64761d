// bluetick/src/web/handlers/catalog_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{catalog, find_package, Section, Theme};
use crate::state::AppState;
use crate::web::extractors::Visitor;

pub async fn list_sections_handler() -> HttpResponse {
  let sections: Vec<_> = Section::ALL
    .iter()
    .map(|s| json!({ "section": s, "anchor": format!("#{}", s.anchor()) }))
    .collect();
  HttpResponse::Ok().json(sections)
}

pub async fn list_packages_handler() -> HttpResponse {
  HttpResponse::Ok().json(catalog())
}

#[instrument(name = "handler::get_package", skip(path))]
pub async fn get_package_handler(path: web::Path<String>) -> Result<HttpResponse, AppError> {
  let package_id = path.into_inner();
  let package = find_package(&package_id).ok_or_else(|| AppError::NotFound(format!("Package '{}' not found", package_id)))?;
  Ok(HttpResponse::Ok().json(package))
}

#[instrument(name = "handler::create_session", skip(app_state))]
pub async fn create_session_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let (session_id, _) = app_state.store.create_session();
  info!(%session_id, "New visitor session.");
  HttpResponse::Created().json(json!({ "sessionId": session_id }))
}

#[derive(Debug, Deserialize)]
pub struct ThemePayload {
  pub theme: Theme,
}

pub async fn set_theme_handler(visitor: Visitor, payload: web::Json<ThemePayload>) -> HttpResponse {
  let theme = payload.into_inner().theme;
  visitor.session.update(|s| s.theme = theme);
  HttpResponse::Ok().json(json!({ "theme": theme }))
}
