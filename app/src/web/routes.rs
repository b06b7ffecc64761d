// bluetick/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{
  admin_handlers, ai_handlers, article_handlers, catalog_handlers, checkout_handlers, reader_handlers, studio_handlers,
};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .route("/sections", web::get().to(catalog_handlers::list_sections_handler))
      .service(
        web::scope("/packages")
          .route("", web::get().to(catalog_handlers::list_packages_handler))
          .route("/{package_id}", web::get().to(catalog_handlers::get_package_handler)),
      )
      .service(
        web::scope("/sessions")
          .route("", web::post().to(catalog_handlers::create_session_handler))
          .route("/theme", web::put().to(catalog_handlers::set_theme_handler)),
      )
      // Everything below needs the X-Session-Id header.
      .service(
        web::scope("/checkout")
          .route("", web::get().to(checkout_handlers::get_checkout_handler))
          .route("/select", web::post().to(checkout_handlers::select_package_handler))
          .route("/draft", web::patch().to(checkout_handlers::update_draft_handler))
          .route("/submit", web::post().to(checkout_handlers::submit_checkout_handler)),
      )
      .service(
        web::scope("/studio")
          .route("", web::get().to(studio_handlers::studio_state_handler))
          .route("/jobs", web::get().to(studio_handlers::studio_state_handler))
          .route("/files", web::post().to(studio_handlers::upload_files_handler))
          .route("/process", web::post().to(studio_handlers::process_queue_handler))
          .route("/tier", web::put().to(studio_handlers::set_tier_handler))
          .route("/unlock", web::post().to(studio_handlers::unlock_tier_handler))
          .route("/settings", web::put().to(studio_handlers::update_settings_handler)),
      )
      .service(
        web::scope("/articles")
          .route("", web::get().to(article_handlers::list_articles_handler))
          .route("/{article_id}", web::get().to(article_handlers::get_article_handler))
          .route("/{article_id}/utterance", web::get().to(article_handlers::article_utterance_handler)),
      )
      .service(
        web::scope("/reader")
          .route("", web::get().to(reader_handlers::reader_state_handler))
          .route("/listen", web::post().to(reader_handlers::listen_handler))
          .route("/pause", web::post().to(reader_handlers::pause_handler))
          .route("/resume", web::post().to(reader_handlers::resume_handler))
          .route("/stop", web::post().to(reader_handlers::stop_handler))
          .route("/language", web::put().to(reader_handlers::set_language_handler)),
      )
      .service(
        web::scope("/admin")
          .route("/login", web::post().to(admin_handlers::login_handler))
          .route("/logout", web::post().to(admin_handlers::logout_handler))
          .route("/panel", web::get().to(admin_handlers::panel_handler))
          .route("/tab", web::put().to(admin_handlers::set_tab_handler))
          .route("/editor", web::put().to(admin_handlers::update_editor_handler))
          .route("/notes", web::get().to(admin_handlers::list_notes_handler))
          .route("/notes", web::post().to(admin_handlers::post_note_handler))
          .route("/articles", web::post().to(admin_handlers::save_article_handler))
          .route("/articles/{article_id}", web::delete().to(admin_handlers::delete_article_handler))
          .route("/quick/{action}", web::post().to(admin_handlers::quick_action_handler)),
      )
      .service(
        web::scope("/ai")
          .route("/copy", web::post().to(ai_handlers::copy_handler))
          .route("/infographic/article", web::post().to(ai_handlers::article_infographic_handler))
          .route("/infographic/repo", web::post().to(ai_handlers::repo_infographic_handler))
          .route("/image/edit", web::post().to(ai_handlers::image_edit_handler)),
      ),
  );
}
