// bluetick/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use bluetick::config::{AppConfig, LogFormat};
use bluetick::state::AppState;
use bluetick::store::SiteStore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use bluetick::web::configure_app_routes;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE);
  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}

/// Periodically drops visitor sessions that have gone idle.
fn spawn_session_sweeper(store: Arc<SiteStore>) {
  let every = store.session_ttl().min(Duration::from_secs(60));
  actix_rt::spawn(async move {
    let mut ticker = tokio::time::interval(every);
    loop {
      ticker.tick().await;
      store.evict_idle(Instant::now());
    }
  });
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      eprintln!("Configuration error: {}", e);
      std::process::exit(1);
    }
  };
  init_tracing(app_config.log_format);
  tracing::info!("Application configuration loaded successfully.");
  tracing::info!("Starting bluetick server...");

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  let app_state = match AppState::new(app_config) {
    Ok(state) => state,
    Err(e) => {
      tracing::error!(error = %e, "Failed to build application state.");
      std::process::exit(1);
    }
  };
  spawn_session_sweeper(app_state.store.clone());
  tracing::info!(
    session_ttl_secs = app_state.config.session_ttl.as_secs(),
    redirect_url = %app_state.config.checkout_redirect_url,
    "Flows registered, binding server to {}...",
    server_address
  );

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
