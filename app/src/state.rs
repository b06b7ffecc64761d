// bluetick/src/state.rs

use std::sync::Arc;
use tickflow::Flows;

use crate::ai::Capabilities;
use crate::config::AppConfig;
use crate::errors::{AppError, Result as AppResult};
use crate::pipelines;
use crate::services::admin_credential::AdminCredential;
use crate::services::order_ids::OrderIdGenerator;
use crate::store::SiteStore;

#[derive(Clone)]
pub struct AppState {
  pub flows: Arc<Flows<AppError>>,
  pub config: Arc<AppConfig>,
  pub store: Arc<SiteStore>,
  pub capabilities: Capabilities,
  pub admin_credential: AdminCredential,
  pub order_ids: Arc<OrderIdGenerator>,
}

impl AppState {
  /// Mock AI capabilities and a store seeded with the launch articles.
  pub fn new(config: AppConfig) -> AppResult<Self> {
    let capabilities = Capabilities::mock(config.ai_delay);
    Self::with_parts(config, SiteStore::seeded(), capabilities)
  }

  pub fn with_parts(mut config: AppConfig, store: SiteStore, capabilities: Capabilities) -> AppResult<Self> {
    let admin_credential = AdminCredential::from_plain(&config.admin_password)?;
    config.admin_password.clear();
    let store = store.with_session_ttl(config.session_ttl);
    let flows = Arc::new(Flows::<AppError>::new());
    pipelines::register_all_pipelines(&flows);

    Ok(Self {
      flows,
      config: Arc::new(config),
      store: Arc::new(store),
      capabilities,
      admin_credential,
      order_ids: Arc::new(OrderIdGenerator::new()),
    })
  }
}
