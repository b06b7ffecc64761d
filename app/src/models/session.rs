// bluetick/src/models/session.rs

use std::sync::Arc;

use super::admin::AdminPanel;
use super::fashion_job::{FashionJob, Tier};
use super::order::CheckoutState;
use super::site::Theme;
use crate::reader::ReaderSession;

/// Studio settings and queue of one visitor.
#[derive(Debug, Clone)]
pub struct StudioState {
  /// Replaced wholesale on every change.
  pub jobs: Arc<Vec<FashionJob>>,
  pub tier: Tier,
  pub video_enabled: bool,
  pub model_type: String,
  pub background: String,
}

impl Default for StudioState {
  fn default() -> Self {
    Self {
      jobs: Arc::new(Vec::new()),
      tier: Tier::Free,
      video_enabled: false,
      model_type: "female".to_string(),
      background: "studio".to_string(),
    }
  }
}

/// Everything a visitor's browser tab would otherwise keep to itself.
#[derive(Debug, Clone, Default)]
pub struct VisitorSession {
  pub checkout: CheckoutState,
  pub studio: StudioState,
  pub reader: ReaderSession,
  pub theme: Theme,
  pub admin: AdminPanel,
}
