// bluetick/src/pipelines/contexts.rs

//! Data structs the flows run over. Handlers receive them wrapped in
//! `tickflow::ContextData`.

use chrono::{DateTime, Utc};

use crate::ai::{Capabilities, GeneratedImage, GeneratedVideo};
use crate::models::{CheckoutDraft, OrderSubmission, Package, Tier};
use crate::services::notify_mock::OrderNotification;
use crate::state::AppState;
use crate::store::SessionHandle;

/// One checkout submission.
#[derive(Clone)]
pub struct CheckoutCtxData {
  pub app_state: AppState,
  pub session: SessionHandle,
  /// Copied out of the session by `validate_draft`.
  pub draft: Option<CheckoutDraft>,
  pub package: Option<Package>,
  pub order_id: Option<String>,
  pub submitted_at: Option<DateTime<Utc>>,
  pub notification: Option<OrderNotification>,
  pub delivered: bool,
  pub submission: Option<OrderSubmission>,
}

impl CheckoutCtxData {
  pub fn new(app_state: AppState, session: SessionHandle) -> Self {
    Self {
      app_state,
      session,
      draft: None,
      package: None,
      order_id: None,
      submitted_at: None,
      notification: None,
      delivered: false,
      submission: None,
    }
  }
}

/// One fashion job's unit of work.
#[derive(Clone)]
pub struct FashionJobCtxData {
  pub capabilities: Capabilities,
  pub job_id: String,
  pub source_image: String,
  pub model_type: String,
  pub background: String,
  pub tier: Tier,
  pub want_video: bool,
  pub generated_image: Option<GeneratedImage>,
  pub generated_video: Option<GeneratedVideo>,
}
