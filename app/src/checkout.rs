// bluetick/src/checkout.rs

//! Package selection, draft editing and submission for one visitor.

use tickflow::{ContextData, Lifecycle, PipelineResult};
use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result as AppResult};
use crate::models::{find_package, CheckoutDraft, CheckoutPhase, CheckoutView, DraftPatch, OrderSubmission};
use crate::pipelines::contexts::CheckoutCtxData;
use crate::state::AppState;
use crate::store::SessionHandle;

pub fn view(session: &SessionHandle) -> CheckoutView {
  let guard = session.read();
  let checkout = &guard.checkout;
  CheckoutView {
    phase: checkout.phase,
    package: checkout.selected_package.as_deref().and_then(find_package).cloned(),
    draft: checkout.draft.clone(),
    submission: checkout.last_submission.clone(),
  }
}

/// Selects a catalog package and starts a fresh draft for it.
///
/// Allowed while collecting or after a hand-off, never while a submission is
/// in flight. An unknown id leaves the current selection and draft as they were.
#[instrument(name = "checkout::select_package", skip(session))]
pub fn select_package(session: &SessionHandle, package_id: &str) -> AppResult<CheckoutView> {
  let package = find_package(package_id).ok_or_else(|| {
    warn!("Unknown package selected.");
    AppError::NotFound(format!("Package '{}' not found", package_id))
  })?;

  session.update(|s| {
    let phase = s.checkout.phase;
    if phase == CheckoutPhase::Submitting {
      warn!("Package re-selected while an order is being submitted.");
      return Err(AppError::InvalidTransition {
        from: phase.label().to_string(),
        to: CheckoutPhase::Collecting.label().to_string(),
      });
    }
    s.checkout.phase = CheckoutPhase::Collecting;
    s.checkout.selected_package = Some(package.id.clone());
    s.checkout.draft = Some(CheckoutDraft::for_package(package.id.clone()));
    s.checkout.last_submission = None;
    Ok(())
  })?;
  info!(price = package.price, "Package selected.");
  Ok(view(session))
}

#[instrument(name = "checkout::update_draft", skip_all)]
pub fn update_draft(session: &SessionHandle, patch: DraftPatch) -> AppResult<CheckoutView> {
  session.update(|s| {
    let phase = s.checkout.phase;
    if phase != CheckoutPhase::Collecting {
      return Err(AppError::InvalidTransition {
        from: phase.label().to_string(),
        to: CheckoutPhase::Collecting.label().to_string(),
      });
    }
    let draft = s
      .checkout
      .draft
      .as_mut()
      .ok_or_else(|| AppError::Validation("Select a package first.".to_string()))?;
    patch.apply(draft);
    Ok(())
  })?;
  Ok(view(session))
}

/// Runs the checkout flow for the visitor's current draft.
#[instrument(name = "checkout::submit", skip_all)]
pub async fn submit_checkout(app_state: &AppState, session: &SessionHandle) -> AppResult<OrderSubmission> {
  let ctx_data = ContextData::new(CheckoutCtxData::new(app_state.clone(), session.clone()));

  let result = app_state.flows.run(ctx_data.clone()).await?;
  let submission = ctx_data.read().submission.clone();
  match result {
    PipelineResult::Completed => submission.ok_or_else(|| {
      warn!("Checkout flow completed without producing a submission.");
      AppError::Internal("Checkout completed, but the submission is unavailable.".to_string())
    }),
    PipelineResult::Stopped => {
      warn!("Checkout flow was stopped by a handler.");
      Err(AppError::Internal("Checkout was halted.".to_string()))
    }
  }
}
