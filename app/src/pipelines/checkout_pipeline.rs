// bluetick/src/pipelines/checkout_pipeline.rs

use chrono::Utc;
use std::sync::Arc;
use tickflow::{advance, ContextData, Flows, Lifecycle, Pipeline, PipelineControl};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{find_package, CheckoutPhase, OrderSubmission};
use crate::pipelines::contexts::CheckoutCtxData;
use crate::services::markdown::escape_text;
use crate::services::notify_mock::{self, OrderNotification};

pub const SUCCESS_MESSAGE_SUFFIX: &str = "received! Redirecting you to complete payment...";
pub const FAILURE_MESSAGE: &str =
  "We could not confirm your order right now. Redirecting you to complete it on our secure form...";

pub fn register_checkout_pipeline(flows: &Arc<Flows<AppError>>) {
  let mut p = Pipeline::<CheckoutCtxData, AppError>::new(&[
    ("validate_draft", false, None),
    ("begin_submission", false, None),
    ("assign_order_id", false, None),
    ("compose_notification", false, None),
    ("deliver_notification", false, None),
    ("prepare_redirect", false, None),
  ]);

  // Submitting is only possible while the form is still being collected.
  p.before_root("validate_draft", |ctx_data: ContextData<CheckoutCtxData>| {
    Box::pin(async move {
      let session = ctx_data.read().session.clone();
      let phase = session.read().checkout.phase;
      if !phase.can_advance_to(CheckoutPhase::Submitting) {
        warn!(phase = phase.label(), "Checkout submitted outside the collecting phase.");
        return Err(AppError::InvalidTransition {
          from: phase.label().to_string(),
          to: CheckoutPhase::Submitting.label().to_string(),
        });
      }
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  p.on_root("validate_draft", |ctx_data: ContextData<CheckoutCtxData>| {
    Box::pin(async move {
      let session = ctx_data.read().session.clone();
      let draft = session.read().checkout.draft.clone();
      let draft = draft.ok_or_else(|| AppError::Validation("Select a package before submitting.".to_string()))?;

      let package = find_package(&draft.package_id)
        .cloned()
        .ok_or_else(|| AppError::Validation(format!("Package '{}' is not in the catalog.", draft.package_id)))?;

      let invalid = draft.invalid_fields();
      if !invalid.is_empty() {
        info!(fields = ?invalid, "Checkout draft failed validation.");
        return Err(AppError::Validation(format!("Missing or invalid fields: {}", invalid.join(", "))));
      }

      let mut guard = ctx_data.write();
      guard.draft = Some(draft);
      guard.package = Some(package);
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  p.on_root("begin_submission", |ctx_data: ContextData<CheckoutCtxData>| {
    Box::pin(async move {
      let session = ctx_data.read().session.clone();
      session.update(|s| advance(&mut s.checkout.phase, CheckoutPhase::Submitting))?;
      info!("Checkout moved to submitting.");
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  p.on_root("assign_order_id", |ctx_data: ContextData<CheckoutCtxData>| {
    Box::pin(async move {
      let order_id = ctx_data.read().app_state.order_ids.next_id();
      info!(%order_id, "Order id assigned.");
      let mut guard = ctx_data.write();
      guard.order_id = Some(order_id);
      guard.submitted_at = Some(Utc::now());
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  p.on_root("compose_notification", |ctx_data: ContextData<CheckoutCtxData>| {
    Box::pin(async move {
      let notification = {
        let guard = ctx_data.read();
        let (Some(draft), Some(package), Some(order_id)) = (&guard.draft, &guard.package, &guard.order_id) else {
          return Err(AppError::Internal("Checkout context incomplete before composing notification.".to_string()));
        };
        let config = &guard.app_state.config;
        let optional = |v: &str| if v.trim().is_empty() { "-".to_string() } else { escape_text(v.trim()) };
        let rows = [
          ("Order ID", escape_text(order_id)),
          ("Package", escape_text(&package.title)),
          ("Price", package.price_display()),
          ("Full name", escape_text(draft.full_name.trim())),
          ("Email", escape_text(draft.email.trim())),
          ("Phone", escape_text(draft.phone.trim())),
          ("Country", escape_text(draft.country.trim())),
          ("Profile URL", escape_text(draft.profile_url.trim())),
          ("Business Manager ID", optional(&draft.business_manager_id)),
          (
            "Admin access confirmed",
            if draft.admin_access_confirmed { "Yes" } else { "No" }.to_string(),
          ),
          (
            "Payment method",
            draft.payment_method.map(|m| m.label()).unwrap_or("-").to_string(),
          ),
          ("Transaction ID", optional(&draft.transaction_id)),
        ];
        let table: String = rows
          .iter()
          .map(|(k, v)| format!("<tr><th align=\"left\">{}</th><td>{}</td></tr>", k, v))
          .collect();
        OrderNotification {
          to: config.order_notify_address.clone(),
          from: config.order_notify_sender.clone(),
          subject: format!("New verification order {} ({})", order_id, package.title),
          html_body: format!("<h2>New order {}</h2><table>{}</table>", escape_text(order_id), table),
        }
      };
      ctx_data.write().notification = Some(notification);
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  // Delivery failures are logged and masked; the visitor is redirected anyway.
  p.on_root("deliver_notification", |ctx_data: ContextData<CheckoutCtxData>| {
    Box::pin(async move {
      let (notification, config) = {
        let guard = ctx_data.read();
        (guard.notification.clone(), guard.app_state.config.clone())
      };
      let notification =
        notification.ok_or_else(|| AppError::Internal("Notification was not composed.".to_string()))?;

      let delivered = match notify_mock::deliver(&notification, config.submit_delay, config.simulate_notify_failure).await {
        Ok(receipt) => {
          info!(message_id = %receipt.message_id, "Order notification delivered.");
          true
        }
        Err(e) => {
          warn!(error = %e, "Order notification failed; redirecting regardless.");
          false
        }
      };
      ctx_data.write().delivered = delivered;
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  p.on_root("prepare_redirect", |ctx_data: ContextData<CheckoutCtxData>| {
    Box::pin(async move {
      let (session, submission) = {
        let guard = ctx_data.read();
        let (Some(order_id), Some(package), Some(submitted_at)) = (&guard.order_id, &guard.package, guard.submitted_at)
        else {
          return Err(AppError::Internal("Checkout context incomplete before redirect.".to_string()));
        };
        let config = &guard.app_state.config;
        let (confirmation_message, delay) = if guard.delivered {
          (format!("Order {} {}", order_id, SUCCESS_MESSAGE_SUFFIX), config.redirect_delay)
        } else {
          (FAILURE_MESSAGE.to_string(), config.failure_redirect_delay)
        };
        let submission = OrderSubmission {
          order_id: order_id.clone(),
          package_id: package.id.clone(),
          confirmation_message,
          redirect_url: config.checkout_redirect_url.clone(),
          redirect_after_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
          delivered: guard.delivered,
          submitted_at,
        };
        (guard.session.clone(), submission)
      };

      session.update(|s| -> Result<(), AppError> {
        advance(&mut s.checkout.phase, CheckoutPhase::Redirecting)?;
        s.checkout.draft = None;
        s.checkout.last_submission = Some(submission.clone());
        Ok(())
      })?;
      info!(
        order_id = %submission.order_id,
        delivered = submission.delivered,
        redirect_url = %submission.redirect_url,
        "Checkout handed off to the external form."
      );
      ctx_data.write().submission = Some(submission);
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  flows.register_pipeline(p);
}
