// bluetick/src/services/notify_mock.rs

//! Stand-in for the form-mailer the order summary is posted to.

use crate::errors::{AppError, Result as AppResult};
use std::time::Duration;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct OrderNotification {
  pub to: String,
  pub from: String,
  pub subject: String,
  pub html_body: String,
}

#[derive(Debug)]
pub struct DeliveryReceipt {
  pub message_id: String,
  pub body_preview: String,
}

#[instrument(name = "notify_mock::deliver", skip(notification), fields(to = %notification.to, subject = %notification.subject))]
pub async fn deliver(notification: &OrderNotification, delay: Duration, simulate_failure: bool) -> AppResult<DeliveryReceipt> {
  info!("Simulating order notification delivery.");
  tokio::time::sleep(delay).await;

  if simulate_failure {
    warn!("Simulated order notification failure.");
    return Err(AppError::Internal("Simulated notification delivery failure".to_string()));
  }

  let body_preview = notification.html_body.chars().take(50).collect::<String>() + "...";
  let message_id = format!("mock_notify_{}", uuid::Uuid::new_v4());
  info!(%message_id, "Mock order notification delivered.");
  Ok(DeliveryReceipt { message_id, body_preview })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> OrderNotification {
    OrderNotification {
      to: "orders@bluetick.example".into(),
      from: "noreply@bluetick.example".into(),
      subject: "New order VIP-000001".into(),
      html_body: "<h2>New order</h2>".into(),
    }
  }

  #[tokio::test]
  async fn delivery_succeeds_unless_failure_is_simulated() {
    let receipt = deliver(&sample(), Duration::ZERO, false).await.unwrap();
    assert!(receipt.message_id.starts_with("mock_notify_"));
    let err = deliver(&sample(), Duration::ZERO, true).await.unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));
  }
}
