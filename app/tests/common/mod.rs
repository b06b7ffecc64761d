// tests/common/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use bluetick::ai::{Capabilities, Capability, CapabilityError, GeneratedImage, TryOnRequest};
use bluetick::config::AppConfig;
use bluetick::models::{DraftPatch, PaymentMethod};
use bluetick::state::AppState;
use bluetick::store::SiteStore;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const REDIRECT_URL: &str = "https://forms.example.com/test-verification-order";
pub const UNLOCK_CODE: &str = "LETMEULTRA";

/// Zero simulated latency; redirect delays keep distinct values so tests can
/// tell the success and failure paths apart.
pub fn test_config(overrides: &[(&str, &str)]) -> AppConfig {
  let mut vars: HashMap<String, String> = [
    ("ADMIN_PASSWORD", ADMIN_PASSWORD),
    ("CHECKOUT_REDIRECT_URL", REDIRECT_URL),
    ("TIER_UNLOCK_CODE", UNLOCK_CODE),
    ("SUBMIT_DELAY_MS", "0"),
    ("AI_DELAY_MS", "0"),
    ("REDIRECT_DELAY_MS", "2000"),
    ("FAILURE_REDIRECT_DELAY_MS", "1000"),
  ]
  .iter()
  .map(|(k, v)| (k.to_string(), v.to_string()))
  .collect();
  for (k, v) in overrides {
    vars.insert(k.to_string(), v.to_string());
  }
  AppConfig::from_lookup(|name| vars.get(name).cloned()).expect("test config should be valid")
}

pub fn test_state() -> AppState {
  AppState::new(test_config(&[])).expect("state should build")
}

pub fn state_with_failing_notifications() -> AppState {
  AppState::new(test_config(&[("SIMULATE_NOTIFY_FAILURE", "true")])).expect("state should build")
}

/// Try-on capability that fails for any image whose reference contains
/// `corrupt`, and otherwise echoes a fixed result.
pub struct PickyTryOn;

#[async_trait]
impl Capability<TryOnRequest> for PickyTryOn {
  type Output = GeneratedImage;

  async fn invoke(&self, req: TryOnRequest) -> Result<GeneratedImage, CapabilityError> {
    if req.image.contains("corrupt") {
      return Err(CapabilityError::Unavailable("model crashed".to_string()));
    }
    Ok(GeneratedImage {
      url: format!("https://cdn.test/look-for-{}", req.image.len()),
      mime_type: "image/png".to_string(),
    })
  }
}

pub fn state_with_picky_try_on() -> AppState {
  let mut capabilities = Capabilities::mock(Duration::ZERO);
  capabilities.try_on = Arc::new(PickyTryOn);
  AppState::with_parts(test_config(&[]), SiteStore::seeded(), capabilities).expect("state should build")
}

pub fn complete_patch() -> DraftPatch {
  DraftPatch {
    full_name: Some("Ayesha Khan".to_string()),
    email: Some("ayesha@example.com".to_string()),
    phone: Some("+92 300 1234567".to_string()),
    country: Some("Pakistan".to_string()),
    profile_url: Some("https://instagram.com/ayesha.k".to_string()),
    admin_access_confirmed: Some(true),
    payment_method: Some(PaymentMethod::EasyPaisa),
    ..Default::default()
  }
}

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
