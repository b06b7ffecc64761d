// bluetick/src/models/order.rs

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tickflow::Lifecycle;

use super::package::Package;

static EMAIL: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s.][^@\s]*\.[^@\s]*[^@\s.]$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
  Card,
  EasyPaisa,
  JazzCash,
  Bank,
  Crypto,
}

impl PaymentMethod {
  pub fn label(self) -> &'static str {
    match self {
      PaymentMethod::Card => "Credit / Debit Card",
      PaymentMethod::EasyPaisa => "EasyPaisa",
      PaymentMethod::JazzCash => "JazzCash",
      PaymentMethod::Bank => "Bank Transfer",
      PaymentMethod::Crypto => "Crypto (USDT)",
    }
  }
}

/// The in-progress order form. Created empty when a package is selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDraft {
  pub package_id: String,
  pub full_name: String,
  pub email: String,
  pub phone: String,
  pub country: String,
  pub profile_url: String,
  pub business_manager_id: String,
  pub admin_access_confirmed: bool,
  pub transaction_id: String,
  pub payment_method: Option<PaymentMethod>,
}

impl CheckoutDraft {
  pub fn for_package(package_id: impl Into<String>) -> Self {
    Self {
      package_id: package_id.into(),
      ..Default::default()
    }
  }

  /// Names of required fields that are empty or malformed, in form order.
  pub fn invalid_fields(&self) -> Vec<&'static str> {
    let mut bad = Vec::new();
    let blank = |s: &str| s.trim().is_empty();
    if blank(&self.full_name) {
      bad.push("fullName");
    }
    if !looks_like_email(&self.email) {
      bad.push("email");
    }
    if blank(&self.phone) {
      bad.push("phone");
    }
    if blank(&self.country) {
      bad.push("country");
    }
    if blank(&self.profile_url) {
      bad.push("profileUrl");
    }
    if self.payment_method.is_none() {
      bad.push("paymentMethod");
    }
    if !self.admin_access_confirmed {
      bad.push("adminAccessConfirmed");
    }
    bad
  }
}

fn looks_like_email(raw: &str) -> bool {
  EMAIL.is_match(raw.trim())
}

/// Field-by-field update of a draft. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatch {
  pub full_name: Option<String>,
  pub email: Option<String>,
  pub phone: Option<String>,
  pub country: Option<String>,
  pub profile_url: Option<String>,
  pub business_manager_id: Option<String>,
  pub admin_access_confirmed: Option<bool>,
  pub transaction_id: Option<String>,
  pub payment_method: Option<PaymentMethod>,
}

impl DraftPatch {
  pub fn apply(self, draft: &mut CheckoutDraft) {
    let DraftPatch {
      full_name,
      email,
      phone,
      country,
      profile_url,
      business_manager_id,
      admin_access_confirmed,
      transaction_id,
      payment_method,
    } = self;
    for (slot, value) in [
      (&mut draft.full_name, full_name),
      (&mut draft.email, email),
      (&mut draft.phone, phone),
      (&mut draft.country, country),
      (&mut draft.profile_url, profile_url),
      (&mut draft.business_manager_id, business_manager_id),
      (&mut draft.transaction_id, transaction_id),
    ] {
      if let Some(v) = value {
        *slot = v;
      }
    }
    if let Some(confirmed) = admin_access_confirmed {
      draft.admin_access_confirmed = confirmed;
    }
    if payment_method.is_some() {
      draft.payment_method = payment_method;
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutPhase {
  #[default]
  Collecting,
  Submitting,
  Redirecting,
}

impl Lifecycle for CheckoutPhase {
  fn can_advance_to(self, next: Self) -> bool {
    matches!(
      (self, next),
      (CheckoutPhase::Collecting, CheckoutPhase::Submitting) | (CheckoutPhase::Submitting, CheckoutPhase::Redirecting)
    )
  }

  fn label(self) -> &'static str {
    match self {
      CheckoutPhase::Collecting => "collecting",
      CheckoutPhase::Submitting => "submitting",
      CheckoutPhase::Redirecting => "redirecting",
    }
  }
}

/// Produced once per submission attempt; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
  pub order_id: String,
  pub package_id: String,
  pub confirmation_message: String,
  pub redirect_url: String,
  pub redirect_after_ms: u64,
  /// Whether the order notification actually went out. The redirect happens
  /// either way.
  pub delivered: bool,
  pub submitted_at: DateTime<Utc>,
}

/// Checkout state of one visitor.
#[derive(Debug, Clone, Default)]
pub struct CheckoutState {
  pub phase: CheckoutPhase,
  pub selected_package: Option<String>,
  pub draft: Option<CheckoutDraft>,
  pub last_submission: Option<OrderSubmission>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
  pub phase: CheckoutPhase,
  pub package: Option<Package>,
  pub draft: Option<CheckoutDraft>,
  pub submission: Option<OrderSubmission>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn complete_draft() -> CheckoutDraft {
    CheckoutDraft {
      package_id: "vip-bundle".into(),
      full_name: "Ayesha Khan".into(),
      email: "ayesha@example.com".into(),
      phone: "+92 300 0000000".into(),
      country: "Pakistan".into(),
      profile_url: "https://instagram.com/ayesha".into(),
      admin_access_confirmed: true,
      payment_method: Some(PaymentMethod::JazzCash),
      ..Default::default()
    }
  }

  #[test]
  fn complete_draft_has_no_invalid_fields() {
    assert!(complete_draft().invalid_fields().is_empty());
  }

  #[test]
  fn empty_draft_lists_every_required_field() {
    let fields = CheckoutDraft::for_package("vip-bundle").invalid_fields();
    assert_eq!(
      fields,
      vec!["fullName", "email", "phone", "country", "profileUrl", "paymentMethod", "adminAccessConfirmed"]
    );
  }

  #[test]
  fn email_shape_is_checked() {
    for bad in ["ayesha", "@example.com", "ayesha@", "ayesha@example", "ayesha@.com", "a@example."] {
      let draft = CheckoutDraft {
        email: bad.into(),
        ..complete_draft()
      };
      assert_eq!(draft.invalid_fields(), vec!["email"], "accepted {}", bad);
    }
  }

  #[test]
  fn patch_only_touches_present_fields() {
    let mut draft = complete_draft();
    DraftPatch {
      phone: Some("123".into()),
      payment_method: Some(PaymentMethod::Crypto),
      ..Default::default()
    }
    .apply(&mut draft);
    assert_eq!(draft.phone, "123");
    assert_eq!(draft.payment_method, Some(PaymentMethod::Crypto));
    assert_eq!(draft.full_name, "Ayesha Khan");
  }

  #[test]
  fn phases_only_move_forward() {
    assert!(CheckoutPhase::Collecting.can_advance_to(CheckoutPhase::Submitting));
    assert!(CheckoutPhase::Submitting.can_advance_to(CheckoutPhase::Redirecting));
    assert!(!CheckoutPhase::Submitting.can_advance_to(CheckoutPhase::Collecting));
    assert!(!CheckoutPhase::Redirecting.can_advance_to(CheckoutPhase::Submitting));
    assert!(!CheckoutPhase::Collecting.can_advance_to(CheckoutPhase::Redirecting));
  }
}
