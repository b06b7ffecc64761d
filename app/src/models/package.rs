// bluetick/src/models/package.rs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
  Instagram,
  Facebook,
  WhatsApp,
  Bundle,
  All,
}

/// A purchasable verification bundle. Prices are whole currency units (USD).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
  pub id: String,
  pub title: String,
  pub price: u32,
  pub turnaround: String,
  pub platform: Platform,
  pub features: Vec<String>,
  pub highlight: bool,
}

impl Package {
  pub fn price_display(&self) -> String {
    format!("${}", self.price)
  }
}

fn package(
  id: &str,
  title: &str,
  price: u32,
  turnaround: &str,
  platform: Platform,
  features: &[&str],
  highlight: bool,
) -> Package {
  Package {
    id: id.to_string(),
    title: title.to_string(),
    price,
    turnaround: turnaround.to_string(),
    platform,
    features: features.iter().map(|f| f.to_string()).collect(),
    highlight,
  }
}

static CATALOG: Lazy<Vec<Package>> = Lazy::new(|| {
  vec![
    package(
      "instagram-badge",
      "Instagram Verification",
      130,
      "3-5 business days",
      Platform::Instagram,
      &["Blue badge application", "Profile audit", "Press kit review"],
      false,
    ),
    package(
      "facebook-badge",
      "Facebook Page Verification",
      130,
      "3-5 business days",
      Platform::Facebook,
      &["Page verification", "Business Manager setup", "Profile audit"],
      false,
    ),
    package(
      "whatsapp-green",
      "WhatsApp Business Green Tick",
      200,
      "5-7 business days",
      Platform::WhatsApp,
      &["Official business account", "Display name approval", "Meta Business linking"],
      false,
    ),
    package(
      "vip-bundle",
      "VIP All-Platform Bundle",
      350,
      "7-10 business days",
      Platform::Bundle,
      &[
        "Instagram, Facebook and WhatsApp",
        "Priority handling",
        "Dedicated account manager",
        "Re-application if rejected",
      ],
      true,
    ),
  ]
});

/// The static package catalog, in display order.
pub fn catalog() -> &'static [Package] {
  &CATALOG
}

pub fn find_package(id: &str) -> Option<&'static Package> {
  CATALOG.iter().find(|p| p.id == id)
}
