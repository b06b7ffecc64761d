// bluetick/src/models/site.rs

use serde::{Deserialize, Serialize};

/// Anchor targets on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
  Hero,
  Services,
  Process,
  WhyUs,
  Verification,
}

impl Section {
  pub const ALL: [Section; 5] = [
    Section::Hero,
    Section::Services,
    Section::Process,
    Section::WhyUs,
    Section::Verification,
  ];

  pub fn anchor(self) -> &'static str {
    match self {
      Section::Hero => "hero",
      Section::Services => "services",
      Section::Process => "process",
      Section::WhyUs => "why-us",
      Section::Verification => "verification",
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Dark,
  Light,
}
