// bluetick/src/models/admin.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::article::ArticleDraft;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminNote {
  pub id: String,
  pub text: String,
  pub created_at: DateTime<Utc>,
  /// `HH:MM`, as shown next to the message.
  pub display_time: String,
}

impl AdminNote {
  pub fn new(text: impl Into<String>, now: DateTime<Utc>) -> Self {
    Self {
      id: uuid::Uuid::new_v4().to_string(),
      text: text.into(),
      created_at: now,
      display_time: now.format("%H:%M").to_string(),
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
  #[default]
  Dashboard,
  Editor,
  Articles,
  Messages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickAction {
  VoicePost,
  NewArticle,
}

impl QuickAction {
  pub fn from_slug(slug: &str) -> Option<Self> {
    match slug {
      "voice-post" => Some(QuickAction::VoicePost),
      "new-article" => Some(QuickAction::NewArticle),
      _ => None,
    }
  }
}

/// Admin dashboard state of one visitor.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPanel {
  pub authenticated: bool,
  pub login_error: bool,
  pub active_tab: AdminTab,
  pub editor: ArticleDraft,
}
