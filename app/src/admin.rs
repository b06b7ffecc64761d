// bluetick/src/admin.rs

//! Admin dashboard operations. Everything but `login` needs an
//! authenticated session.

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result as AppResult};
use crate::models::{AdminNote, AdminPanel, AdminTab, Article, ArticleDraft, PostType, QuickAction};
use crate::state::AppState;
use crate::store::{SessionHandle, SiteStore};

pub const VOICE_POST_CATEGORY: &str = "Cricket";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
  #[serde(flatten)]
  pub panel: AdminPanel,
  pub notes: Arc<Vec<AdminNote>>,
  pub article_count: usize,
}

/// Checks `password` against the configured credential. The error flag is
/// raised only on rejection and cleared on success. A rejected attempt does
/// not end an existing sign-in.
#[instrument(name = "admin::login", skip_all)]
pub fn login(app_state: &AppState, session: &SessionHandle, password: &str) -> AppResult<()> {
  let accepted = app_state.admin_credential.verify(password)?;
  session.update(|s| {
    if accepted {
      s.admin.authenticated = true;
    }
    s.admin.login_error = !accepted;
  });
  if accepted {
    info!("Admin signed in.");
    Ok(())
  } else {
    warn!("Admin sign-in rejected.");
    Err(AppError::Auth("Incorrect password.".to_string()))
  }
}

pub fn logout(session: &SessionHandle) {
  session.update(|s| s.admin = AdminPanel::default());
}

fn require_admin(session: &SessionHandle) -> AppResult<()> {
  if session.read().admin.authenticated {
    Ok(())
  } else {
    Err(AppError::Auth("Admin login required.".to_string()))
  }
}

pub fn panel(store: &SiteStore, session: &SessionHandle) -> AppResult<PanelView> {
  require_admin(session)?;
  Ok(PanelView {
    panel: session.read().admin.clone(),
    notes: store.notes(),
    article_count: store.articles().len(),
  })
}

pub fn notes(store: &SiteStore, session: &SessionHandle) -> AppResult<Arc<Vec<AdminNote>>> {
  require_admin(session)?;
  Ok(store.notes())
}

#[instrument(name = "admin::post_note", skip_all)]
pub fn post_note(store: &SiteStore, session: &SessionHandle, text: &str) -> AppResult<AdminNote> {
  require_admin(session)?;
  let text = text.trim();
  if text.is_empty() {
    return Err(AppError::Validation("Message cannot be empty.".to_string()));
  }
  let note = AdminNote::new(text, Utc::now());
  store.prepend_note(note.clone());
  Ok(note)
}

/// Publishes `draft`, or the session's editor contents when `None`.
#[instrument(name = "admin::save_article", skip_all)]
pub fn save_article(store: &SiteStore, session: &SessionHandle, draft: Option<ArticleDraft>) -> AppResult<Article> {
  require_admin(session)?;
  let draft = draft.unwrap_or_else(|| session.read().admin.editor.clone());
  if draft.title.trim().is_empty() {
    return Err(AppError::Validation("Article title is required.".to_string()));
  }
  if draft.body.iter().all(|p| p.trim().is_empty()) {
    return Err(AppError::Validation("Article body is required.".to_string()));
  }

  let article = draft.publish(uuid::Uuid::new_v4().simple().to_string(), Utc::now().date_naive());
  store.prepend_article(article.clone())?;
  session.update(|s| {
    s.admin.editor = ArticleDraft::default();
    s.admin.active_tab = AdminTab::Articles;
  });
  info!(article_id = %article.id, post_type = ?article.post_type, "Article published.");
  Ok(article)
}

pub fn delete_article(store: &SiteStore, session: &SessionHandle, id: &str) -> AppResult<Article> {
  require_admin(session)?;
  let removed = store.remove_article(id)?;
  info!(article_id = %id, "Article deleted.");
  Ok(removed)
}

/// Dashboard shortcuts that prefill the editor and switch to it.
#[instrument(name = "admin::quick_action", skip(session))]
pub fn quick_action(session: &SessionHandle, action: QuickAction) -> AppResult<AdminPanel> {
  require_admin(session)?;
  Ok(session.update(|s| {
    let admin = &mut s.admin;
    match action {
      QuickAction::VoicePost => {
        admin.editor.category = VOICE_POST_CATEGORY.to_string();
        admin.editor.post_type = PostType::Voice;
      }
      QuickAction::NewArticle => admin.editor = ArticleDraft::default(),
    }
    admin.active_tab = AdminTab::Editor;
    admin.clone()
  }))
}

pub fn set_tab(session: &SessionHandle, tab: AdminTab) -> AppResult<AdminPanel> {
  require_admin(session)?;
  Ok(session.update(|s| {
    s.admin.active_tab = tab;
    s.admin.clone()
  }))
}

pub fn update_editor(session: &SessionHandle, draft: ArticleDraft) -> AppResult<AdminPanel> {
  require_admin(session)?;
  Ok(session.update(|s| {
    s.admin.editor = draft;
    s.admin.clone()
  }))
}
