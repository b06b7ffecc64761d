// bluetick/src/store.rs

//! Centralized in-memory state: visitor sessions plus the site-wide article
//! and admin-note lists.
//!
//! Sessions expire after sitting idle for the configured TTL. Lookups drop an
//! expired entry on sight and [`SiteStore::evict_idle`] sweeps the rest.
//!
//! Lists are `Arc<Vec<_>>` snapshots. Writers build the next list with
//! `Arc::make_mut` under the lock and readers clone the `Arc`, so nobody sees
//! a half-applied update.

use chrono::NaiveDate;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tickflow::ContextData;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result as AppResult};
use crate::models::{AdminNote, Article, PostType, VisitorSession};

pub type SessionHandle = ContextData<VisitorSession>;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(2 * 60 * 60);

struct SessionEntry {
  handle: SessionHandle,
  last_seen: Mutex<Instant>,
}

impl SessionEntry {
  fn idle_for(&self, now: Instant) -> Duration {
    now.saturating_duration_since(*self.last_seen.lock())
  }
}

pub struct SiteStore {
  sessions: RwLock<HashMap<Uuid, SessionEntry>>,
  session_ttl: Duration,
  articles: RwLock<Arc<Vec<Article>>>,
  notes: RwLock<Arc<Vec<AdminNote>>>,
}

impl Default for SiteStore {
  fn default() -> Self {
    Self::with_articles(Vec::new())
  }
}

impl SiteStore {
  pub fn with_articles(articles: Vec<Article>) -> Self {
    Self {
      sessions: RwLock::new(HashMap::new()),
      session_ttl: DEFAULT_SESSION_TTL,
      articles: RwLock::new(Arc::new(articles)),
      notes: RwLock::new(Arc::new(Vec::new())),
    }
  }

  /// A store holding the launch articles.
  pub fn seeded() -> Self {
    Self::with_articles(seed_articles())
  }

  // --- Sessions ---

  pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
    self.session_ttl = ttl;
    self
  }

  pub fn session_ttl(&self) -> Duration {
    self.session_ttl
  }

  #[instrument(name = "store::create_session", skip(self))]
  pub fn create_session(&self) -> (Uuid, SessionHandle) {
    let id = Uuid::new_v4();
    let handle = SessionHandle::default();
    let entry = SessionEntry {
      handle: handle.clone(),
      last_seen: Mutex::new(Instant::now()),
    };
    self.sessions.write().insert(id, entry);
    debug!(session_id = %id, "Visitor session created.");
    (id, handle)
  }

  /// Looks up a live session and marks it as seen.
  pub fn session(&self, id: Uuid) -> AppResult<SessionHandle> {
    self.session_at(id, Instant::now())
  }

  pub fn session_at(&self, id: Uuid, now: Instant) -> AppResult<SessionHandle> {
    let not_found = || AppError::NotFound(format!("Session {} not found", id));
    {
      let sessions = self.sessions.read();
      let entry = sessions.get(&id).ok_or_else(not_found)?;
      if entry.idle_for(now) <= self.session_ttl {
        let mut seen = entry.last_seen.lock();
        *seen = (*seen).max(now);
        return Ok(entry.handle.clone());
      }
    }
    let mut sessions = self.sessions.write();
    if sessions.get(&id).is_some_and(|e| e.idle_for(now) > self.session_ttl) {
      sessions.remove(&id);
      debug!(session_id = %id, "Expired visitor session dropped on lookup.");
    }
    Err(not_found())
  }

  /// Drops every session idle for longer than the TTL. Returns how many went.
  pub fn evict_idle(&self, now: Instant) -> usize {
    let mut sessions = self.sessions.write();
    let before = sessions.len();
    sessions.retain(|_, entry| entry.idle_for(now) <= self.session_ttl);
    let evicted = before - sessions.len();
    if evicted > 0 {
      info!(evicted, remaining = sessions.len(), "Evicted idle visitor sessions.");
    }
    evicted
  }

  pub fn session_count(&self) -> usize {
    self.sessions.read().len()
  }

  // --- Articles ---

  pub fn articles(&self) -> Arc<Vec<Article>> {
    self.articles.read().clone()
  }

  pub fn article(&self, id: &str) -> AppResult<Article> {
    self
      .articles()
      .iter()
      .find(|a| a.id == id)
      .cloned()
      .ok_or_else(|| AppError::NotFound(format!("Article {} not found", id)))
  }

  /// Bumps the view counter and returns the updated article.
  pub fn record_view(&self, id: &str) -> AppResult<Article> {
    let mut guard = self.articles.write();
    let list = Arc::make_mut(&mut *guard);
    let article = list
      .iter_mut()
      .find(|a| a.id == id)
      .ok_or_else(|| AppError::NotFound(format!("Article {} not found", id)))?;
    article.views += 1;
    Ok(article.clone())
  }

  /// Prepends `article`. Its id must not already be in the list.
  pub fn prepend_article(&self, article: Article) -> AppResult<()> {
    let mut guard = self.articles.write();
    if guard.iter().any(|a| a.id == article.id) {
      return Err(AppError::Internal(format!("Duplicate article id {}", article.id)));
    }
    Arc::make_mut(&mut *guard).insert(0, article);
    Ok(())
  }

  pub fn remove_article(&self, id: &str) -> AppResult<Article> {
    let mut guard = self.articles.write();
    let idx = guard
      .iter()
      .position(|a| a.id == id)
      .ok_or_else(|| AppError::NotFound(format!("Article {} not found", id)))?;
    Ok(Arc::make_mut(&mut *guard).remove(idx))
  }

  // --- Admin notes ---

  pub fn notes(&self) -> Arc<Vec<AdminNote>> {
    self.notes.read().clone()
  }

  pub fn prepend_note(&self, note: AdminNote) {
    let mut guard = self.notes.write();
    Arc::make_mut(&mut *guard).insert(0, note);
  }
}

fn seed_articles() -> Vec<Article> {
  let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
  vec![
    Article {
      id: "why-verification-matters".to_string(),
      title: "Why the Blue Tick Still Matters".to_string(),
      excerpt: "Verification is about trust, reach and protection from impersonators.".to_string(),
      body: vec![
        "## Trust at a glance".to_string(),
        "A verified badge tells followers the account is **the real one**.".to_string(),
        "![Verified badge](https://cdn.bluetick.example/img/badge.png)".to_string(),
        "- Fewer impersonators".to_string(),
        "- Better reach in search".to_string(),
        "Our team prepares the paperwork so your application lands the first time.".to_string(),
      ],
      category: "Guides".to_string(),
      date: date(2024, 3, 12),
      author: "Bluetick Team".to_string(),
      tags: vec!["verification".to_string(), "instagram".to_string()],
      cover_image: "https://cdn.bluetick.example/img/cover-trust.jpg".to_string(),
      post_type: PostType::Article,
      audio_url: None,
      views: 0,
    },
    Article {
      id: "whatsapp-green-tick-guide".to_string(),
      title: "Getting the WhatsApp Green Tick".to_string(),
      excerpt: "What Meta looks for in an official business account.".to_string(),
      body: vec![
        "# The official business account".to_string(),
        "Meta reviews **notability**, a linked Business Manager and a consistent display name.".to_string(),
        "* Keep your display name identical to your brand".to_string(),
        "* Link press coverage on your website".to_string(),
      ],
      category: "WhatsApp".to_string(),
      date: date(2024, 5, 2),
      author: "Bluetick Team".to_string(),
      tags: vec!["whatsapp".to_string(), "business".to_string()],
      cover_image: "https://cdn.bluetick.example/img/cover-whatsapp.jpg".to_string(),
      post_type: PostType::Article,
      audio_url: None,
      views: 0,
    },
  ]
}
