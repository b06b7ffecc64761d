// bluetick/src/reader.rs

//! Read-aloud state of the article reader.
//!
//! Speech and auto-scroll are driven together: the scroll offset only grows
//! while speaking, and pause, resume and stop act on both. Every operation
//! takes the current `Instant` so the machine stays a pure function of its
//! inputs.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tickflow::{advance, FlowResult, Lifecycle};
use tracing::{debug, instrument};

use crate::models::Article;
use crate::services::markdown;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  #[default]
  En,
  Ur,
  Hi,
  Ar,
}

impl Language {
  /// BCP 47 tag handed to the speech engine.
  pub fn voice(self) -> &'static str {
    match self {
      Language::En => "en-US",
      Language::Ur => "ur-PK",
      Language::Hi => "hi-IN",
      Language::Ar => "ar-SA",
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaderStatus {
  #[default]
  Idle,
  Speaking,
  Paused,
}

impl Lifecycle for ReaderStatus {
  fn can_advance_to(self, next: Self) -> bool {
    use ReaderStatus::*;
    matches!(
      (self, next),
      (Idle, Speaking) | (Speaking, Paused) | (Paused, Speaking) | (Speaking, Idle) | (Paused, Idle)
    )
  }

  fn label(self) -> &'static str {
    match self {
      ReaderStatus::Idle => "idle",
      ReaderStatus::Speaking => "speaking",
      ReaderStatus::Paused => "paused",
    }
  }
}

/// One speech request: the whole article in one go.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Utterance {
  pub article_id: String,
  pub text: String,
  pub language: Language,
  pub voice: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderSession {
  pub status: ReaderStatus,
  /// Used by the next `listen`; the running utterance keeps its own.
  pub language: Language,
  pub utterance: Option<Utterance>,
  pub scroll_offset: f64,
  #[serde(skip)]
  clock: Option<Instant>,
}

/// Title, author and body paragraphs as plain text, images left out.
pub fn utterance_text(article: &Article) -> String {
  let mut parts = vec![article.title.trim().to_string(), format!("By {}", article.author.trim())];
  parts.extend(article.body.iter().filter_map(|p| markdown::plain_text(p)));
  parts.join(". ")
}

impl ReaderSession {
  /// Starts reading `article` from the top, cancelling anything in progress.
  #[instrument(name = "reader::listen", skip(self, article, now), fields(article_id = %article.id, language = ?self.language))]
  pub fn listen(&mut self, article: &Article, now: Instant) -> &Utterance {
    self.status = ReaderStatus::Speaking;
    self.scroll_offset = 0.0;
    self.clock = Some(now);
    debug!("Speech and auto-scroll started.");
    self.utterance.insert(Utterance {
      article_id: article.id.clone(),
      text: utterance_text(article),
      language: self.language,
      voice: self.language.voice(),
    })
  }

  pub fn pause(&mut self, now: Instant, px_per_sec: f64) -> FlowResult<()> {
    self.sync(now, px_per_sec);
    advance(&mut self.status, ReaderStatus::Paused)?;
    self.clock = None;
    Ok(())
  }

  pub fn resume(&mut self, now: Instant) -> FlowResult<()> {
    advance(&mut self.status, ReaderStatus::Speaking)?;
    self.clock = Some(now);
    Ok(())
  }

  /// Cancels speech and scroll. The chosen language survives.
  pub fn stop(&mut self) {
    *self = ReaderSession {
      language: self.language,
      ..Default::default()
    };
  }

  pub fn set_language(&mut self, language: Language) {
    self.language = language;
  }

  /// Advances the scroll by `elapsed` if speaking.
  pub fn tick(&mut self, elapsed: Duration, px_per_sec: f64) {
    if self.status == ReaderStatus::Speaking {
      self.scroll_offset += elapsed.as_secs_f64() * px_per_sec;
    }
  }

  /// Accounts for the time since the last sync.
  pub fn sync(&mut self, now: Instant, px_per_sec: f64) {
    if let Some(since) = self.clock {
      self.tick(now.saturating_duration_since(since), px_per_sec);
      self.clock = Some(now);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::PostType;
  use chrono::NaiveDate;

  fn article() -> Article {
    Article {
      id: "a1".into(),
      title: "Green Tick".into(),
      excerpt: String::new(),
      body: vec![
        "## Steps".into(),
        "![diagram](https://cdn.example.com/d.png)".into(),
        "Apply with **Meta**".into(),
      ],
      category: "WhatsApp".into(),
      date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
      author: "Sana".into(),
      tags: vec![],
      cover_image: String::new(),
      post_type: PostType::Article,
      audio_url: None,
      views: 0,
    }
  }

  #[test]
  fn utterance_joins_title_author_and_text() {
    assert_eq!(utterance_text(&article()), "Green Tick. By Sana. Steps. Apply with Meta");
  }

  #[test]
  fn scroll_moves_only_while_speaking() {
    let t0 = Instant::now();
    let mut reader = ReaderSession::default();
    reader.listen(&article(), t0);
    reader.pause(t0 + Duration::from_secs(2), 30.0).unwrap();
    assert_eq!(reader.scroll_offset, 60.0);

    reader.sync(t0 + Duration::from_secs(10), 30.0);
    assert_eq!(reader.scroll_offset, 60.0);

    reader.resume(t0 + Duration::from_secs(10)).unwrap();
    reader.sync(t0 + Duration::from_secs(11), 30.0);
    assert_eq!(reader.scroll_offset, 90.0);
  }

  #[test]
  fn language_change_waits_for_the_next_listen() {
    let now = Instant::now();
    let mut reader = ReaderSession::default();
    reader.listen(&article(), now);
    reader.set_language(Language::Ur);
    assert_eq!(reader.utterance.as_ref().unwrap().voice, "en-US");
    reader.stop();
    assert_eq!(reader.language, Language::Ur);
    assert_eq!(reader.listen(&article(), now).voice, "ur-PK");
  }

  #[test]
  fn stop_resets_and_pause_needs_speech() {
    let now = Instant::now();
    let mut reader = ReaderSession::default();
    assert!(reader.pause(now, 30.0).is_err());
    assert!(reader.resume(now).is_err());
    reader.listen(&article(), now);
    reader.stop();
    assert_eq!(reader.status, ReaderStatus::Idle);
    assert!(reader.utterance.is_none());
    assert_eq!(reader.scroll_offset, 0.0);
  }
}
