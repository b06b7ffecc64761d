// bluetick/src/models/article.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
  #[default]
  Article,
  Voice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  pub id: String,
  pub title: String,
  pub excerpt: String,
  /// Paragraphs with inline markdown; see `services::markdown`.
  pub body: Vec<String>,
  pub category: String,
  pub date: NaiveDate,
  pub author: String,
  pub tags: Vec<String>,
  pub cover_image: String,
  pub post_type: PostType,
  pub audio_url: Option<String>,
  pub views: u64,
}

/// What the admin editor holds before an article is published.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleDraft {
  pub title: String,
  pub excerpt: String,
  pub body: Vec<String>,
  pub category: String,
  pub author: String,
  pub tags: Vec<String>,
  pub cover_image: String,
  pub post_type: PostType,
  pub audio_url: Option<String>,
}

impl ArticleDraft {
  pub fn publish(self, id: String, date: NaiveDate) -> Article {
    Article {
      id,
      title: self.title.trim().to_string(),
      excerpt: self.excerpt,
      body: self.body,
      category: self.category,
      date,
      author: self.author,
      tags: self.tags,
      cover_image: self.cover_image,
      post_type: self.post_type,
      audio_url: self.audio_url,
      views: 0,
    }
  }
}
