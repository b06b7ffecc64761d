// bluetick/src/ai/mod.rs

//! The AI features as asynchronous, fallible capabilities.
//!
//! Callers hold `Arc<dyn Capability<Req, Output = ...>>` handles bundled in
//! [`Capabilities`], so a network-backed implementation can replace the
//! mocks in [`mock`] without touching any caller.

pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::Tier;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
  /// The request itself can't be served (bad input, wrong tier).
  #[error("request rejected: {0}")]
  Rejected(String),
  #[error("service unavailable: {0}")]
  Unavailable(String),
}

#[async_trait]
pub trait Capability<Req>: Send + Sync
where
  Req: Send + 'static,
{
  type Output: Send + 'static;

  async fn invoke(&self, req: Req) -> Result<Self::Output, CapabilityError>;
}

// --- Requests and results ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyKind {
  Bio,
  Caption,
  Ad,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyRequest {
  pub brand: String,
  pub niche: String,
  pub kind: CopyKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInfographicRequest {
  pub url: String,
  pub style: String,
  pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Citation {
  pub title: String,
  pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInfographic {
  pub image: GeneratedImage,
  pub citations: Vec<Citation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
  #[serde(rename = "2d")]
  Flat,
  #[serde(rename = "3d")]
  Isometric,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoInfographicRequest {
  pub repo_name: String,
  pub file_tree: String,
  pub style: String,
  pub dimension: Dimension,
  pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEditRequest {
  pub image: String,
  pub mime_type: String,
  pub prompt: String,
}

#[derive(Debug, Clone)]
pub struct TryOnRequest {
  pub image: String,
  pub model_type: String,
  pub background: String,
  pub tier: Tier,
}

#[derive(Debug, Clone)]
pub struct FashionVideoRequest {
  pub image: String,
  pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
  pub url: String,
  pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedVideo {
  pub url: String,
}

pub type DynCapability<Req, Out> = Arc<dyn Capability<Req, Output = Out>>;

/// One handle per AI feature.
#[derive(Clone)]
pub struct Capabilities {
  pub copywriter: DynCapability<CopyRequest, String>,
  pub article_infographic: DynCapability<ArticleInfographicRequest, ArticleInfographic>,
  pub repo_infographic: DynCapability<RepoInfographicRequest, GeneratedImage>,
  pub image_editor: DynCapability<ImageEditRequest, GeneratedImage>,
  pub try_on: DynCapability<TryOnRequest, GeneratedImage>,
  pub fashion_video: DynCapability<FashionVideoRequest, GeneratedVideo>,
}

impl Capabilities {
  /// Every capability served by [`mock::MockAi`] after `delay`.
  pub fn mock(delay: Duration) -> Self {
    let ai = Arc::new(mock::MockAi::new(delay));
    Self {
      copywriter: ai.clone(),
      article_infographic: ai.clone(),
      repo_infographic: ai.clone(),
      image_editor: ai.clone(),
      try_on: ai.clone(),
      fashion_video: ai,
    }
  }
}
