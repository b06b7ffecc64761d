// bluetick/src/ai/mock.rs

//! Placeholder results after a fixed delay.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use super::{
  ArticleInfographic, ArticleInfographicRequest, Capability, CapabilityError, Citation, CopyKind, CopyRequest,
  Dimension, FashionVideoRequest, GeneratedImage, GeneratedVideo, ImageEditRequest, RepoInfographicRequest,
  TryOnRequest,
};
use crate::models::Tier;

const PLACEHOLDER_HOST: &str = "https://placehold.co";

#[derive(Debug, Clone)]
pub struct MockAi {
  delay: Duration,
}

impl MockAi {
  pub fn new(delay: Duration) -> Self {
    Self { delay }
  }

  async fn wait(&self) {
    if !self.delay.is_zero() {
      tokio::time::sleep(self.delay).await;
    }
  }
}

fn require(field: &str, value: &str) -> Result<(), CapabilityError> {
  if value.trim().is_empty() {
    return Err(CapabilityError::Rejected(format!("{} is required", field)));
  }
  Ok(())
}

fn placeholder(size: &str, label: &str) -> GeneratedImage {
  let label: String = label
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() { c } else { '+' })
    .collect();
  GeneratedImage {
    url: format!("{}/{}/png?text={}", PLACEHOLDER_HOST, size, label),
    mime_type: "image/png".to_string(),
  }
}

#[async_trait]
impl Capability<CopyRequest> for MockAi {
  type Output = String;

  #[instrument(name = "mock_ai::copy", skip(self, req), fields(brand = %req.brand))]
  async fn invoke(&self, req: CopyRequest) -> Result<String, CapabilityError> {
    require("brand", &req.brand)?;
    require("niche", &req.niche)?;
    self.wait().await;
    let brand = req.brand.trim();
    let niche = req.niche.trim();
    Ok(match req.kind {
      CopyKind::Bio => format!("{} | Trusted name in {} | Officially verified", brand, niche),
      CopyKind::Caption => format!("Big news: {} is now verified. The home of {} just got official.", brand, niche),
      CopyKind::Ad => format!("Stand out in {}. {} wears the blue tick. Shop the verified original.", niche, brand),
    })
  }
}

#[async_trait]
impl Capability<ArticleInfographicRequest> for MockAi {
  type Output = ArticleInfographic;

  #[instrument(name = "mock_ai::article_infographic", skip(self, req), fields(url = %req.url))]
  async fn invoke(&self, req: ArticleInfographicRequest) -> Result<ArticleInfographic, CapabilityError> {
    require("url", &req.url)?;
    if !req.url.starts_with("http://") && !req.url.starts_with("https://") {
      return Err(CapabilityError::Rejected("url must be an http(s) link".to_string()));
    }
    self.wait().await;
    debug!(style = %req.style, language = %req.language, "Returning placeholder infographic.");
    Ok(ArticleInfographic {
      image: placeholder("1024x1536", &format!("Infographic {}", req.style)),
      citations: vec![Citation {
        title: "Source article".to_string(),
        uri: req.url,
      }],
    })
  }
}

#[async_trait]
impl Capability<RepoInfographicRequest> for MockAi {
  type Output = GeneratedImage;

  #[instrument(name = "mock_ai::repo_infographic", skip(self, req), fields(repo = %req.repo_name))]
  async fn invoke(&self, req: RepoInfographicRequest) -> Result<GeneratedImage, CapabilityError> {
    require("repoName", &req.repo_name)?;
    require("fileTree", &req.file_tree)?;
    self.wait().await;
    let view = match req.dimension {
      Dimension::Flat => "2D",
      Dimension::Isometric => "3D",
    };
    Ok(placeholder("1536x1024", &format!("{} {} map", req.repo_name, view)))
  }
}

#[async_trait]
impl Capability<ImageEditRequest> for MockAi {
  type Output = GeneratedImage;

  #[instrument(name = "mock_ai::image_edit", skip(self, req), fields(mime_type = %req.mime_type))]
  async fn invoke(&self, req: ImageEditRequest) -> Result<GeneratedImage, CapabilityError> {
    require("image", &req.image)?;
    require("prompt", &req.prompt)?;
    if !req.mime_type.starts_with("image/") {
      return Err(CapabilityError::Rejected(format!("unsupported mime type {}", req.mime_type)));
    }
    self.wait().await;
    Ok(placeholder("1024x1024", "Edited"))
  }
}

#[async_trait]
impl Capability<TryOnRequest> for MockAi {
  type Output = GeneratedImage;

  #[instrument(name = "mock_ai::try_on", skip(self, req), fields(tier = ?req.tier, model_type = %req.model_type))]
  async fn invoke(&self, req: TryOnRequest) -> Result<GeneratedImage, CapabilityError> {
    require("image", &req.image)?;
    if !req.tier.can_process() {
      return Err(CapabilityError::Rejected("try-on needs the Pro tier".to_string()));
    }
    self.wait().await;
    Ok(placeholder("800x1000", &format!("{} {}", req.model_type, req.background)))
  }
}

#[async_trait]
impl Capability<FashionVideoRequest> for MockAi {
  type Output = GeneratedVideo;

  #[instrument(name = "mock_ai::fashion_video", skip(self, req), fields(tier = ?req.tier))]
  async fn invoke(&self, req: FashionVideoRequest) -> Result<GeneratedVideo, CapabilityError> {
    require("image", &req.image)?;
    if req.tier != Tier::Ultra {
      return Err(CapabilityError::Rejected("video needs the Ultra tier".to_string()));
    }
    self.wait().await;
    Ok(GeneratedVideo {
      url: format!("https://cdn.bluetick.example/mock/runway-{}.mp4", uuid::Uuid::new_v4().simple()),
    })
  }
}
