// bluetick/src/models/fashion_job.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tickflow::Lifecycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
  Queued,
  Processing,
  Completed,
  Failed,
}

impl Lifecycle for JobStatus {
  fn can_advance_to(self, next: Self) -> bool {
    matches!(
      (self, next),
      (JobStatus::Queued, JobStatus::Processing)
        | (JobStatus::Processing, JobStatus::Completed)
        | (JobStatus::Processing, JobStatus::Failed)
    )
  }

  fn label(self) -> &'static str {
    match self {
      JobStatus::Queued => "queued",
      JobStatus::Processing => "processing",
      JobStatus::Completed => "completed",
      JobStatus::Failed => "failed",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
  Image,
  Video,
}

/// Studio entitlement. Checked server side, but the unlock code makes it a
/// convenience flag rather than a paywall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
  #[default]
  Free,
  Pro,
  Ultra,
}

impl Tier {
  pub fn can_process(self) -> bool {
    self >= Tier::Pro
  }

  pub fn can_generate_video(self) -> bool {
    self == Tier::Ultra
  }
}

/// Metadata of a file handed to the studio uploader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
  pub name: String,
  pub mime_type: String,
  #[serde(default)]
  pub size_bytes: u64,
  /// Data URL or remote URL of the image content.
  pub image_ref: String,
}

impl UploadedFile {
  pub fn is_image(&self) -> bool {
    self.mime_type.trim().to_ascii_lowercase().starts_with("image/")
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FashionJob {
  pub id: String,
  pub original_image: String,
  pub file: UploadedFile,
  pub status: JobStatus,
  pub output_kind: OutputKind,
  pub generated_image: Option<String>,
  pub generated_video: Option<String>,
  pub created_at: DateTime<Utc>,
}

impl FashionJob {
  pub fn from_upload(file: UploadedFile) -> Self {
    Self {
      id: uuid::Uuid::new_v4().simple().to_string(),
      original_image: file.image_ref.clone(),
      file,
      status: JobStatus::Queued,
      output_kind: OutputKind::Image,
      generated_image: None,
      generated_video: None,
      created_at: Utc::now(),
    }
  }
}
