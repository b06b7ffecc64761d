// bluetick/src/studio.rs

//! The fashion studio queue: uploads become `queued` jobs, `process` fans
//! every queued job out into its own flow run.

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tickflow::{advance, ContextData, PipelineResult};
use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result as AppResult};
use crate::models::{FashionJob, JobStatus, OutputKind, Tier, UploadedFile};
use crate::pipelines::contexts::FashionJobCtxData;
use crate::state::AppState;
use crate::store::SessionHandle;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioView {
  pub tier: Tier,
  pub video_enabled: bool,
  /// Whether processed jobs will also get a video.
  pub video_available: bool,
  pub model_type: String,
  pub background: String,
  pub jobs: Arc<Vec<FashionJob>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioSettings {
  pub model_type: Option<String>,
  pub background: Option<String>,
  pub video_enabled: Option<bool>,
}

/// A job picked up by `start_processing`, with the settings it runs under.
#[derive(Debug, Clone)]
pub struct BatchItem {
  pub job_id: String,
  pub source_image: String,
  pub model_type: String,
  pub background: String,
  pub tier: Tier,
  pub want_video: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
  pub completed: usize,
  pub failed: usize,
}

pub fn view(session: &SessionHandle) -> StudioView {
  let guard = session.read();
  let studio = &guard.studio;
  StudioView {
    tier: studio.tier,
    video_enabled: studio.video_enabled,
    video_available: studio.tier.can_generate_video(),
    model_type: studio.model_type.clone(),
    background: studio.background.clone(),
    jobs: studio.jobs.clone(),
  }
}

/// Appends one `queued` job per image file, in arrival order.
#[instrument(name = "studio::enqueue_files", skip_all, fields(files = files.len()))]
pub fn enqueue_files(session: &SessionHandle, files: Vec<UploadedFile>) -> Vec<FashionJob> {
  let (images, skipped): (Vec<_>, Vec<_>) = files.into_iter().partition(UploadedFile::is_image);
  if !skipped.is_empty() {
    info!(skipped = skipped.len(), "Ignoring non-image uploads.");
  }
  let new_jobs: Vec<FashionJob> = images.into_iter().map(FashionJob::from_upload).collect();
  if !new_jobs.is_empty() {
    session.update(|s| Arc::make_mut(&mut s.studio.jobs).extend(new_jobs.iter().cloned()));
  }
  new_jobs
}

/// Marks every `queued` job `processing` and returns the work to run.
///
/// With nothing queued the session is left untouched.
#[instrument(name = "studio::start_processing", skip_all)]
pub fn start_processing(session: &SessionHandle) -> AppResult<Vec<BatchItem>> {
  session.update(|s| {
    let studio = &mut s.studio;
    if !studio.tier.can_process() {
      return Err(AppError::Entitlement("Processing needs the Pro or Ultra tier.".to_string()));
    }
    if !studio.jobs.iter().any(|j| j.status == JobStatus::Queued) {
      return Ok(Vec::new());
    }

    let want_video = studio.video_enabled && studio.tier.can_generate_video();
    let (tier, model_type, background) = (studio.tier, studio.model_type.clone(), studio.background.clone());
    let mut items = Vec::new();
    for job in Arc::make_mut(&mut studio.jobs).iter_mut() {
      if job.status != JobStatus::Queued {
        continue;
      }
      advance(&mut job.status, JobStatus::Processing)?;
      job.output_kind = if want_video { OutputKind::Video } else { OutputKind::Image };
      items.push(BatchItem {
        job_id: job.id.clone(),
        source_image: job.original_image.clone(),
        model_type: model_type.clone(),
        background: background.clone(),
        tier,
        want_video,
      });
    }
    info!(jobs = items.len(), want_video, "Batch started.");
    Ok(items)
  })
}

/// Runs every item concurrently; each job settles on its own.
#[instrument(name = "studio::run_batch", skip_all, fields(jobs = items.len()))]
pub async fn run_batch(app_state: AppState, session: SessionHandle, items: Vec<BatchItem>) -> BatchOutcome {
  let runs = items.into_iter().map(|item| {
    let app_state = app_state.clone();
    let session = session.clone();
    async move {
      let job_id = item.job_id.clone();
      let result = run_job(&app_state, item).await;
      record_result(&session, &job_id, result)
    }
  });

  let mut outcome = BatchOutcome::default();
  for status in join_all(runs).await {
    match status {
      Some(JobStatus::Completed) => outcome.completed += 1,
      Some(_) => outcome.failed += 1,
      None => {}
    }
  }
  info!(completed = outcome.completed, failed = outcome.failed, "Batch finished.");
  outcome
}

type JobOutput = (String, Option<String>);

async fn run_job(app_state: &AppState, item: BatchItem) -> AppResult<JobOutput> {
  let ctx_data = ContextData::new(FashionJobCtxData {
    capabilities: app_state.capabilities.clone(),
    job_id: item.job_id,
    source_image: item.source_image,
    model_type: item.model_type,
    background: item.background,
    tier: item.tier,
    want_video: item.want_video,
    generated_image: None,
    generated_video: None,
  });

  let result = app_state.flows.run(ctx_data.clone()).await?;
  if result == PipelineResult::Stopped {
    return Err(AppError::Internal("Fashion job was halted.".to_string()));
  }
  let guard = ctx_data.read();
  let image = guard
    .generated_image
    .as_ref()
    .map(|i| i.url.clone())
    .ok_or_else(|| AppError::Internal("Fashion job produced no image.".to_string()))?;
  Ok((image, guard.generated_video.as_ref().map(|v| v.url.clone())))
}

/// Settles a `processing` job. Returns the status it ended in, or `None` if
/// the job is gone or was already settled.
fn record_result(session: &SessionHandle, job_id: &str, result: AppResult<JobOutput>) -> Option<JobStatus> {
  session.update(|s| {
    let jobs = Arc::make_mut(&mut s.studio.jobs);
    let Some(job) = jobs.iter_mut().find(|j| j.id == job_id) else {
      warn!(%job_id, "Finished job is no longer in the queue.");
      return None;
    };
    let next = if result.is_ok() { JobStatus::Completed } else { JobStatus::Failed };
    if let Err(e) = advance(&mut job.status, next) {
      warn!(%job_id, error = %e, "Job already settled.");
      return None;
    }
    match result {
      Ok((image, video)) => {
        job.generated_image = Some(image);
        job.generated_video = video;
      }
      Err(e) => warn!(%job_id, error = %e, "Fashion job failed."),
    }
    Some(job.status)
  })
}

pub fn set_tier(session: &SessionHandle, tier: Tier) -> StudioView {
  session.update(|s| s.studio.tier = tier);
  info!(?tier, "Studio tier set.");
  view(session)
}

/// The unlock code jumps straight to Ultra.
#[instrument(name = "studio::unlock_tier", skip_all)]
pub fn unlock_tier(app_state: &AppState, session: &SessionHandle, code: &str) -> AppResult<StudioView> {
  if code.trim() != app_state.config.tier_unlock_code {
    warn!("Wrong tier unlock code.");
    return Err(AppError::Validation("Invalid unlock code.".to_string()));
  }
  Ok(set_tier(session, Tier::Ultra))
}

pub fn update_settings(session: &SessionHandle, settings: StudioSettings) -> StudioView {
  session.update(|s| {
    let studio = &mut s.studio;
    if let Some(model_type) = settings.model_type.filter(|m| !m.trim().is_empty()) {
      studio.model_type = model_type;
    }
    if let Some(background) = settings.background.filter(|b| !b.trim().is_empty()) {
      studio.background = background;
    }
    if let Some(enabled) = settings.video_enabled {
      studio.video_enabled = enabled;
    }
  });
  view(session)
}
