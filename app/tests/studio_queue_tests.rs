// tests/studio_queue_tests.rs

mod common;

use bluetick::errors::AppError;
use bluetick::models::{JobStatus, OutputKind, Tier, UploadedFile};
use bluetick::studio::{self, BatchOutcome, StudioSettings};
use common::{setup_tracing, state_with_picky_try_on, test_state, UNLOCK_CODE};
use std::collections::HashSet;
use std::sync::Arc;

fn image(name: &str) -> UploadedFile {
  UploadedFile {
    name: name.to_string(),
    mime_type: "image/jpeg".to_string(),
    size_bytes: 2048,
    image_ref: format!("data:image/jpeg;base64,{}", name),
  }
}

#[tokio::test]
async fn three_images_become_three_queued_jobs() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  let mut files = vec![image("a.jpg"), image("b.jpg"), image("c.jpg")];
  files.insert(1, UploadedFile {
    mime_type: "application/pdf".to_string(),
    ..image("brief.pdf")
  });

  let jobs = studio::enqueue_files(&session, files);
  assert_eq!(jobs.len(), 3);
  assert!(jobs.iter().all(|j| j.status == JobStatus::Queued));
  let ids: HashSet<_> = jobs.iter().map(|j| j.id.clone()).collect();
  assert_eq!(ids.len(), 3);

  let names: Vec<_> = studio::view(&session).jobs.iter().map(|j| j.file.name.clone()).collect();
  assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
}

#[tokio::test]
async fn free_tier_cannot_process() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  studio::enqueue_files(&session, vec![image("a.jpg")]);

  let err = studio::start_processing(&session).unwrap_err();
  assert!(matches!(err, AppError::Entitlement(_)));
  assert_eq!(studio::view(&session).jobs[0].status, JobStatus::Queued);
}

#[tokio::test]
async fn processing_an_empty_queue_changes_nothing() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  studio::set_tier(&session, Tier::Pro);
  let before = studio::view(&session).jobs;

  let items = studio::start_processing(&session).unwrap();
  assert!(items.is_empty());
  assert!(Arc::ptr_eq(&before, &studio::view(&session).jobs));
}

#[tokio::test]
async fn pro_tier_renders_images_only() {
  setup_tracing();
  let state = test_state();
  let (_, session) = state.store.create_session();
  studio::set_tier(&session, Tier::Pro);
  studio::update_settings(
    &session,
    StudioSettings {
      video_enabled: Some(true),
      ..Default::default()
    },
  );
  studio::enqueue_files(&session, vec![image("a.jpg"), image("b.jpg")]);

  let items = studio::start_processing(&session).unwrap();
  assert_eq!(items.len(), 2);
  assert!(studio::view(&session).jobs.iter().all(|j| j.status == JobStatus::Processing));

  let outcome = studio::run_batch(state.clone(), session.clone(), items).await;
  assert_eq!(outcome, BatchOutcome { completed: 2, failed: 0 });
  for job in studio::view(&session).jobs.iter() {
    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.output_kind, OutputKind::Image);
    assert!(job.generated_image.is_some());
    assert!(job.generated_video.is_none());
  }
}

#[tokio::test]
async fn unlocked_ultra_tier_also_renders_video() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  assert!(matches!(
    studio::unlock_tier(&state, &session, "guess"),
    Err(AppError::Validation(_))
  ));
  let view = studio::unlock_tier(&state, &session, UNLOCK_CODE).unwrap();
  assert_eq!(view.tier, Tier::Ultra);

  studio::update_settings(
    &session,
    StudioSettings {
      video_enabled: Some(true),
      ..Default::default()
    },
  );
  studio::enqueue_files(&session, vec![image("look.jpg")]);
  let items = studio::start_processing(&session).unwrap();
  studio::run_batch(state.clone(), session.clone(), items).await;

  let job = studio::view(&session).jobs[0].clone();
  assert_eq!(job.status, JobStatus::Completed);
  assert_eq!(job.output_kind, OutputKind::Video);
  assert!(job.generated_video.is_some_and(|v| v.ends_with(".mp4")));
}

#[tokio::test]
async fn one_failing_job_does_not_affect_its_siblings() {
  setup_tracing();
  let state = state_with_picky_try_on();
  let (_, session) = state.store.create_session();
  studio::set_tier(&session, Tier::Pro);
  studio::enqueue_files(&session, vec![image("ok-1"), image("corrupt"), image("ok-2")]);

  let items = studio::start_processing(&session).unwrap();
  let outcome = studio::run_batch(state.clone(), session.clone(), items).await;
  assert_eq!(outcome, BatchOutcome { completed: 2, failed: 1 });

  for job in studio::view(&session).jobs.iter() {
    if job.file.name == "corrupt" {
      assert_eq!(job.status, JobStatus::Failed);
      assert!(job.generated_image.is_none());
    } else {
      assert_eq!(job.status, JobStatus::Completed);
    }
  }
}

#[tokio::test]
async fn settled_jobs_are_never_picked_up_again() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  studio::set_tier(&session, Tier::Pro);
  studio::enqueue_files(&session, vec![image("first.jpg")]);
  let first = studio::start_processing(&session).unwrap();
  studio::run_batch(state.clone(), session.clone(), first).await;

  studio::enqueue_files(&session, vec![image("second.jpg")]);
  let second = studio::start_processing(&session).unwrap();
  assert_eq!(second.len(), 1);
  let jobs = studio::view(&session).jobs;
  assert_eq!(jobs[0].status, JobStatus::Completed);
  assert_eq!(jobs[1].status, JobStatus::Processing);
  assert_eq!(second[0].job_id, jobs[1].id);
}
