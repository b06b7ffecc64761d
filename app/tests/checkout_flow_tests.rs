// tests/checkout_flow_tests.rs

mod common;

use bluetick::checkout;
use bluetick::errors::AppError;
use bluetick::models::{CheckoutPhase, DraftPatch};
use bluetick::pipelines::checkout_pipeline::FAILURE_MESSAGE;
use bluetick::state::AppState;
use common::{complete_patch, setup_tracing, state_with_failing_notifications, test_config, test_state, REDIRECT_URL};
use regex::Regex;
use std::time::Duration;

#[tokio::test]
async fn bundle_order_hands_off_to_the_external_form() {
  setup_tracing();
  let state = test_state();
  let (_, session) = state.store.create_session();

  let view = checkout::select_package(&session, "vip-bundle").unwrap();
  assert_eq!(view.package.as_ref().map(|p| p.price), Some(350));
  assert_eq!(view.draft.as_ref().map(|d| d.package_id.as_str()), Some("vip-bundle"));

  checkout::update_draft(&session, complete_patch()).unwrap();
  let submission = checkout::submit_checkout(&state, &session).await.unwrap();

  assert!(Regex::new(r"^VIP-\d{6}$").unwrap().is_match(&submission.order_id), "{}", submission.order_id);
  assert_eq!(submission.redirect_url, REDIRECT_URL);
  assert_eq!(submission.redirect_after_ms, 2000);
  assert!(submission.delivered);
  assert!(submission.confirmation_message.contains(&submission.order_id));

  let after = checkout::view(&session);
  assert_eq!(after.phase, CheckoutPhase::Redirecting);
  assert!(after.draft.is_none());
  assert_eq!(after.submission.as_ref(), Some(&submission));
}

#[tokio::test]
async fn incomplete_draft_is_rejected_and_stays_collecting() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  checkout::select_package(&session, "instagram-badge").unwrap();
  checkout::update_draft(
    &session,
    DraftPatch {
      email: Some("not-an-email".to_string()),
      ..complete_patch()
    },
  )
  .unwrap();

  let err = checkout::submit_checkout(&state, &session).await.unwrap_err();
  assert!(matches!(&err, AppError::Validation(m) if m.contains("email")), "{:?}", err);
  assert_eq!(checkout::view(&session).phase, CheckoutPhase::Collecting);
}

#[tokio::test]
async fn submitting_without_a_package_is_a_validation_error() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  let err = checkout::submit_checkout(&state, &session).await.unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn a_submitted_order_cannot_be_submitted_again() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  checkout::select_package(&session, "whatsapp-green").unwrap();
  checkout::update_draft(&session, complete_patch()).unwrap();
  checkout::submit_checkout(&state, &session).await.unwrap();

  let err = checkout::submit_checkout(&state, &session).await.unwrap_err();
  assert!(matches!(err, AppError::InvalidTransition { ref from, .. } if from == "redirecting"));
  assert!(matches!(
    checkout::update_draft(&session, complete_patch()),
    Err(AppError::InvalidTransition { .. })
  ));
}

#[tokio::test]
async fn reselecting_starts_a_new_order_with_a_new_id() {
  let state = test_state();
  let (_, session) = state.store.create_session();

  let mut ids = Vec::new();
  for _ in 0..2 {
    checkout::select_package(&session, "facebook-badge").unwrap();
    checkout::update_draft(&session, complete_patch()).unwrap();
    ids.push(checkout::submit_checkout(&state, &session).await.unwrap().order_id);
  }
  assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn failed_notification_still_redirects_to_the_same_form() {
  setup_tracing();
  let state = state_with_failing_notifications();
  let (_, session) = state.store.create_session();
  checkout::select_package(&session, "vip-bundle").unwrap();
  checkout::update_draft(&session, complete_patch()).unwrap();

  let submission = checkout::submit_checkout(&state, &session).await.unwrap();
  assert!(!submission.delivered);
  assert_eq!(submission.redirect_url, REDIRECT_URL);
  assert_eq!(submission.redirect_after_ms, 1000);
  assert_eq!(submission.confirmation_message, FAILURE_MESSAGE);
  assert_eq!(checkout::view(&session).phase, CheckoutPhase::Redirecting);
}

#[tokio::test]
async fn unknown_package_keeps_the_previous_selection() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  checkout::select_package(&session, "instagram-badge").unwrap();
  checkout::update_draft(&session, complete_patch()).unwrap();

  assert!(matches!(checkout::select_package(&session, "tiktok-badge"), Err(AppError::NotFound(_))));
  let view = checkout::view(&session);
  assert_eq!(view.package.map(|p| p.id), Some("instagram-badge".to_string()));
  assert_eq!(view.draft.map(|d| d.full_name), Some("Ayesha Khan".to_string()));
}

#[tokio::test]
async fn racing_submissions_produce_exactly_one_order() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  checkout::select_package(&session, "vip-bundle").unwrap();
  checkout::update_draft(&session, complete_patch()).unwrap();

  let (a, b) = tokio::join!(
    checkout::submit_checkout(&state, &session),
    checkout::submit_checkout(&state, &session)
  );
  let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
  assert_eq!(successes, 1);
  let failure = if a.is_err() { a.unwrap_err() } else { b.unwrap_err() };
  assert!(matches!(failure, AppError::InvalidTransition { .. }));
}

#[tokio::test]
async fn package_cannot_change_under_an_order_in_flight() {
  setup_tracing();
  let state = AppState::new(test_config(&[("SUBMIT_DELAY_MS", "200")])).unwrap();
  let (_, session) = state.store.create_session();
  checkout::select_package(&session, "vip-bundle").unwrap();
  checkout::update_draft(&session, complete_patch()).unwrap();

  let (submitted, reselect, edit) = tokio::join!(
    checkout::submit_checkout(&state, &session),
    async {
      tokio::time::sleep(Duration::from_millis(50)).await;
      assert_eq!(checkout::view(&session).phase, CheckoutPhase::Submitting);
      checkout::select_package(&session, "instagram-badge")
    },
    async {
      tokio::time::sleep(Duration::from_millis(60)).await;
      checkout::update_draft(&session, complete_patch())
    }
  );

  assert!(
    matches!(reselect, Err(AppError::InvalidTransition { ref from, .. }) if from == "submitting"),
    "{:?}",
    reselect
  );
  assert!(matches!(edit, Err(AppError::InvalidTransition { .. })));
  let submission = submitted.unwrap();
  assert_eq!(submission.package_id, "vip-bundle");
  assert_eq!(submission.redirect_url, REDIRECT_URL);

  let after = checkout::view(&session);
  assert_eq!(after.phase, CheckoutPhase::Redirecting);
  assert_eq!(after.submission.as_ref(), Some(&submission));

  let fresh = checkout::select_package(&session, "instagram-badge").unwrap();
  assert_eq!(fresh.phase, CheckoutPhase::Collecting);
}
