// tests/admin_panel_tests.rs

mod common;

use bluetick::admin;
use bluetick::errors::AppError;
use bluetick::models::{AdminTab, ArticleDraft, PostType, QuickAction};
use common::{test_state, ADMIN_PASSWORD};

#[test]
fn login_accepts_only_the_configured_password() {
  let state = test_state();
  let (_, session) = state.store.create_session();

  let err = admin::login(&state, &session, "admin123").unwrap_err();
  assert!(matches!(err, AppError::Auth(_)));
  {
    let panel = &session.read().admin;
    assert!(panel.login_error);
    assert!(!panel.authenticated);
  }

  admin::login(&state, &session, ADMIN_PASSWORD).unwrap();
  let panel = &session.read().admin;
  assert!(panel.authenticated);
  assert!(!panel.login_error);
}

#[test]
fn successful_login_never_raises_the_error_flag() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  admin::login(&state, &session, ADMIN_PASSWORD).unwrap();
  assert!(!session.read().admin.login_error);
}

#[test]
fn wrong_password_does_not_sign_out_an_admin() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  admin::login(&state, &session, ADMIN_PASSWORD).unwrap();

  assert!(matches!(admin::login(&state, &session, "guess"), Err(AppError::Auth(_))));
  {
    let panel = &session.read().admin;
    assert!(panel.authenticated);
    assert!(panel.login_error);
  }
  assert!(admin::panel(&state.store, &session).is_ok());
}

#[test]
fn admin_operations_require_login() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  assert!(matches!(admin::panel(&state.store, &session), Err(AppError::Auth(_))));
  assert!(matches!(admin::post_note(&state.store, &session, "hi"), Err(AppError::Auth(_))));
  assert!(matches!(
    admin::quick_action(&session, QuickAction::VoicePost),
    Err(AppError::Auth(_))
  ));
  assert!(state.store.notes().is_empty());
}

#[test]
fn voice_post_prefills_the_editor() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  admin::login(&state, &session, ADMIN_PASSWORD).unwrap();

  let panel = admin::quick_action(&session, QuickAction::VoicePost).unwrap();
  assert_eq!(panel.editor.category, "Cricket");
  assert_eq!(panel.editor.post_type, PostType::Voice);
  assert_eq!(panel.active_tab, AdminTab::Editor);

  let panel = admin::quick_action(&session, QuickAction::NewArticle).unwrap();
  assert_eq!(panel.editor, ArticleDraft::default());
  assert_eq!(panel.active_tab, AdminTab::Editor);
}

#[test]
fn notes_are_prepended_and_must_have_text() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  admin::login(&state, &session, ADMIN_PASSWORD).unwrap();

  assert!(matches!(admin::post_note(&state.store, &session, "   "), Err(AppError::Validation(_))));
  admin::post_note(&state.store, &session, "Call the Lahore client").unwrap();
  admin::post_note(&state.store, &session, "Invoice sent").unwrap();
  let notes = admin::notes(&state.store, &session).unwrap();
  assert_eq!(notes[0].text, "Invoice sent");
  assert_eq!(notes[1].text, "Call the Lahore client");
  assert_eq!(notes[0].display_time.len(), 5);
}

#[test]
fn published_articles_get_fresh_ids_and_go_first() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  admin::login(&state, &session, ADMIN_PASSWORD).unwrap();
  let before = state.store.articles().len();

  let draft = ArticleDraft {
    title: "Match day voice note".to_string(),
    body: vec!["**Pakistan** won the toss.".to_string()],
    category: "Cricket".to_string(),
    author: "Admin".to_string(),
    post_type: PostType::Voice,
    ..Default::default()
  };
  let a = admin::save_article(&state.store, &session, Some(draft.clone())).unwrap();
  let b = admin::save_article(&state.store, &session, Some(draft)).unwrap();
  assert_ne!(a.id, b.id);
  assert_eq!(a.views, 0);

  let articles = state.store.articles();
  assert_eq!(articles.len(), before + 2);
  assert_eq!(articles[0].id, b.id);

  admin::delete_article(&state.store, &session, &a.id).unwrap();
  assert!(matches!(state.store.article(&a.id), Err(AppError::NotFound(_))));
}

#[test]
fn editor_contents_are_published_when_no_draft_is_given() {
  let state = test_state();
  let (_, session) = state.store.create_session();
  admin::login(&state, &session, ADMIN_PASSWORD).unwrap();
  assert!(matches!(
    admin::save_article(&state.store, &session, None),
    Err(AppError::Validation(_))
  ));

  admin::update_editor(
    &session,
    ArticleDraft {
      title: "From the editor".to_string(),
      body: vec!["Body".to_string()],
      ..Default::default()
    },
  )
  .unwrap();
  let article = admin::save_article(&state.store, &session, None).unwrap();
  assert_eq!(article.title, "From the editor");
  assert_eq!(session.read().admin.editor, ArticleDraft::default());
}
