mod common;
use common::{make_token, temp_file};

use rattendance::core::session::Session;
use rattendance::errors::AppError;
use std::fs;
use std::path::Path;

#[test]
fn test_begin_derives_user_id() {
    let session = Session::begin(make_token(r#"{"id":"u-42"}"#));
    assert!(session.is_active());
    assert_eq!(session.user_id().as_deref(), Some("u-42"));
    assert!(session.token().is_ok());
}

#[test]
fn test_opaque_token_still_authenticates() {
    let session = Session::begin("opaque-token");
    assert_eq!(session.token().ok(), Some("opaque-token"));
    assert_eq!(session.user_id(), None);
}

#[test]
fn test_anonymous_session_has_no_credential() {
    let session = Session::anonymous();
    assert!(!session.is_active());
    assert!(matches!(session.token(), Err(AppError::MissingCredential)));
}

#[test]
fn test_end_forgets_everything() {
    let mut session = Session::begin(make_token(r#"{"_id":"u-7"}"#));
    session.end();
    assert!(!session.is_active());
    assert_eq!(session.user_id(), None);
    assert_eq!(session, Session::anonymous());
}

#[test]
fn test_save_load_remove() {
    let path = temp_file("session_roundtrip", "json");
    let session = Session::begin(make_token(r#"{"id":"u-1"}"#));

    session.save(Path::new(&path)).expect("save");
    let loaded = Session::load(Path::new(&path)).expect("load");
    assert_eq!(loaded, session);

    Session::remove(Path::new(&path)).expect("remove");
    assert!(!Path::new(&path).exists());
    // removing twice is fine
    Session::remove(Path::new(&path)).expect("remove again");
}

#[test]
fn test_missing_or_empty_file_is_anonymous() {
    let path = temp_file("session_missing", "json");
    assert_eq!(Session::load(Path::new(&path)).expect("load"), Session::anonymous());

    fs::write(&path, "  \n").expect("write");
    assert_eq!(Session::load(Path::new(&path)).expect("load"), Session::anonymous());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let path = temp_file("session_corrupt", "json");
    fs::write(&path, "{not json").expect("write");
    assert!(matches!(
        Session::load(Path::new(&path)),
        Err(AppError::Json(_))
    ));
}
